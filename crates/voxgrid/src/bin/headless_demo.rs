//! # Headless Demo
//!
//! Seeds a hills world, meshes every chunk and runs a scripted edit session
//! through the same click path a windowed host would use.
//!
//! Run with: cargo run --bin headless_demo [-- path/to/world.toml]

use std::time::Instant;

use voxgrid::shared::Vec3;
use voxgrid::world::{HillsGenerator, Voxel, VoxelWorld, WorldConfig, WorldResult};
use voxgrid::{pointer_to_ndc, ClickTracker, EditController, VoxelSelection};

/// Canvas used to report pointer coordinates.
const CANVAS_SIZE: [f32; 2] = [1280.0, 720.0];

fn print_mesh_stats(world: &VoxelWorld) {
    let meshes = world.meshes();
    let quads: usize = meshes.iter().map(|m| m.quad_count()).sum();
    let bytes: usize = meshes
        .iter()
        .map(|m| {
            m.position_bytes().len()
                + m.normal_bytes().len()
                + m.uv_bytes().len()
                + m.index_bytes().len()
        })
        .sum();

    println!("  Chunks:   {}", world.chunk_count());
    println!("  Meshes:   {}", meshes.len());
    println!("  Quads:    {quads}");
    println!("  Triangles:{:>8}", quads * 2);
    println!("  GPU data: {:.1} KiB", bytes as f64 / 1024.0);
}

/// Simulates press, a little jitter and release at the canvas center.
fn click_at_center(tracker: &mut ClickTracker) -> Option<[f32; 2]> {
    let center = [CANVAS_SIZE[0] / 2.0, CANVAS_SIZE[1] / 2.0];
    tracker.press(center);
    tracker.movement([center[0] + 1.0, center[1]]);
    tracker
        .release()
        .then(|| pointer_to_ndc(center, CANVAS_SIZE))
}

fn main() -> WorldResult<()> {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║                    VOXGRID HEADLESS DEMO                       ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::from_file(path)?,
        None => WorldConfig::default(),
    };

    let mut world = VoxelWorld::new(config)?;
    let size = world.chunk_size();

    println!();
    println!("[1/3] Seeding terrain (chunk size {size}, seed {})", config.terrain.seed);
    let started = Instant::now();
    let written = HillsGenerator::new(world.config().terrain).seed(&mut world);
    world.rebuild_all_meshes();
    println!("  Voxels:   {written}");
    print_mesh_stats(&world);
    println!("  Time:     {:?}", started.elapsed());

    // Camera straight above the middle of the footprint, looking down.
    let middle = f64::from(config.terrain.extent_chunks * size) / 2.0;
    #[allow(clippy::cast_possible_truncation)]
    let middle = middle as f32 + 0.5;
    let camera = Vec3::new(middle, (size * 2) as f32, middle);
    let far = Vec3::new(middle, -1.0, middle);

    let mut tracker = ClickTracker::default();
    let mut controller = EditController::new(VoxelSelection::default());
    controller.selection.toggle(Voxel::new(3));

    println!();
    println!("[2/3] Placing voxel {}", controller.selection.current().material_id());
    if let Some(ndc) = click_at_center(&mut tracker) {
        println!("  Pointer NDC: ({:.2}, {:.2})", ndc[0], ndc[1]);
        match controller.handle_click(&mut world, camera, far, false) {
            Some(outcome) => println!(
                "  Placed at {:?}, remeshed {} chunk(s)",
                outcome.target,
                outcome.remeshed.len()
            ),
            None => println!("  Ray missed"),
        }
    }

    println!();
    println!("[3/3] Removing with shift");
    if click_at_center(&mut tracker).is_some() {
        match controller.handle_click(&mut world, camera, far, true) {
            Some(outcome) => println!(
                "  Removed at {:?}, remeshed {} chunk(s)",
                outcome.target,
                outcome.remeshed.len()
            ),
            None => println!("  Ray missed"),
        }
    }

    println!();
    println!("Final state:");
    print_mesh_stats(&world);
    println!("  Redraw pending: {}", controller.redraw.take());

    Ok(())
}
