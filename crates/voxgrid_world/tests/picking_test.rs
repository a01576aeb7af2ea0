//! # Picking And Editing Tests
//!
//! Ray casts against seeded terrain and hand-placed voxels, and the place
//! versus remove targeting rule.

use voxgrid_shared::Vec3;
use voxgrid_world::{target_cell, HillsGenerator, TerrainConfig, Voxel, VoxelWorld, WorldConfig};

fn hills_world() -> VoxelWorld {
    let config = WorldConfig {
        chunk_size: 16,
        terrain: TerrainConfig {
            seed: 11,
            extent_chunks: 2,
            max_material: 8,
        },
        ..WorldConfig::default()
    };
    let mut world = VoxelWorld::new(config).expect("valid config");
    HillsGenerator::new(config.terrain).seed(&mut world);
    world.rebuild_all_meshes();
    world
}

/// Test: a ray straight down a column lands on the top face of the surface.
#[test]
fn test_downward_ray_hits_surface_top() {
    let world = hills_world();

    for (x, z) in [(0, 0), (5, 9), (20, 3), (31, 31)] {
        let start = Vec3::new(x as f32 + 0.5, 40.0, z as f32 + 0.5);
        let end = Vec3::new(x as f32 + 0.5, -10.0, z as f32 + 0.5);
        let hit = world.intersect_ray(start, end).expect("terrain below");

        let [hx, hy, hz] = (hit.position - hit.normal * 0.5).floor_to_cell();
        assert_eq!((hx, hz), (x, z));
        assert!(world.get_voxel(hx, hy, hz).is_solid());
        assert!(world.get_voxel(hx, hy + 1, hz).is_air());
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(hit.voxel, world.get_voxel(hx, hy, hz));
    }
}

/// Test: a ray above the terrain never hits anything.
#[test]
fn test_ray_over_terrain_misses() {
    let world = hills_world();
    let start = Vec3::new(-5.0, 30.0, -5.0);
    let end = Vec3::new(40.0, 30.0, 40.0);
    assert!(world.intersect_ray(start, end).is_none());
}

/// Test: a segment that stops short of a voxel does not report it.
#[test]
fn test_segment_length_bounds_the_search() {
    let mut world = VoxelWorld::new(WorldConfig::with_chunk_size(8)).expect("valid config");
    world.set_voxel(10, 0, 0, Voxel::new(4));

    let start = Vec3::new(0.5, 0.5, 0.5);
    assert!(world.intersect_ray(start, Vec3::new(9.5, 0.5, 0.5)).is_none());

    let hit = world
        .intersect_ray(start, Vec3::new(10.5, 0.5, 0.5))
        .expect("hit");
    assert_eq!(hit.normal, -Vec3::X);
    assert!((hit.position.x - 10.0).abs() < 1e-4);
}

/// Test: place and remove from the same hit differ by exactly the normal.
#[test]
fn test_place_and_remove_targets_differ_by_normal() {
    let world = hills_world();
    let rays = [
        (Vec3::new(3.5, 40.0, 3.5), Vec3::new(3.5, -10.0, 3.5)),
        (Vec3::new(-10.0, 4.5, 7.5), Vec3::new(40.0, 4.5, 7.5)),
        (Vec3::new(12.5, 3.5, 50.0), Vec3::new(12.5, 3.5, -20.0)),
    ];

    for (start, end) in rays {
        let hit = world.intersect_ray(start, end).expect("hit");
        let placed = target_cell(&hit, Voxel::new(1));
        let removed = target_cell(&hit, Voxel::AIR);
        let [nx, ny, nz] = hit.normal_cell();

        assert_eq!(
            placed,
            [removed[0] + nx, removed[1] + ny, removed[2] + nz],
            "ray {start:?} -> {end:?}"
        );
        assert!(world.get_voxel(removed[0], removed[1], removed[2]).is_solid());
        assert!(world.get_voxel(placed[0], placed[1], placed[2]).is_air());
    }
}

/// Test: removing through picking clears the voxel and updates the mesh.
#[test]
fn test_remove_updates_mesh() {
    let mut world = VoxelWorld::new(WorldConfig::with_chunk_size(8)).expect("valid config");
    world.set_voxel(2, 2, 2, Voxel::new(1));
    world.set_voxel(2, 3, 2, Voxel::new(1));
    world.rebuild_all_meshes();
    let coord = world.chunk_coord_of(2, 2, 2);
    assert_eq!(world.mesh(coord).expect("mesh").quad_count(), 10);

    let hit = world
        .intersect_ray(Vec3::new(2.5, 7.5, 2.5), Vec3::new(2.5, 0.0, 2.5))
        .expect("hit");
    let outcome = world.place_voxel(&hit, Voxel::AIR);

    assert_eq!(outcome.target, [2, 3, 2]);
    assert_eq!(outcome.remeshed, vec![coord]);
    assert_eq!(world.mesh(coord).expect("mesh").quad_count(), 6);
}
