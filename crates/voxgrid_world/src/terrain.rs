//! Rolling-hills terrain seeder.
//!
//! Fills a square footprint of chunk columns with a sine height field:
//!
//! ```text
//! height(x, z) = (sin(x / S * 2π) + sin(z / S * 3π)) * S / 6 + S / 2
//! ```
//!
//! where `S` is the chunk size. Every cell below the height in the bottom
//! chunk layer gets a random material. Seeding only writes voxels; meshing
//! is left to the caller.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::TerrainConfig;
use crate::voxel::Voxel;
use crate::world::VoxelWorld;

/// Deterministic hills generator.
#[derive(Debug, Clone)]
pub struct HillsGenerator {
    config: TerrainConfig,
}

impl HillsGenerator {
    /// Creates a generator from terrain settings.
    #[must_use]
    pub const fn new(config: TerrainConfig) -> Self {
        Self { config }
    }

    /// Surface height of column `(x, z)` for chunks of `chunk_size`.
    #[must_use]
    pub fn height(x: i32, z: i32, chunk_size: u32) -> f64 {
        let s = f64::from(chunk_size);
        ((f64::from(x) / s * PI * 2.0).sin() + (f64::from(z) / s * PI * 3.0).sin()) * (s / 6.0)
            + s / 2.0
    }

    /// Seeds `world` and returns the number of solid voxels written.
    ///
    /// Same seed and footprint always produce the same voxels.
    #[allow(clippy::cast_possible_wrap)]
    pub fn seed(&self, world: &mut VoxelWorld) -> usize {
        let size = world.chunk_size();
        let extent = (self.config.extent_chunks * size) as i32;
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut written = 0;

        for y in 0..size as i32 {
            for z in 0..extent {
                for x in 0..extent {
                    if f64::from(y) < Self::height(x, z, size) {
                        let id = rng.gen_range(1..=self.config.max_material);
                        world.set_voxel(x, y, z, Voxel::new(id));
                        written += 1;
                    }
                }
            }
        }

        tracing::info!(
            "Seeded {} voxels over {}x{} chunks (seed {})",
            written,
            self.config.extent_chunks,
            self.config.extent_chunks,
            self.config.seed
        );
        written
    }
}
