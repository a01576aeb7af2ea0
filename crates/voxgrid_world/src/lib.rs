//! # VOXGRID World
//!
//! Chunked voxel engine: sparse chunk storage, face-culled mesh generation,
//! incremental remeshing on edit and grid ray traversal for picking.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        VoxelWorld                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  VoxelStore ──→ ChunkMesher ──→ MeshCache ──→ meshes()       │
//! │      ↑   └────→ intersect_ray ──→ RayHit                     │
//! │      └──────── place_voxel ←──────────┘ (remesh ≤ 4 chunks)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use voxgrid_shared::Vec3;
//! use voxgrid_world::{Voxel, VoxelWorld, WorldConfig};
//!
//! let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
//! world.set_voxel(0, 0, 0, Voxel::new(1));
//! world.rebuild_all_meshes();
//!
//! let hit = world
//!     .intersect_ray(Vec3::new(0.5, 0.5, -5.0), Vec3::new(0.5, 0.5, 5.0))
//!     .unwrap();
//! world.place_voxel(&hit, Voxel::new(2));
//! assert_eq!(world.get_voxel(0, 0, -1), Voxel::new(2));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod meshing;
pub mod picking;
pub mod terrain;
pub mod voxel;
pub mod world;

pub use config::{AtlasConfig, TerrainConfig, WorldConfig};
pub use error::{ConfigError, ConfigResult, WorldError, WorldResult};
pub use meshing::{ChunkMesh, ChunkMesher, MeshCache};
pub use picking::{intersect_ray, target_cell, EditOutcome, RayHit};
pub use terrain::HillsGenerator;
pub use voxel::{ChunkCoord, ChunkShape, Voxel, VoxelChunk, VoxelSource, VoxelStore};
pub use world::VoxelWorld;
