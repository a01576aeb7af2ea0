//! Voxel data structures and sparse chunk storage.

mod chunk;
mod store;

pub use chunk::{ChunkCoord, ChunkShape, Voxel, VoxelChunk};
pub use store::{VoxelSource, VoxelStore};
