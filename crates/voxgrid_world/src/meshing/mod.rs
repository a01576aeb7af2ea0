//! Mesh generation and caching.
//!
//! The mesher turns one chunk into four parallel buffers (positions, normals,
//! uvs, indices); the cache holds the latest result per chunk.

mod cache;
mod faces;
mod mesh;
mod mesher;

pub use cache::MeshCache;
pub use faces::{FaceCorner, FaceTemplate, FACES, QUAD_INDICES};
pub use mesh::{
    ChunkMesh, INDICES_PER_QUAD, NORMAL_COMPONENTS, POSITION_COMPONENTS, UV_COMPONENTS,
    VERTICES_PER_QUAD,
};
pub use mesher::ChunkMesher;
