//! Mesh output - four parallel buffers per chunk.

use crate::voxel::ChunkCoord;

/// Floats per vertex position.
pub const POSITION_COMPONENTS: usize = 3;
/// Floats per vertex normal.
pub const NORMAL_COMPONENTS: usize = 3;
/// Floats per texture coordinate.
pub const UV_COMPONENTS: usize = 2;
/// Vertices emitted per face.
pub const VERTICES_PER_QUAD: usize = 4;
/// Indices emitted per face.
pub const INDICES_PER_QUAD: usize = 6;

/// Complete mesh data for one chunk.
///
/// Positions are chunk-local; translate by [`ChunkMesh::origin`] to place the
/// mesh in the world. Replaced wholesale on every regeneration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Chunk this mesh was generated from. Stable identity across frames.
    pub coord: ChunkCoord,
    /// World position of the chunk's minimum corner.
    pub origin: [i32; 3],
    /// Vertex positions, 3 floats each.
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats each, constant per face.
    pub normals: Vec<f32>,
    /// Atlas texture coordinates, 2 floats each.
    pub uvs: Vec<f32>,
    /// Triangle indices, 6 per face.
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Creates an empty mesh for a chunk.
    #[must_use]
    pub fn new(coord: ChunkCoord, origin: [i32; 3]) -> Self {
        Self {
            coord,
            origin,
            ..Self::default()
        }
    }

    /// Check if mesh is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_COMPONENTS
    }

    /// Get emitted face count
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.indices.len() / INDICES_PER_QUAD
    }

    /// Position buffer as bytes for GPU upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as bytes for GPU upload.
    #[must_use]
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV buffer as bytes for GPU upload.
    #[must_use]
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
