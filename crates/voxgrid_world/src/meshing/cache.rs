//! Per-chunk mesh cache.
//!
//! Entries are replaced wholesale on regeneration; nothing is patched.

use std::collections::HashMap;

use crate::voxel::ChunkCoord;

use super::mesh::ChunkMesh;

/// Generated meshes indexed by chunk coordinate.
#[derive(Debug, Default)]
pub struct MeshCache {
    meshes: HashMap<ChunkCoord, ChunkMesh>,
}

impl MeshCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a mesh under its own coordinate, returning the one it replaced.
    pub fn replace(&mut self, mesh: ChunkMesh) -> Option<ChunkMesh> {
        self.meshes.insert(mesh.coord, mesh)
    }

    /// Mesh for a chunk, if one has been generated.
    #[must_use]
    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkMesh> {
        self.meshes.get(&coord)
    }

    /// Number of cached meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if no mesh has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// All cached meshes ordered by chunk coordinate.
    #[must_use]
    pub fn sorted(&self) -> Vec<&ChunkMesh> {
        let mut meshes: Vec<&ChunkMesh> = self.meshes.values().collect();
        meshes.sort_unstable_by_key(|mesh| mesh.coord);
        meshes
    }
}
