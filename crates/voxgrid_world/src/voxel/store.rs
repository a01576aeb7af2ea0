//! Sparse chunk storage.
//!
//! World coordinates are resolved to a chunk coordinate (floor division) and
//! a local position (Euclidean modulo). Chunks are allocated on first write
//! and never on read.

use std::collections::HashMap;

use super::chunk::{ChunkCoord, ChunkShape, Voxel, VoxelChunk};

/// Read access to voxels by world position.
///
/// The mesher and the ray caster only need this, so they can run against any
/// voxel source, not just a [`VoxelStore`].
pub trait VoxelSource {
    /// Voxel at a world position. Unallocated space is air.
    fn voxel_at(&self, x: i32, y: i32, z: i32) -> Voxel;
}

/// Chunk map keyed by chunk coordinate.
pub struct VoxelStore {
    /// Chunks indexed by coordinate.
    chunks: HashMap<ChunkCoord, VoxelChunk>,

    /// Addressing shared by every chunk.
    shape: ChunkShape,
}

impl VoxelStore {
    /// Creates an empty store for chunks of `chunk_size³` voxels.
    #[must_use]
    pub fn new(chunk_size: u32) -> Self {
        Self {
            chunks: HashMap::new(),
            shape: ChunkShape::new(chunk_size),
        }
    }

    /// Chunk edge length in voxels.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        self.shape.size()
    }

    /// Coordinate of the chunk holding a world position.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn chunk_coord_of(&self, x: i32, y: i32, z: i32) -> ChunkCoord {
        ChunkCoord::from_world_pos(x, y, z, self.shape.size() as i32)
    }

    /// Gets a chunk by coordinate, returning None if never written.
    #[inline]
    #[must_use]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&VoxelChunk> {
        self.chunks.get(&coord)
    }

    /// Returns true if the chunk has been allocated.
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Returns the number of allocated chunks.
    #[inline]
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Coordinates of all allocated chunks, sorted.
    #[must_use]
    pub fn chunk_coords(&self) -> Vec<ChunkCoord> {
        let mut coords: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// Gets a voxel at world coordinates. Never allocates.
    #[must_use]
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.chunks
            .get(&self.chunk_coord_of(x, y, z))
            .map_or(Voxel::AIR, |chunk| chunk.get(self.shape.local_of(x, y, z)))
    }

    /// Sets a voxel at world coordinates, allocating the chunk if needed.
    ///
    /// Writing air still materializes the chunk.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) {
        let local = self.shape.local_of(x, y, z);
        let coord = self.chunk_coord_of(x, y, z);
        self.chunk_or_insert(coord).set(local, voxel);
    }

    /// Returns the chunk at `coord`, creating an empty one if absent.
    pub fn chunk_or_insert(&mut self, coord: ChunkCoord) -> &mut VoxelChunk {
        let shape = &self.shape;
        self.chunks.entry(coord).or_insert_with(|| {
            tracing::debug!(
                "Allocating chunk ({}, {}, {}) with {} voxels",
                coord.x,
                coord.y,
                coord.z,
                shape.volume()
            );
            VoxelChunk::new(coord, shape.clone())
        })
    }
}

impl VoxelSource for VoxelStore {
    #[inline]
    fn voxel_at(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.get_voxel(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut store = VoxelStore::new(32);
        store.set_voxel(5, 10, 15, Voxel::new(42));
        assert_eq!(store.get_voxel(5, 10, 15), Voxel::new(42));
        assert_eq!(store.get_voxel(5, 10, 16), Voxel::AIR);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut store = VoxelStore::new(32);
        store.set_voxel(-5, -1, -32, Voxel::new(1));

        assert_eq!(store.get_voxel(-5, -1, -32), Voxel::new(1));
        assert!(store.contains(ChunkCoord::new(-1, -1, -1)));
        assert_eq!(
            store.chunk(ChunkCoord::new(-1, -1, -1)).map(VoxelChunk::coord),
            Some(ChunkCoord::new(-1, -1, -1))
        );
        // Same local offset in the positive chunk stays untouched.
        assert_eq!(store.get_voxel(27, 31, 0), Voxel::AIR);
    }

    #[test]
    fn test_reads_never_allocate() {
        let store = VoxelStore::new(16);
        assert_eq!(store.get_voxel(100, -100, 7), Voxel::AIR);
        assert_eq!(store.chunk_count(), 0);
    }

    #[test]
    fn test_writing_air_materializes_chunk() {
        let mut store = VoxelStore::new(16);
        store.set_voxel(1, 2, 3, Voxel::AIR);
        assert_eq!(store.chunk_count(), 1);
        assert!(store.chunk(ChunkCoord::new(0, 0, 0)).is_some_and(VoxelChunk::is_empty));
    }

    #[test]
    fn test_chunk_coords_sorted() {
        let mut store = VoxelStore::new(8);
        store.set_voxel(9, 0, 0, Voxel::new(1));
        store.set_voxel(-1, 0, 0, Voxel::new(1));
        store.set_voxel(0, 0, 0, Voxel::new(1));
        assert_eq!(
            store.chunk_coords(),
            vec![
                ChunkCoord::new(-1, 0, 0),
                ChunkCoord::new(0, 0, 0),
                ChunkCoord::new(1, 0, 0),
            ]
        );
    }
}
