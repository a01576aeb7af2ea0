//! Voxel chunk data structures.
//!
//! Chunks are cubes of `chunk_size³` voxels stored as one contiguous buffer.
//! The buffer is linearized Y-major: `index = y * S² + z * S + x`. Every
//! component that touches chunk buffers goes through [`ChunkShape`] so the
//! layout stays consistent.

use bytemuck::{Pod, Zeroable};
use ndshape::{RuntimeShape, Shape};

/// A single voxel - one byte of material id.
///
/// `0` is air. `1..=255` index a tile column in the texture atlas.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// Material id (0 = air).
    pub id: u8,
}

impl Voxel {
    /// Air voxel - completely empty.
    pub const AIR: Self = Self { id: 0 };

    /// Creates a new voxel with the given material.
    #[inline]
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self { id }
    }

    /// Returns the material id.
    #[inline]
    #[must_use]
    pub const fn material_id(self) -> u8 {
        self.id
    }

    /// Returns true if this voxel is air (empty).
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.id == 0
    }

    /// Returns true if this voxel is solid (not air).
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.id != 0
    }
}

/// Chunk coordinate in chunk space.
///
/// Ordered so mesh listings come out in a stable order.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct ChunkCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Converts a world voxel position to the coordinate of its chunk.
    ///
    /// Floors toward negative infinity, so `-1` lands in chunk `-1`.
    #[inline]
    #[must_use]
    pub const fn from_world_pos(x: i32, y: i32, z: i32, chunk_size: i32) -> Self {
        Self::new(
            x.div_euclid(chunk_size),
            y.div_euclid(chunk_size),
            z.div_euclid(chunk_size),
        )
    }

    /// World position of the chunk's minimum corner.
    #[inline]
    #[must_use]
    pub const fn origin(self, chunk_size: i32) -> [i32; 3] {
        [
            self.x * chunk_size,
            self.y * chunk_size,
            self.z * chunk_size,
        ]
    }
}

/// Local addressing for a cubic chunk buffer.
///
/// Wraps an `ndshape` runtime shape whose axes are fed as `[x, z, y]`, which
/// makes `x` the fastest-varying axis and `y` the slowest.
#[derive(Clone)]
pub struct ChunkShape {
    size: u32,
    shape: RuntimeShape<u32, 3>,
}

impl ChunkShape {
    /// Creates the shape for chunks of `size³` voxels.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            shape: RuntimeShape::<u32, 3>::new([size, size, size]),
        }
    }

    /// Edge length in voxels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of voxels in one chunk.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> usize {
        self.shape.usize()
    }

    /// Buffer index of a local position: `y * S² + z * S + x`.
    #[inline]
    #[must_use]
    pub fn index(&self, [x, y, z]: [u32; 3]) -> usize {
        debug_assert!(x < self.size && y < self.size && z < self.size);
        self.shape.linearize([x, z, y]) as usize
    }

    /// Local position of a buffer index. Inverse of [`ChunkShape::index`].
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn position(&self, index: usize) -> [u32; 3] {
        let [x, z, y] = self.shape.delinearize(index as u32);
        [x, y, z]
    }

    /// Local position of a world coordinate, by Euclidean modulo per axis.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn local_of(&self, x: i32, y: i32, z: i32) -> [u32; 3] {
        let s = self.size as i32;
        [
            x.rem_euclid(s) as u32,
            y.rem_euclid(s) as u32,
            z.rem_euclid(s) as u32,
        ]
    }
}

impl std::fmt::Debug for ChunkShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkShape").field("size", &self.size).finish()
    }
}

/// A chunk of voxels.
///
/// Created zero-filled on the first write that falls inside it.
pub struct VoxelChunk {
    /// The coordinate of this chunk in chunk space.
    coord: ChunkCoord,

    /// Local addressing.
    shape: ChunkShape,

    /// Voxel data. Layout: `voxels[y * S * S + z * S + x]`.
    voxels: Box<[Voxel]>,

    /// Number of solid voxels (for quick empty checks).
    solid_count: u32,
}

impl VoxelChunk {
    /// Creates a new empty chunk at the given coordinate.
    #[must_use]
    pub fn new(coord: ChunkCoord, shape: ChunkShape) -> Self {
        let voxels = vec![Voxel::AIR; shape.volume()].into_boxed_slice();
        Self {
            coord,
            shape,
            voxels,
            solid_count: 0,
        }
    }

    /// Returns the chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns true if the chunk holds no solid voxel.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    /// Returns the number of solid voxels.
    #[inline]
    #[must_use]
    pub const fn solid_count(&self) -> u32 {
        self.solid_count
    }

    /// Gets a voxel at the given local position.
    ///
    /// # Panics
    /// Panics if the position is outside the chunk.
    #[inline]
    #[must_use]
    pub fn get(&self, local: [u32; 3]) -> Voxel {
        self.voxels[self.shape.index(local)]
    }

    /// Sets a voxel at the given local position.
    ///
    /// # Panics
    /// Panics if the position is outside the chunk.
    #[inline]
    pub fn set(&mut self, local: [u32; 3], voxel: Voxel) {
        let idx = self.shape.index(local);
        let old = self.voxels[idx];

        if old.is_solid() && voxel.is_air() {
            self.solid_count -= 1;
        } else if old.is_air() && voxel.is_solid() {
            self.solid_count += 1;
        }

        self.voxels[idx] = voxel;
    }

    /// Raw voxel buffer in storage order.
    #[inline]
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Returns the voxel data as a byte slice for GPU upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.voxels)
    }
}
