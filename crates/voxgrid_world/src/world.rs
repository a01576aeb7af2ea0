//! Voxel world aggregate.
//!
//! Owns the chunk store and the mesh cache. Every operation runs to
//! completion on the calling thread; callers read meshes and go through the
//! methods here, never through the chunk buffers.

use voxgrid_shared::Vec3;

use crate::config::WorldConfig;
use crate::error::WorldResult;
use crate::meshing::{ChunkMesh, ChunkMesher, MeshCache};
use crate::picking::{intersect_ray, target_cell, EditOutcome, RayHit};
use crate::voxel::{ChunkCoord, Voxel, VoxelSource, VoxelStore};

/// The cell itself and its six axis neighbors.
const PROBE_OFFSETS: [[i32; 3]; 7] = [
    [0, 0, 0],
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// Chunked voxel world with per-chunk mesh cache.
pub struct VoxelWorld {
    config: WorldConfig,
    store: VoxelStore,
    mesher: ChunkMesher,
    meshes: MeshCache,
}

impl VoxelWorld {
    /// Creates an empty world.
    ///
    /// # Errors
    /// Returns an error if `config` fails validation.
    pub fn new(config: WorldConfig) -> WorldResult<Self> {
        config.validate()?;
        Ok(Self {
            store: VoxelStore::new(config.chunk_size),
            mesher: ChunkMesher::new(config.chunk_size, &config.atlas),
            meshes: MeshCache::new(),
            config,
        })
    }

    /// The configuration this world was built with.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Chunk edge length in voxels.
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        self.store.chunk_size()
    }

    /// Read-only access to chunk storage.
    #[must_use]
    pub const fn store(&self) -> &VoxelStore {
        &self.store
    }

    // =========================================================================
    // STORAGE
    // =========================================================================

    /// Voxel at world coordinates; air where no chunk exists.
    #[must_use]
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.store.get_voxel(x, y, z)
    }

    /// Writes a voxel, allocating its chunk if needed.
    ///
    /// Meshes are untouched; call [`VoxelWorld::update_voxel_geometry`] or
    /// [`VoxelWorld::update_chunk_geometry`] to refresh them.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) {
        self.store.set_voxel(x, y, z, voxel);
    }

    /// Coordinate of the chunk holding a world position.
    #[must_use]
    pub const fn chunk_coord_of(&self, x: i32, y: i32, z: i32) -> ChunkCoord {
        self.store.chunk_coord_of(x, y, z)
    }

    /// Returns true if the chunk has been allocated.
    #[must_use]
    pub fn has_chunk(&self, coord: ChunkCoord) -> bool {
        self.store.contains(coord)
    }

    /// Number of allocated chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.store.chunk_count()
    }

    // =========================================================================
    // MESHING
    // =========================================================================

    /// Builds fresh geometry for a chunk without touching the cache.
    #[must_use]
    pub fn generate_geometry_data_for_chunk(&self, coord: ChunkCoord) -> ChunkMesh {
        match self.store.chunk(coord) {
            Some(chunk) if !chunk.is_empty() => self.mesher.generate(&self.store, coord),
            _ => ChunkMesh::new(coord, self.chunk_origin(coord)),
        }
    }

    /// Regenerates a chunk's mesh and replaces its cache entry.
    ///
    /// Chunks that were never written have nothing to draw and get no entry;
    /// returns whether a mesh was stored.
    pub fn update_chunk_geometry(&mut self, coord: ChunkCoord) -> bool {
        if !self.store.contains(coord) {
            tracing::trace!(
                "Skipping remesh of unallocated chunk ({}, {}, {})",
                coord.x,
                coord.y,
                coord.z
            );
            return false;
        }

        let mesh = self.generate_geometry_data_for_chunk(coord);
        tracing::debug!(
            "Remeshed chunk ({}, {}, {}): {} quads",
            coord.x,
            coord.y,
            coord.z,
            mesh.quad_count()
        );
        self.meshes.replace(mesh);
        true
    }

    /// Remeshes every chunk whose faces an edit at `(x, y, z)` can change.
    ///
    /// Probes the cell and its six neighbors, deduplicates by chunk
    /// coordinate and regenerates each distinct chunk once. Returns the
    /// chunks that were actually rebuilt.
    pub fn update_voxel_geometry(&mut self, x: i32, y: i32, z: i32) -> Vec<ChunkCoord> {
        let mut touched: Vec<ChunkCoord> = Vec::with_capacity(PROBE_OFFSETS.len());
        for [dx, dy, dz] in PROBE_OFFSETS {
            // Wraps at the edge of the i32 lattice instead of panicking.
            let coord =
                self.chunk_coord_of(x.wrapping_add(dx), y.wrapping_add(dy), z.wrapping_add(dz));
            if !touched.contains(&coord) {
                touched.push(coord);
            }
        }

        touched.retain(|&coord| self.update_chunk_geometry(coord));
        touched
    }

    /// Remeshes every allocated chunk once. Used after bulk seeding.
    pub fn rebuild_all_meshes(&mut self) -> usize {
        let coords = self.store.chunk_coords();
        for &coord in &coords {
            self.update_chunk_geometry(coord);
        }
        coords.len()
    }

    /// Current meshes, ordered by chunk coordinate. No regeneration.
    #[must_use]
    pub fn meshes(&self) -> Vec<&ChunkMesh> {
        self.meshes.sorted()
    }

    /// Cached mesh of one chunk.
    #[must_use]
    pub fn mesh(&self, coord: ChunkCoord) -> Option<&ChunkMesh> {
        self.meshes.get(coord)
    }

    /// Number of cached meshes.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // =========================================================================
    // PICKING & EDITING
    // =========================================================================

    /// First solid voxel along the segment `start..end`.
    #[must_use]
    pub fn intersect_ray(&self, start: Vec3, end: Vec3) -> Option<RayHit> {
        intersect_ray(&self.store, start, end)
    }

    /// Applies an edit at a ray hit and remeshes the affected chunks.
    ///
    /// Air removes the hit voxel; anything else is placed against the hit face.
    pub fn place_voxel(&mut self, hit: &RayHit, voxel: Voxel) -> EditOutcome {
        let target = target_cell(hit, voxel);
        let [x, y, z] = target;

        self.set_voxel(x, y, z, voxel);
        let remeshed = self.update_voxel_geometry(x, y, z);

        tracing::info!(
            "Edit at ({}, {}, {}) -> voxel {} ({} chunks remeshed)",
            x,
            y,
            z,
            voxel.material_id(),
            remeshed.len()
        );

        EditOutcome {
            target,
            voxel,
            remeshed,
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn chunk_origin(&self, coord: ChunkCoord) -> [i32; 3] {
        coord.origin(self.store.chunk_size() as i32)
    }
}

impl VoxelSource for VoxelWorld {
    #[inline]
    fn voxel_at(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.store.get_voxel(x, y, z)
    }
}
