//! Face-culling mesher.
//!
//! Emits one quad per solid voxel face whose axis neighbor is air. Neighbors
//! are read through world-space lookups, so faces on a chunk boundary are
//! culled against the adjacent chunk. No faces are merged.

use crate::config::AtlasConfig;
use crate::voxel::{ChunkCoord, ChunkShape, Voxel, VoxelSource};

use super::faces::{FaceTemplate, FACES, QUAD_INDICES};
use super::mesh::ChunkMesh;

/// Mesher for fixed-size chunks against a fixed atlas layout.
#[derive(Debug, Clone)]
pub struct ChunkMesher {
    shape: ChunkShape,
    /// Tile width as a fraction of the atlas width.
    tile_u: f32,
    /// Tile height as a fraction of the atlas height.
    tile_v: f32,
}

impl ChunkMesher {
    /// Creates a mesher for chunks of `chunk_size³` voxels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(chunk_size: u32, atlas: &AtlasConfig) -> Self {
        Self {
            shape: ChunkShape::new(chunk_size),
            tile_u: atlas.tile_size as f32 / atlas.texture_width as f32,
            tile_v: atlas.tile_size as f32 / atlas.texture_height as f32,
        }
    }

    /// Chunk edge length in voxels.
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        self.shape.size()
    }

    /// Generates the geometry for one chunk.
    ///
    /// Walks the chunk in storage order (Y, then Z, then X). Positions in
    /// the output are relative to the chunk origin.
    #[allow(clippy::cast_possible_wrap)]
    pub fn generate<S>(&self, source: &S, coord: ChunkCoord) -> ChunkMesh
    where
        S: VoxelSource + ?Sized,
    {
        let origin = coord.origin(self.shape.size() as i32);
        let mut mesh = ChunkMesh::new(coord, origin);

        for index in 0..self.shape.volume() {
            let local = self.shape.position(index).map(|c| c as i32);
            let world = [origin[0] + local[0], origin[1] + local[1], origin[2] + local[2]];
            let voxel = source.voxel_at(world[0], world[1], world[2]);
            if voxel.is_air() {
                continue;
            }

            for face in &FACES {
                let neighbor = source.voxel_at(
                    world[0].wrapping_add(face.dir[0]),
                    world[1].wrapping_add(face.dir[1]),
                    world[2].wrapping_add(face.dir[2]),
                );
                if neighbor.is_air() {
                    self.emit_face(&mut mesh, face, local, voxel);
                }
            }
        }

        mesh
    }

    /// Appends one quad for `face` of the voxel at `local`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn emit_face(&self, mesh: &mut ChunkMesh, face: &FaceTemplate, local: [i32; 3], voxel: Voxel) {
        let base = mesh.vertex_count() as u32;
        // Voxel 0 is air, so atlas columns start at id 1.
        let column = f32::from(voxel.material_id() - 1);
        let row = face.uv_row as f32;
        let normal = face.dir.map(|d| d as f32);

        for corner in &face.corners {
            mesh.positions.extend_from_slice(&[
                f32::from(corner.pos[0]) + local[0] as f32,
                f32::from(corner.pos[1]) + local[1] as f32,
                f32::from(corner.pos[2]) + local[2] as f32,
            ]);
            mesh.normals.extend_from_slice(&normal);
            mesh.uvs.extend_from_slice(&[
                (column + f32::from(corner.uv[0])) * self.tile_u,
                // Atlas origin is top-left.
                1.0 - (row + 1.0 - f32::from(corner.uv[1])) * self.tile_v,
            ]);
        }

        mesh.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::{NORMAL_COMPONENTS, UV_COMPONENTS, VERTICES_PER_QUAD};
    use crate::voxel::VoxelStore;

    fn mesher(chunk_size: u32) -> ChunkMesher {
        ChunkMesher::new(chunk_size, &AtlasConfig::default())
    }

    #[test]
    fn test_single_voxel_has_six_faces() {
        let mut store = VoxelStore::new(8);
        store.set_voxel(3, 3, 3, Voxel::new(1));

        let mesh = mesher(8).generate(&store, ChunkCoord::new(0, 0, 0));

        assert_eq!(mesh.quad_count(), 6);
        assert_eq!(mesh.vertex_count(), 6 * VERTICES_PER_QUAD);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.normals.len(), 24 * NORMAL_COMPONENTS);
        assert_eq!(mesh.uvs.len(), 24 * UV_COMPONENTS);
    }

    #[test]
    fn test_indices_follow_quad_pattern() {
        let mut store = VoxelStore::new(4);
        store.set_voxel(0, 0, 0, Voxel::new(2));

        let mesh = mesher(4).generate(&store, ChunkCoord::new(0, 0, 0));

        assert_eq!(&mesh.indices[..6], &[0, 1, 2, 2, 1, 3]);
        assert_eq!(&mesh.indices[6..12], &[4, 5, 6, 6, 5, 7]);
    }

    #[test]
    fn test_positions_are_chunk_local() {
        let mut store = VoxelStore::new(4);
        store.set_voxel(-4, 4, 8, Voxel::new(1));

        let mesh = mesher(4).generate(&store, ChunkCoord::new(-1, 1, 2));

        assert_eq!(mesh.origin, [-4, 4, 8]);
        assert!(mesh.positions.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_uv_layout() {
        let mut store = VoxelStore::new(4);
        store.set_voxel(0, 0, 0, Voxel::new(3));

        let mesh = mesher(4).generate(&store, ChunkCoord::new(0, 0, 0));

        // First face is -x (row 0). Its first corner has tile uv (0, 1):
        // u = (3 - 1 + 0) * 16 / 256, v = 1 - (0 + 1 - 1) * 16 / 64.
        assert_eq!(mesh.uvs[0], 2.0 * 16.0 / 256.0);
        assert_eq!(mesh.uvs[1], 1.0);
        // Second corner uv (0, 0): v = 1 - 16 / 64.
        assert_eq!(mesh.uvs[3], 0.75);

        // Top face is the fourth template, row 2, first corner uv (1, 1).
        let top = 3 * 4 * 2;
        assert_eq!(mesh.uvs[top], 3.0 * 16.0 / 256.0);
        assert_eq!(mesh.uvs[top + 1], 1.0 - 2.0 * 16.0 / 64.0);
    }

    #[test]
    fn test_fully_buried_voxel_emits_nothing() {
        let mut store = VoxelStore::new(8);
        for x in 2..5 {
            for y in 2..5 {
                for z in 2..5 {
                    store.set_voxel(x, y, z, Voxel::new(1));
                }
            }
        }

        let mesh = mesher(8).generate(&store, ChunkCoord::new(0, 0, 0));

        // 3x3x3 cube: 9 faces per side, center voxel hidden.
        assert_eq!(mesh.quad_count(), 54);
    }

    #[test]
    fn test_faces_culled_across_chunk_boundary() {
        let mut store = VoxelStore::new(4);
        store.set_voxel(3, 0, 0, Voxel::new(1));
        store.set_voxel(4, 0, 0, Voxel::new(1));

        let left = mesher(4).generate(&store, ChunkCoord::new(0, 0, 0));
        let right = mesher(4).generate(&store, ChunkCoord::new(1, 0, 0));

        assert_eq!(left.quad_count(), 5);
        assert_eq!(right.quad_count(), 5);
        assert!(!left.normals.chunks(3).any(|n| *n == [1.0, 0.0, 0.0]));
        assert!(!right.normals.chunks(3).any(|n| *n == [-1.0, 0.0, 0.0]));
    }
}
