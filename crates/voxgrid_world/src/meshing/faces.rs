//! Static face templates for the face-culling mesher.
//!
//! One entry per axis direction. Corner order together with the fixed index
//! pattern `n, n+1, n+2, n+2, n+1, n+3` gives outward-facing triangles.

/// One corner of a unit-cube face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    /// Offset from the voxel's minimum corner.
    pub pos: [u8; 3],
    /// Corner within the atlas tile, `(0, 0)` bottom-left.
    pub uv: [u8; 2],
}

/// Template for one of the six cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTemplate {
    /// Outward direction; also the neighbor probed for culling.
    pub dir: [i32; 3],
    /// The four corners in emission order.
    pub corners: [FaceCorner; 4],
    /// Atlas row: 0 = sides, 1 = bottom, 2 = top.
    pub uv_row: u32,
}

const fn corner(pos: [u8; 3], uv: [u8; 2]) -> FaceCorner {
    FaceCorner { pos, uv }
}

/// The six faces in −x, +x, −y, +y, −z, +z order.
pub const FACES: [FaceTemplate; 6] = [
    // left
    FaceTemplate {
        dir: [-1, 0, 0],
        corners: [
            corner([0, 1, 0], [0, 1]),
            corner([0, 0, 0], [0, 0]),
            corner([0, 1, 1], [1, 1]),
            corner([0, 0, 1], [1, 0]),
        ],
        uv_row: 0,
    },
    // right
    FaceTemplate {
        dir: [1, 0, 0],
        corners: [
            corner([1, 1, 1], [0, 1]),
            corner([1, 0, 1], [0, 0]),
            corner([1, 1, 0], [1, 1]),
            corner([1, 0, 0], [1, 0]),
        ],
        uv_row: 0,
    },
    // bottom
    FaceTemplate {
        dir: [0, -1, 0],
        corners: [
            corner([1, 0, 1], [1, 0]),
            corner([0, 0, 1], [0, 0]),
            corner([1, 0, 0], [1, 1]),
            corner([0, 0, 0], [0, 1]),
        ],
        uv_row: 1,
    },
    // top
    FaceTemplate {
        dir: [0, 1, 0],
        corners: [
            corner([0, 1, 1], [1, 1]),
            corner([1, 1, 1], [0, 1]),
            corner([0, 1, 0], [1, 0]),
            corner([1, 1, 0], [0, 0]),
        ],
        uv_row: 2,
    },
    // back
    FaceTemplate {
        dir: [0, 0, -1],
        corners: [
            corner([1, 0, 0], [0, 0]),
            corner([0, 0, 0], [1, 0]),
            corner([1, 1, 0], [0, 1]),
            corner([0, 1, 0], [1, 1]),
        ],
        uv_row: 0,
    },
    // front
    FaceTemplate {
        dir: [0, 0, 1],
        corners: [
            corner([0, 0, 1], [0, 0]),
            corner([1, 0, 1], [1, 0]),
            corner([0, 1, 1], [0, 1]),
            corner([1, 1, 1], [1, 1]),
        ],
        uv_row: 0,
    },
];

/// Index pattern for one quad, relative to its first vertex.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [u8; 3], b: [u8; 3]) -> [i32; 3] {
        [
            i32::from(a[0]) - i32::from(b[0]),
            i32::from(a[1]) - i32::from(b[1]),
            i32::from(a[2]) - i32::from(b[2]),
        ]
    }

    fn cross(a: [i32; 3], b: [i32; 3]) -> [i32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[test]
    fn test_corners_lie_on_face_plane() {
        for face in &FACES {
            let axis = face.dir.iter().position(|&d| d != 0).expect("axis-aligned");
            let plane = u8::from(face.dir[axis] > 0);
            for c in &face.corners {
                assert_eq!(c.pos[axis], plane, "face {:?}", face.dir);
            }
        }
    }

    #[test]
    fn test_both_triangles_wind_outward() {
        for face in &FACES {
            for tri in QUAD_INDICES.chunks(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| face.corners[i as usize].pos);
                assert_eq!(cross(sub(b, a), sub(c, a)), face.dir, "face {:?}", face.dir);
            }
        }
    }
}
