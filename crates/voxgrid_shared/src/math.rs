//! Mathematical types shared between the engine and its host.
//!
//! World positions and ray endpoints are `f32`; voxel addresses are `i32`.

use bytemuck::{Pod, Zeroable};

/// 3D vector - ray endpoints, hit positions, face normals.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Components widened to `f64`.
    #[must_use]
    pub fn to_f64(self) -> [f64; 3] {
        self.to_array().map(f64::from)
    }

    /// Length, accumulated in `f64` so large finite vectors do not overflow
    /// on the way. Infinite only if a component is, or the result exceeds
    /// `f32::MAX`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn length(self) -> f32 {
        let [x, y, z] = self.to_f64();
        (x * x + y * y + z * z).sqrt() as f32
    }

    /// Unit vector in the same direction, or `ZERO` for a zero-length or
    /// non-finite vector.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normalize_or_zero(self) -> Self {
        let [x, y, z] = self.to_f64();
        let len = (x * x + y * y + z * z).sqrt();
        if len > 0.0 && len.is_finite() {
            Self::new((x / len) as f32, (y / len) as f32, (z / len) as f32)
        } else {
            Self::ZERO
        }
    }

    /// Floors every component to the integer lattice cell containing it.
    ///
    /// Values beyond the `i32` range saturate; NaN maps to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn floor_to_cell(self) -> [i32; 3] {
        [
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        ]
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    ///
    /// # Panics
    /// Panics if `axis > 2`.
    #[must_use]
    pub fn axis(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis index out of range: {axis}"),
        }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0); // 1*4 + 2*5 + 3*6
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(0.0, 0.0, 10.0).normalize_or_zero();
        assert_eq!(v, Vec3::Z);
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn test_length_survives_large_components() {
        let v = Vec3::new(1.0e20, 0.0, 0.0);
        assert_eq!(v.length(), 1.0e20);
        assert_eq!(v.normalize_or_zero(), Vec3::X);

        let inf = Vec3::new(f32::INFINITY, 0.0, 0.0);
        assert!(!inf.length().is_finite());
        assert_eq!(inf.normalize_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn test_floor_to_cell_negative() {
        assert_eq!(Vec3::new(-0.5, 0.5, -1.0).floor_to_cell(), [-1, 0, -1]);
        assert_eq!(Vec3::new(31.99, -32.01, 0.0).floor_to_cell(), [31, -33, 0]);
    }

    #[test]
    fn test_vec3_bytemuck() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 12); // 3 * 4 bytes
    }
}
