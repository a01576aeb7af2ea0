//! Grid ray traversal for voxel picking.
//!
//! Walks the integer lattice cell by cell along a ray segment (Amanatides &
//! Woo style DDA) and stops at the first solid voxel. Only cells the segment
//! actually passes through are sampled, so cost is O(cells traveled).

use voxgrid_shared::Vec3;

use crate::voxel::{Voxel, VoxelSource};

/// First solid voxel along a ray segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Point where the ray entered the hit voxel, in world space.
    pub position: Vec3,
    /// Unit normal of the face that was entered.
    ///
    /// Zero when the segment starts inside a solid voxel, since no boundary
    /// was crossed.
    pub normal: Vec3,
    /// The voxel that was hit.
    pub voxel: Voxel,
}

impl RayHit {
    /// Integer address of the hit voxel's face normal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normal_cell(&self) -> [i32; 3] {
        self.normal.to_array().map(|n| n as i32)
    }
}

/// Casts the segment `start..end` through `source`.
///
/// Returns `None` if every cell within the segment length is air, if the
/// segment length is not finite, or if the walk leaves the `i32` lattice.
/// When two axes reach their next boundary at the same distance, x steps
/// before y and y before z.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn intersect_ray<S>(source: &S, start: Vec3, end: Vec3) -> Option<RayHit>
where
    S: VoxelSource + ?Sized,
{
    let delta = end - start;
    let len = delta.length();
    if !len.is_finite() {
        // Unbounded segment: the walk would never terminate.
        return None;
    }
    let dir = delta.normalize_or_zero();

    let mut cell = start.floor_to_cell();
    let mut step = [0i32; 3];
    // Travel needed to cross one full cell on each axis.
    let mut t_delta = [f32::INFINITY; 3];
    // Travel at which each axis crosses its next boundary.
    let mut t_max = [f32::INFINITY; 3];

    for axis in 0..3 {
        let d = dir.axis(axis);
        let s = start.axis(axis);
        step[axis] = if d > 0.0 { 1 } else { -1 };
        t_delta[axis] = (1.0 / d).abs();
        if t_delta[axis] < f32::INFINITY {
            let dist = if step[axis] > 0 {
                cell[axis] as f32 + 1.0 - s
            } else {
                s - cell[axis] as f32
            };
            t_max[axis] = t_delta[axis] * dist;
        }
    }

    let mut t = 0.0f32;
    let mut stepped: Option<usize> = None;

    while t <= len {
        let voxel = source.voxel_at(cell[0], cell[1], cell[2]);
        if voxel.is_solid() {
            let mut normal = [0.0f32; 3];
            if let Some(axis) = stepped {
                normal[axis] = -(step[axis] as f32);
            }
            return Some(RayHit {
                position: start + dir * t,
                normal: Vec3::from(normal),
                voxel,
            });
        }

        let axis = nearest_boundary(&t_max);
        cell[axis] = cell[axis].checked_add(step[axis])?;
        t = t_max[axis];
        t_max[axis] += t_delta[axis];
        stepped = Some(axis);
    }

    None
}

/// Axis with the smallest boundary distance. Ties keep the earlier axis.
fn nearest_boundary(t_max: &[f32; 3]) -> usize {
    let mut axis = 0;
    if t_max[1] < t_max[axis] {
        axis = 1;
    }
    if t_max[2] < t_max[axis] {
        axis = 2;
    }
    axis
}
