//! Edit protocol: ray hit plus voxel id to target cell.

use crate::voxel::{ChunkCoord, Voxel};

use super::raycast::RayHit;

/// Cell an edit with `voxel` should write to, given a ray hit.
///
/// Placing material steps half a cell out of the hit face, into the empty
/// neighbor. Removing material (air) steps half a cell in, onto the hit
/// voxel. With a zero normal both resolve to the cell holding the hit point.
#[must_use]
pub fn target_cell(hit: &RayHit, voxel: Voxel) -> [i32; 3] {
    let offset = if voxel.is_solid() { 0.5 } else { -0.5 };
    (hit.position + hit.normal * offset).floor_to_cell()
}

/// What an edit changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// World cell that was written.
    pub target: [i32; 3],
    /// Voxel written there.
    pub voxel: Voxel,
    /// Chunks whose meshes were rebuilt, in probe order.
    pub remeshed: Vec<ChunkCoord>,
}
