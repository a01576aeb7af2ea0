//! Edit dispatch and frame scheduling.

use voxgrid_shared::Vec3;
use voxgrid_world::{EditOutcome, Voxel, VoxelWorld};

use crate::selection::VoxelSelection;

/// Latch for on-demand rendering.
///
/// Any number of requests between two frames schedule one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawFlag {
    requested: bool,
}

impl RedrawFlag {
    /// Requests a frame. Returns true if this call scheduled it, false if
    /// one was already pending.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.requested, true)
    }

    /// Returns true if a frame is pending.
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consumes the pending request; call once per rendered frame.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.requested, false)
    }
}

/// Turns clicks into world edits.
#[derive(Debug, Clone, Default)]
pub struct EditController {
    /// Palette selection used for placement.
    pub selection: VoxelSelection,
    /// Frame request raised by successful edits.
    pub redraw: RedrawFlag,
}

impl EditController {
    /// Creates a controller with `selection` active.
    #[must_use]
    pub fn new(selection: VoxelSelection) -> Self {
        Self {
            selection,
            redraw: RedrawFlag::default(),
        }
    }

    /// Voxel a click writes: air with `shift` held, the selection otherwise.
    #[must_use]
    pub const fn voxel_for_click(&self, shift: bool) -> Voxel {
        if shift {
            Voxel::AIR
        } else {
            self.selection.current()
        }
    }

    /// Casts `start..end` into `world` and applies the edit at the hit.
    ///
    /// `start` is the camera position and `end` the far-plane point under
    /// the pointer. Returns `None` when the ray hits nothing.
    pub fn handle_click(
        &mut self,
        world: &mut VoxelWorld,
        start: Vec3,
        end: Vec3,
        shift: bool,
    ) -> Option<EditOutcome> {
        let Some(hit) = world.intersect_ray(start, end) else {
            tracing::debug!("Click ray missed all voxels");
            return None;
        };

        let outcome = world.place_voxel(&hit, self.voxel_for_click(shift));
        self.redraw.request();
        Some(outcome)
    }
}
