//! Currently selected voxel type.

use voxgrid_world::Voxel;

/// The palette selection used for placement.
///
/// Id 0 means nothing is selected, so clicks remove instead of place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoxelSelection {
    current: Voxel,
}

impl VoxelSelection {
    /// Starts with `voxel` selected.
    #[must_use]
    pub const fn new(voxel: Voxel) -> Self {
        Self { current: voxel }
    }

    /// The selected voxel; air when nothing is selected.
    #[must_use]
    pub const fn current(&self) -> Voxel {
        self.current
    }

    /// Returns true if a material is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.current.is_solid()
    }

    /// Selects `voxel`, or clears the selection if it is already selected.
    ///
    /// Returns the selection after the toggle.
    pub fn toggle(&mut self, voxel: Voxel) -> Voxel {
        self.current = if self.current == voxel {
            Voxel::AIR
        } else {
            voxel
        };
        self.current
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.current = Voxel::AIR;
    }
}
