//! # VOXGRID
//!
//! Host-side glue for the voxel world engine.
//!
//! The engine in [`world`] knows nothing about pointers or frames. This crate
//! turns pointer input into edits:
//!
//! ```text
//! pointer down ──→ ClickTracker ──(no drag)──→ pointer_to_ndc
//!                                                   │ host unprojects
//!                                                   ↓
//! VoxelSelection ──→ EditController::handle_click(world, start, end, shift)
//!                                                   │
//!                                                   ↓
//!                                  VoxelWorld::place_voxel ──→ RedrawFlag
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod controller;
pub mod pointer;
pub mod selection;

/// Re-export of the world engine.
pub use voxgrid_world as world;

/// Re-export of shared math types.
pub use voxgrid_shared as shared;

pub use controller::{EditController, RedrawFlag};
pub use pointer::{pointer_to_ndc, ClickTracker, DEFAULT_MOVEMENT_SENSITIVITY};
pub use selection::VoxelSelection;
