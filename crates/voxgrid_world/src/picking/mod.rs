//! Ray picking and the edit protocol built on it.

mod edit;
mod raycast;

pub use edit::{target_cell, EditOutcome};
pub use raycast::{intersect_ray, RayHit};
