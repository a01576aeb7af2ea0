//! # VOXGRID Shared
//!
//! Common math types used by both the world engine and the host.
//!
//! ## RULE
//!
//! This crate must NEVER depend on `voxgrid_world`. Engine types live there.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;

pub use math::Vec3;
