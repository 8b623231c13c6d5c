//! Geometry kernel
//!
//! Stateless helpers for the projection model:
//! - `Plane` and the orthogonal projection of a point onto it
//! - `PlaneOrientation` and the derivation of a unit normal from it

pub mod orientation;
pub mod plane;

pub use orientation::{normal_from_orientation, PlaneOrientation};
pub use plane::{project, Plane};

/// Tolerance used when comparing derived geometry
pub const GEOMETRY_EPSILON: f32 = 1e-5;
