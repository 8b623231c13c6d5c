//! Plane Projector
//!
//! An interactive 3D view of a set of points, a rotatable plane through the
//! origin, and the orthogonal projection of every point onto that plane.
//! The projections and the segments joining each point to its projection
//! are recomputed once per frame from the plane's current orientation.

pub mod core;
pub mod geometry;
pub mod manipulator;
pub mod registry;
pub mod rendering;
pub mod systems;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::core::errors::{ProjectionError, ProjectorResult};
pub use crate::geometry::{normal_from_orientation, project, Plane, PlaneOrientation};
pub use crate::registry::{EntityId, EntityKind, EntityRegistry, RegistryEntry, Segment};
pub use crate::systems::sync::sync_projections;
