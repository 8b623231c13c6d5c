//! Rendering
//!
//! The scene side of the app: camera and orbit controls, the spheres and
//! plane disk, gizmo lines for segments, and viewport tracking.

pub mod cameras;
pub mod draw;
pub mod scene;
pub mod viewport;

pub use cameras::{OrbitCamera, SceneCamera};
pub use scene::{ProjectionPlane, ScenePlugin};
pub use viewport::Viewport;
