//! Rotate manipulator for the projection plane
//!
//! The manipulator owns the plane's rotation and the user's drag state. The
//! rest of the app only sees its narrow interface: `current_orientation()`,
//! `is_dragging()`, and the `ManipulatorChanged` event fired whenever the
//! rotation moves. It only ever rotates; the plane is never translated.

pub mod drag;
pub mod rings;

use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::geometry::PlaneOrientation;
use crate::systems::system_sets::ProjectorSets;

pub use drag::{apply_rotation_to_target, drag_to, handle_manipulator_drag};
pub use rings::{draw_rotation_rings, pick_ring, signed_angle_about, RingAxis};

/// Fired whenever the manipulator changes the plane's rotation
#[derive(Event, Debug, Clone, Copy)]
pub struct ManipulatorChanged {
    pub orientation: PlaneOrientation,
}

/// A drag in progress: which ring was grabbed and where the cursor last hit
/// that ring's plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub axis: RingAxis,
    pub last_hit: Vec3,
}

/// The plane's rotation and the drag state
#[derive(Resource, Debug, Clone, Default)]
pub struct PlaneManipulator {
    rotation: Quat,
    target: Option<Entity>,
    active_drag: Option<ActiveDrag>,
}

impl PlaneManipulator {
    /// Attaches the manipulator to the entity whose rotation it drives
    pub fn attach(&mut self, target: Entity) {
        if let Some(previous) = self.target.replace(target) {
            warn!("Manipulator moved from {:?} to {:?}", previous, target);
        }
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn current_orientation(&self) -> PlaneOrientation {
        PlaneOrientation::from_rotation(self.rotation)
    }

    pub fn set_orientation(&mut self, orientation: PlaneOrientation) {
        self.rotation = orientation.to_rotation();
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    pub fn active_drag(&self) -> Option<ActiveDrag> {
        self.active_drag
    }

    /// Starts a drag on `axis` from a hit point on that ring's plane
    pub fn begin_drag(&mut self, axis: RingAxis, hit: Vec3) {
        debug!("Manipulator drag started on {:?} ring", axis);
        self.active_drag = Some(ActiveDrag { axis, last_hit: hit });
    }

    /// Rotates about the grabbed ring's axis by the angle swept from the last
    /// hit to `hit`. Returns the applied angle, or `None` when not dragging.
    pub fn update_drag(&mut self, hit: Vec3) -> Option<f32> {
        let drag = self.active_drag.as_mut()?;
        let axis = drag.axis.direction();
        let angle = signed_angle_about(axis, drag.last_hit, hit);
        drag.last_hit = hit;

        if angle != 0.0 {
            self.rotation = (Quat::from_axis_angle(axis, angle) * self.rotation).normalize();
        }
        Some(angle)
    }

    pub fn end_drag(&mut self) {
        if self.active_drag.take().is_some() {
            debug!("Manipulator drag ended");
        }
    }
}

/// Requests a redraw for every manipulator change
fn redraw_on_manipulator_change(
    mut changes: EventReader<ManipulatorChanged>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    if changes.read().last().is_some() {
        redraw.write(RequestRedraw);
    }
}

/// Plugin that wires the manipulator's input and drawing systems
pub struct ManipulatorPlugin;

impl Plugin for ManipulatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaneManipulator>()
            .add_event::<ManipulatorChanged>()
            .add_systems(
                Update,
                (handle_manipulator_drag, apply_rotation_to_target)
                    .chain()
                    .in_set(ProjectorSets::Input),
            )
            .add_systems(
                Update,
                (draw_rotation_rings, redraw_on_manipulator_change)
                    .in_set(ProjectorSets::Present),
            );
    }
}
