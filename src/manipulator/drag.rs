//! Mouse input for the rotate manipulator

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::settings::ProjectorSettings;
use crate::manipulator::rings::{pick_ring, ring_plane_hit};
use crate::manipulator::{ManipulatorChanged, PlaneManipulator};
use crate::rendering::cameras::SceneCamera;

/// Starts, continues and ends ring drags from the left mouse button
pub fn handle_manipulator_drag(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    settings: Res<ProjectorSettings>,
    mut manipulator: ResMut<PlaneManipulator>,
    mut changes: EventWriter<ManipulatorChanged>,
) {
    if mouse_buttons.just_released(MouseButton::Left) {
        manipulator.end_drag();
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    // Cursor outside the window: keep the drag, wait for it to come back
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    if mouse_buttons.just_pressed(MouseButton::Left) {
        if let Some((axis, hit)) =
            pick_ring(ray, settings.ring_radius(), settings.ring_hit_tolerance)
        {
            manipulator.begin_drag(axis, hit);
        }
        return;
    }

    let Some(drag) = manipulator.active_drag() else {
        return;
    };
    // Edge-on ring planes give no hit; skip the frame
    let Some((_, hit)) = ring_plane_hit(ray, drag.axis) else {
        return;
    };

    if let Some(change) = drag_to(&mut manipulator, hit) {
        changes.write(change);
    }
}

/// Continues the active drag to `hit`. Returns the change to announce when
/// the rotation actually moved.
pub fn drag_to(manipulator: &mut PlaneManipulator, hit: Vec3) -> Option<ManipulatorChanged> {
    let angle = manipulator.update_drag(hit)?;
    (angle != 0.0).then(|| ManipulatorChanged {
        orientation: manipulator.current_orientation(),
    })
}

/// Copies the manipulator's rotation onto the attached plane entity
pub fn apply_rotation_to_target(
    manipulator: Res<PlaneManipulator>,
    mut transforms: Query<&mut Transform>,
) {
    let Some(target) = manipulator.target() else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(target) {
        if transform.rotation != manipulator.rotation() {
            transform.rotation = manipulator.rotation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PlaneOrientation;
    use crate::manipulator::RingAxis;

    fn drag_app(manipulator: PlaneManipulator) -> App {
        let mut app = App::new();
        app.add_event::<ManipulatorChanged>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(ProjectorSettings::default())
            .insert_resource(manipulator)
            .add_systems(Update, handle_manipulator_drag);
        app
    }

    #[test]
    fn test_release_ends_drag() {
        let mut manipulator = PlaneManipulator::default();
        manipulator.begin_drag(RingAxis::Y, Vec3::Z);
        let mut app = drag_app(manipulator);

        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
        app.update();

        assert!(!app.world().resource::<PlaneManipulator>().is_dragging());
        assert!(app.world().resource::<Events<ManipulatorChanged>>().is_empty());
    }

    #[test]
    fn test_held_button_without_cursor_keeps_drag() {
        let mut manipulator = PlaneManipulator::default();
        manipulator.begin_drag(RingAxis::Y, Vec3::Z);
        let mut app = drag_app(manipulator);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let manipulator = app.world().resource::<PlaneManipulator>();
        assert!(manipulator.is_dragging());
        assert_eq!(manipulator.rotation(), Quat::IDENTITY);
        assert!(app.world().resource::<Events<ManipulatorChanged>>().is_empty());
    }

    #[test]
    fn test_only_moving_drag_announces_change() {
        let mut manipulator = PlaneManipulator::default();
        assert!(drag_to(&mut manipulator, Vec3::X).is_none());

        manipulator.begin_drag(RingAxis::Y, Vec3::Z);
        assert!(drag_to(&mut manipulator, Vec3::Z).is_none());

        let change = drag_to(&mut manipulator, Vec3::X).expect("rotation moved");
        assert_eq!(change.orientation, manipulator.current_orientation());
        assert_ne!(manipulator.rotation(), Quat::IDENTITY);
    }

    #[test]
    fn test_rotation_copied_to_target() {
        let mut app = App::new();
        let plane = app.world_mut().spawn(Transform::default()).id();

        let mut manipulator = PlaneManipulator::default();
        manipulator.attach(plane);
        manipulator.set_orientation(PlaneOrientation::from_degrees(30.0, -20.0, 0.0));
        let expected = manipulator.rotation();

        app.insert_resource(manipulator)
            .add_systems(Update, apply_rotation_to_target);
        app.update();

        let transform = app.world().get::<Transform>(plane).expect("transform");
        assert_eq!(transform.rotation, expected);
        assert_eq!(transform.translation, Vec3::ZERO);
    }

    #[test]
    fn test_unattached_manipulator_touches_nothing() {
        let mut app = App::new();
        let other = app.world_mut().spawn(Transform::default()).id();

        let mut manipulator = PlaneManipulator::default();
        manipulator.set_orientation(PlaneOrientation::from_degrees(45.0, 0.0, 0.0));

        app.insert_resource(manipulator)
            .add_systems(Update, apply_rotation_to_target);
        app.update();

        let transform = app.world().get::<Transform>(other).expect("transform");
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
