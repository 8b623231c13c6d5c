//! Gizmo drawing for segments and debug helpers

use bevy::prelude::*;

use crate::core::settings::ProjectorSettings;
use crate::registry::EntityRegistry;
use crate::rendering::scene::ProjectionPlane;
use crate::ui::theme::{DEBUG_AXES_LENGTH, DEBUG_NORMAL_COLOR, SEGMENT_COLOR};

/// Draws every filled segment from its two endpoints.
///
/// Gizmos are immediate mode, so each frame's lines come straight from the
/// registry with nothing carried over from the previous frame.
pub fn draw_segments(mut gizmos: Gizmos, registry: Res<EntityRegistry>) {
    for (_, segment) in registry.segments() {
        gizmos.line(segment.start, segment.end, SEGMENT_COLOR);
    }
}

/// Draws world axes and the plane's projection normal with `--debug`
pub fn draw_debug_axes(
    mut gizmos: Gizmos,
    settings: Res<ProjectorSettings>,
    planes: Query<&Transform, With<ProjectionPlane>>,
) {
    if !settings.debug {
        return;
    }

    gizmos.axes(Transform::IDENTITY, DEBUG_AXES_LENGTH);
    for plane in planes.iter() {
        // The disk mesh faces local +Z; projections run along the opposite
        let normal = plane.rotation * Vec3::NEG_Z;
        gizmos.arrow(
            plane.translation,
            plane.translation + normal * DEBUG_AXES_LENGTH,
            DEBUG_NORMAL_COLOR,
        );
    }
}
