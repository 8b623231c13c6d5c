//! Rotation rings: hit testing and drawing
//!
//! Rings are world-aligned circles around the plane origin, one per axis.
//! A ring is grabbed when the cursor ray crosses the ring's own plane within
//! a small distance of the circle.

use bevy::math::{Isometry3d, Ray3d};
use bevy::prelude::*;

use crate::core::settings::ProjectorSettings;
use crate::manipulator::PlaneManipulator;
use crate::ui::theme::{
    RING_ACTIVE_COLOR, RING_X_COLOR, RING_Y_COLOR, RING_Z_COLOR,
};

/// The axis a ring rotates about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingAxis {
    X,
    Y,
    Z,
}

impl RingAxis {
    pub const ALL: [RingAxis; 3] = [RingAxis::X, RingAxis::Y, RingAxis::Z];

    pub fn direction(self) -> Vec3 {
        match self {
            RingAxis::X => Vec3::X,
            RingAxis::Y => Vec3::Y,
            RingAxis::Z => Vec3::Z,
        }
    }

    pub fn color(self) -> Color {
        match self {
            RingAxis::X => RING_X_COLOR,
            RingAxis::Y => RING_Y_COLOR,
            RingAxis::Z => RING_Z_COLOR,
        }
    }

    /// Rotation that takes the XY plane (where gizmo circles are drawn) onto
    /// the plane perpendicular to this axis
    fn circle_rotation(self) -> Quat {
        Quat::from_rotation_arc(Vec3::Z, self.direction())
    }
}

/// Where a ray meets the plane of `axis`'s ring, if it does
pub fn ring_plane_hit(ray: Ray3d, axis: RingAxis) -> Option<(f32, Vec3)> {
    let distance =
        ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(axis.direction()))?;
    Some((distance, ray.get_point(distance)))
}

/// Finds the ring nearest along `ray` whose circle passes within
/// `tolerance` of the hit. Returns the ring and the hit point.
pub fn pick_ring(
    ray: Ray3d,
    radius: f32,
    tolerance: f32,
) -> Option<(RingAxis, Vec3)> {
    RingAxis::ALL
        .into_iter()
        .filter_map(|axis| {
            let (distance, hit) = ring_plane_hit(ray, axis)?;
            ((hit.length() - radius).abs() <= tolerance).then_some((distance, axis, hit))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, axis, hit)| (axis, hit))
}

/// Angle in radians that turns `from` onto `to` about `axis`, counter-clockwise
/// positive. Both vectors are taken as lying in the plane normal to `axis`.
pub fn signed_angle_about(axis: Vec3, from: Vec3, to: Vec3) -> f32 {
    let cross = from.cross(to);
    axis.dot(cross).atan2(from.dot(to))
}

/// Draws the three rings, highlighting the one being dragged
pub fn draw_rotation_rings(
    mut gizmos: Gizmos,
    manipulator: Res<PlaneManipulator>,
    settings: Res<ProjectorSettings>,
) {
    let radius = settings.ring_radius();
    let active = manipulator.active_drag().map(|drag| drag.axis);

    for axis in RingAxis::ALL {
        let color = if active == Some(axis) {
            RING_ACTIVE_COLOR
        } else {
            axis.color()
        };
        gizmos
            .circle(Isometry3d::from_rotation(axis.circle_rotation()), radius, color)
            .resolution(64);
    }
}
