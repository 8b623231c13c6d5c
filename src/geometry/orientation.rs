//! Plane orientation and the normal derived from it
//!
//! The plane mesh is a disk in its local XY plane. Its orientation is stored
//! as intrinsic XYZ Euler angles: pitch about X, then yaw about Y, then roll
//! about Z. Untilted, the projection normal points down the negative depth
//! axis, `(0, 0, -1)`.

use bevy::math::{EulerRot, Quat, Vec3};

/// Three rotation angles in radians
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaneOrientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl PlaneOrientation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn from_degrees(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::new(pitch.to_radians(), yaw.to_radians(), roll.to_radians())
    }

    /// Reads the angles back out of a rotation
    pub fn from_rotation(rotation: Quat) -> Self {
        let (pitch, yaw, roll) = rotation.to_euler(EulerRot::XYZ);
        Self { pitch, yaw, roll }
    }

    pub fn to_rotation(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }
}

/// Unit normal of a plane with the given orientation.
///
/// Roll spins the plane about its own normal, so it is ignored. Non-finite
/// angles give the zero vector, which `Plane::new` rejects.
pub fn normal_from_orientation(orientation: PlaneOrientation) -> Vec3 {
    if !orientation.is_finite() {
        return Vec3::ZERO;
    }

    let yaw = -orientation.yaw;
    let pitch = -orientation.pitch;

    Vec3::new(
        yaw.sin(),
        -(pitch.sin() * yaw.cos()),
        -(pitch.cos() * yaw.cos()),
    )
    .normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{project, Plane, GEOMETRY_EPSILON};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample_orientations() -> Vec<PlaneOrientation> {
        let mut out = Vec::new();
        for pitch in [-170.0, -90.0, -33.0, 0.0, 12.5, 45.0, 90.0, 181.0] {
            for yaw in [-135.0, -90.0, -10.0, 0.0, 30.0, 89.0, 90.0] {
                for roll in [0.0, 17.0, -120.0] {
                    out.push(PlaneOrientation::from_degrees(pitch, yaw, roll));
                }
            }
        }
        out
    }

    #[test]
    fn test_unrotated_normal_points_down_depth_axis() {
        let normal = normal_from_orientation(PlaneOrientation::default());
        assert!(normal.abs_diff_eq(Vec3::NEG_Z, GEOMETRY_EPSILON));
    }

    #[test]
    fn test_unrotated_plane_projection() {
        let normal = normal_from_orientation(PlaneOrientation::default());
        let plane = Plane::through_origin(normal).expect("valid plane");
        let projected = project(Vec3::new(0.0, 0.0, 1.0), &plane);
        assert!(projected.abs_diff_eq(Vec3::ZERO, GEOMETRY_EPSILON));
    }

    #[test]
    fn test_quarter_yaw_normal_lies_on_x_axis() {
        // The sign flips leave the normal at -X for a +90 degree yaw
        let normal = normal_from_orientation(PlaneOrientation::new(0.0, FRAC_PI_2, 0.0));
        assert!(normal.abs_diff_eq(Vec3::NEG_X, GEOMETRY_EPSILON));

        let plane = Plane::through_origin(normal).expect("valid plane");
        let projected = project(Vec3::new(5.0, 2.0, 3.0), &plane);
        assert!(projected.abs_diff_eq(Vec3::new(0.0, 2.0, 3.0), 1e-4));
    }

    #[test]
    fn test_quarter_pitch_normal() {
        let normal = normal_from_orientation(PlaneOrientation::new(FRAC_PI_2, 0.0, 0.0));
        assert!(normal.abs_diff_eq(Vec3::Y, GEOMETRY_EPSILON));
    }

    #[test]
    fn test_normal_is_unit_length() {
        for orientation in sample_orientations() {
            let normal = normal_from_orientation(orientation);
            assert!(
                (normal.length() - 1.0).abs() < GEOMETRY_EPSILON,
                "{orientation:?} gave {normal:?}"
            );
        }
    }

    #[test]
    fn test_roll_does_not_change_normal() {
        for orientation in sample_orientations() {
            let a = normal_from_orientation(PlaneOrientation { roll: 0.0, ..orientation });
            let b = normal_from_orientation(PlaneOrientation { roll: 2.5, ..orientation });
            let c = normal_from_orientation(PlaneOrientation { roll: -PI, ..orientation });
            assert_eq!(a, b);
            assert_eq!(a, c);
        }
    }

    #[test]
    fn test_non_finite_angles_give_no_normal() {
        for orientation in [
            PlaneOrientation::new(f32::NAN, 0.0, 0.0),
            PlaneOrientation::new(0.0, f32::INFINITY, 0.0),
            PlaneOrientation::new(0.3, 0.2, f32::NAN),
        ] {
            assert!(!orientation.is_finite());
            assert_eq!(normal_from_orientation(orientation), Vec3::ZERO);
        }
        assert!(PlaneOrientation::from_degrees(10.0, 20.0, 30.0).is_finite());
    }

    #[test]
    fn test_normal_is_negated_mesh_axis() {
        // The disk's mesh normal is local +Z; the projection normal is its
        // opposite for every rotation.
        for orientation in sample_orientations() {
            let mesh_normal = orientation.to_rotation() * Vec3::Z;
            let normal = normal_from_orientation(orientation);
            assert!(
                normal.abs_diff_eq(-mesh_normal, 1e-4),
                "{orientation:?}: {normal:?} vs {mesh_normal:?}"
            );
        }
    }

    #[test]
    fn test_rotation_round_trip_preserves_normal() {
        // Stay clear of gimbal lock, where recovered angles lose precision
        let orientations = sample_orientations()
            .into_iter()
            .filter(|o| o.yaw.abs() < 80.0_f32.to_radians());
        for orientation in orientations {
            let restored = PlaneOrientation::from_rotation(orientation.to_rotation());
            let a = normal_from_orientation(orientation);
            let b = normal_from_orientation(restored);
            assert!(a.abs_diff_eq(b, 1e-4));
        }
    }
}
