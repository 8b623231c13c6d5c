//! Planes and orthogonal projection

use bevy::math::Vec3;

use crate::core::errors::ProjectionError;

/// An infinite plane given by a point on it and a unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Creates a plane, normalizing `normal`.
    ///
    /// Fails with `DegenerateNormal` when the normal is zero-length or has
    /// non-finite components.
    pub fn new(origin: Vec3, normal: Vec3) -> Result<Self, ProjectionError> {
        let normal = normal
            .try_normalize()
            .ok_or(ProjectionError::DegenerateNormal)?;
        Ok(Self { origin, normal })
    }

    /// A plane through the world origin
    pub fn through_origin(normal: Vec3) -> Result<Self, ProjectionError> {
        Self::new(Vec3::ZERO, normal)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit normal of the plane
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance from the plane along the normal, negative behind it
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.normal)
    }

    /// Foot of the perpendicular from `point` to this plane
    pub fn project(&self, point: Vec3) -> Vec3 {
        // p' = p - ((p - o) . n) n
        point - self.normal * self.signed_distance(point)
    }
}

/// Orthogonal projection of `point` onto `plane`
pub fn project(point: Vec3, plane: &Plane) -> Vec3 {
    plane.project(point)
}
