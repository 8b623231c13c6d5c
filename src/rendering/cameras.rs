//! Camera system for the projection viewer
//!
//! One perspective camera orbits the world origin. Left-drag orbits, the
//! mouse wheel zooms. Orbiting is switched off by the sync loop while the
//! plane manipulator is being dragged, the same way the design camera's pan
//! is switched on and off by edit mode.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::core::settings::{
    ProjectorSettings, MAX_ORBIT_RADIUS, MIN_ORBIT_RADIUS,
};
use crate::systems::system_sets::ProjectorSets;

const CAMERA_START: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

// Stop just short of the poles so looking_at keeps a stable up vector
const MAX_ORBIT_PITCH: f32 = FRAC_PI_2 - 0.01;
const PIXELS_PER_SCROLL_LINE: f32 = 16.0;

//------------------------------------------------------------------------------
// Camera Components
//------------------------------------------------------------------------------

/// Component that marks the camera looking at the scene
#[derive(Component)]
pub struct SceneCamera;

/// Orbit controls: spherical coordinates of the camera around a target
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub enabled: bool,
    pub target: Vec3,
    pub radius: f32,
    /// Angle about +Y, zero looking down -Z
    pub yaw: f32,
    /// Elevation above the target's horizontal plane
    pub pitch: f32,
}

impl OrbitCamera {
    /// Orbit that places the camera at `eye`, looking at `target`
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(MIN_ORBIT_RADIUS);
        Self {
            enabled: true,
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Orbits by a mouse delta in pixels
    pub fn orbit(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch =
            (self.pitch + delta.y * sensitivity).clamp(-MAX_ORBIT_PITCH, MAX_ORBIT_PITCH);
    }

    /// Zooms by scroll lines, positive is closer
    pub fn zoom(&mut self, lines: f32, sensitivity: f32) {
        let factor = (1.0 - lines * sensitivity).max(0.1);
        self.radius = (self.radius * factor).clamp(MIN_ORBIT_RADIUS, MAX_ORBIT_RADIUS);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

//------------------------------------------------------------------------------
// Camera Setup Functions
//------------------------------------------------------------------------------

/// Spawns the scene camera at (1, 1, 1) looking at the origin
pub fn spawn_scene_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::looking_at(CAMERA_START, Vec3::ZERO);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
        orbit,
        SceneCamera,
    ));
}

//------------------------------------------------------------------------------
// Camera Control System
//------------------------------------------------------------------------------

/// Applies mouse orbit and zoom to enabled orbit cameras
///
/// Events are drained every frame so motion made while the orbit is
/// disabled doesn't jump the camera once it is enabled again.
pub fn orbit_camera_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    settings: Res<ProjectorSettings>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let motion: Vec2 = motion_events.read().map(|event| event.delta).sum();
    let scroll: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_SCROLL_LINE,
        })
        .sum();

    for (mut orbit, mut transform) in cameras.iter_mut() {
        if !orbit.enabled {
            continue;
        }
        if mouse_buttons.pressed(MouseButton::Left) && motion != Vec2::ZERO {
            orbit.orbit(motion, settings.orbit_sensitivity);
        }
        if scroll != 0.0 {
            orbit.zoom(scroll, settings.zoom_sensitivity);
        }

        let target = orbit.transform();
        if *transform != target {
            *transform = target;
        }
    }
}

/// Plugin to organize camera-related systems
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            orbit_camera_controls.in_set(ProjectorSets::Present),
        );
    }
}
