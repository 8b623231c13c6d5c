use bevy::prelude::*;

// Window Configuration
pub const WINDOW_TITLE: &str = "Plane Projector";
pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);

// Gizmo Configuration
// Thickness of every gizmo line: segments, rings and debug axes.
// 1.0 is the Bevy default and reads as hairline at this scene scale.
pub const GIZMO_LINE_WIDTH: f32 = 2.0;

// Scene Entities
pub const POINT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const PROJECTION_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const SEGMENT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const PLANE_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

// Lighting
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 200.0;
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.8, 1.4, 1.0);

// Manipulator Rings
pub const RING_X_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);
pub const RING_Y_COLOR: Color = Color::srgb(0.2, 1.0, 0.2);
pub const RING_Z_COLOR: Color = Color::srgb(0.2, 0.4, 1.0);
pub const RING_ACTIVE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

// Debug
pub const DEBUG_AXES_LENGTH: f32 = 1.0;
pub const DEBUG_NORMAL_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);

// HUD
pub const HUD_FONT_SIZE: f32 = 14.0;
pub const HUD_TEXT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);
pub const HUD_MARGIN: f32 = 8.0;
pub const HUD_ROW_GAP: f32 = 2.0;
