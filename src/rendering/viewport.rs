//! Viewport tracking
//!
//! Keeps the window size in a resource and the scene camera's aspect ratio
//! in step with it, then asks for one more frame so the resized view is
//! drawn right away.

use bevy::prelude::*;
use bevy::window::{RequestRedraw, WindowResized};

use crate::rendering::cameras::SceneCamera;
use crate::systems::system_sets::ProjectorSets;
use crate::ui::theme::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Logical size of the primary window
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Viewport {
    /// Width over height; 1.0 while the window is minimized
    pub fn aspect_ratio(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Applies the latest resize to the viewport and the camera projection
pub fn handle_window_resized(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection, With<SceneCamera>>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    viewport.width = resized.width;
    viewport.height = resized.height;
    debug!("Viewport resized to {}x{}", resized.width, resized.height);

    for mut projection in projections.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect_ratio();
        }
    }

    redraw.write(RequestRedraw);
}

/// Plugin for viewport and resize handling
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>().add_systems(
            Update,
            handle_window_resized.in_set(ProjectorSets::Input),
        );
    }
}
