use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::manipulator::ManipulatorPlugin;
use crate::rendering::cameras::CameraPlugin;
use crate::rendering::scene::ScenePlugin;
use crate::rendering::viewport::ViewportPlugin;
use crate::systems::sync::SyncPlugin;
use crate::systems::system_sets::ProjectorSetsPlugin;
use crate::ui::hud::HudPlugin;
use crate::ui::theme::{
    GIZMO_LINE_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};

/// Configure the default Bevy plugins with custom settings
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                // Tell wasm to resize the window according to the available canvas
                fit_canvas_to_parent: true,
                // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        })
        // Disable Bevy's default LogPlugin since we're using our own custom logger
        .build()
        .disable::<bevy::log::LogPlugin>()
}

/// System to configure gizmo appearance
fn configure_gizmos(mut gizmo_store: ResMut<GizmoConfigStore>) {
    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = GIZMO_LINE_WIDTH;
    // Keep rings and segments visible through the plane disk
    config.depth_bias = -1.0;
    info!("Configured gizmo line width to {}px", GIZMO_LINE_WIDTH);
}

/// Plugin to organize setup systems
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_gizmos);
    }
}

/// Main application plugin that bundles all internal plugins
pub struct ProjectorSystems;

impl Plugin for ProjectorSystems {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_plugins((
                ProjectorSetsPlugin,
                SetupPlugin,
                ViewportPlugin,
                CameraPlugin,
                ScenePlugin,
                ManipulatorPlugin,
                SyncPlugin,
                HudPlugin,
            ));
    }
}
