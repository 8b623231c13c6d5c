// Heads-up text in the top left corner: frame rate and the current plane.
// Not part of the 3D scene, so it is plain Bevy UI on top of the camera.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::core::settings::ProjectorSettings;
use crate::geometry::PlaneOrientation;
use crate::manipulator::{ManipulatorChanged, PlaneManipulator};
use crate::systems::sync::SyncState;
use crate::systems::system_sets::ProjectorSets;
use crate::ui::theme::{HUD_FONT_SIZE, HUD_MARGIN, HUD_ROW_GAP, HUD_TEXT_COLOR};

/// Component that marks the frame rate text
#[derive(Component)]
pub struct FpsText;

/// Component that marks the plane orientation text
#[derive(Component)]
pub struct PlaneReadoutText;

/// Spawns the HUD unless stats are turned off
pub fn spawn_hud(mut commands: Commands, settings: Res<ProjectorSettings>) {
    if !settings.show_stats {
        debug!("HUD disabled");
        return;
    }

    let font = TextFont {
        font_size: HUD_FONT_SIZE,
        ..default()
    };

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(HUD_MARGIN),
            left: Val::Px(HUD_MARGIN),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(HUD_ROW_GAP),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                FpsText,
                Text::new("FPS: --"),
                font.clone(),
                TextColor(HUD_TEXT_COLOR),
            ));
            parent.spawn((
                PlaneReadoutText,
                Text::new(""),
                font,
                TextColor(HUD_TEXT_COLOR),
            ));
        });
}

/// Refreshes the smoothed frame rate
pub fn update_fps_text(
    diagnostics: Res<DiagnosticsStore>,
    mut texts: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
    else {
        return;
    };

    for mut text in texts.iter_mut() {
        **text = format!("FPS: {fps:.0}");
    }
}

/// Formats pitch/yaw/roll in degrees followed by the plane normal
pub fn format_plane_readout(orientation: PlaneOrientation, normal: Option<Vec3>) -> String {
    let angles = format!(
        "pitch {:>7.1}°  yaw {:>7.1}°  roll {:>7.1}°",
        orientation.pitch.to_degrees(),
        orientation.yaw.to_degrees(),
        orientation.roll.to_degrees(),
    );
    match normal {
        Some(n) => format!("{angles}\nnormal ({:.3}, {:.3}, {:.3})", n.x, n.y, n.z),
        None => angles,
    }
}

/// Shows the orientation and normal the last sync tick used.
///
/// During a drag the angles come from the latest `ManipulatorChanged`.
pub fn update_plane_readout(
    mut changes: EventReader<ManipulatorChanged>,
    manipulator: Res<PlaneManipulator>,
    sync_state: Res<SyncState>,
    mut texts: Query<&mut Text, With<PlaneReadoutText>>,
) {
    let latest = changes.read().last().map(|change| change.orientation);
    if latest.is_none() && !manipulator.is_changed() && !sync_state.is_changed() {
        return;
    }

    let orientation = latest.unwrap_or_else(|| manipulator.current_orientation());
    let readout = format_plane_readout(orientation, sync_state.last_normal);
    for mut text in texts.iter_mut() {
        if **text != readout {
            **text = readout.clone();
        }
    }
}

/// Plugin for the heads-up display
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            (update_fps_text, update_plane_readout).in_set(ProjectorSets::Present),
        );
    }
}
