//! System Sets for the projection tick
//!
//! One frame runs Input, then Sync, then Present. Input is where the
//! manipulator moves the plane, Sync recomputes projections from the rotation
//! Input left behind, and Present pushes the results to the scene and HUD.
//! Bevy's render schedule draws the frame afterwards.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ProjectorSets {
    /// Mouse and keyboard input, manipulator and camera drags
    Input,

    /// Recompute projections and segments into the registry
    Sync,

    /// Copy registry state into the scene, draw gizmos, update the HUD
    Present,
}

/// Plugin to configure system set ordering
pub struct ProjectorSetsPlugin;

impl Plugin for ProjectorSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ProjectorSets::Input,
                ProjectorSets::Sync,
                ProjectorSets::Present,
            )
                .chain(),
        );
    }
}
