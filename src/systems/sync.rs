//! Per-frame projection sync
//!
//! Every frame reads the plane orientation from the manipulator, derives the
//! plane normal, and rewrites every projection and segment in the registry
//! from the current point positions. Nothing is updated incrementally: a
//! segment's endpoints are always the point and projection of this tick.

use bevy::prelude::*;

use crate::core::errors::ProjectionError;
use crate::geometry::{normal_from_orientation, Plane, PlaneOrientation};
use crate::manipulator::PlaneManipulator;
use crate::registry::{EntityId, EntityRegistry};
use crate::rendering::cameras::OrbitCamera;
use crate::systems::system_sets::ProjectorSets;

/// Where the sync loop is within a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncPhase {
    /// Between frames
    #[default]
    Idle,
    /// Inside one frame's sync work
    Ticking,
}

/// Observable state of the sync loop
#[derive(Resource, Debug, Clone, Default)]
pub struct SyncState {
    pub phase: SyncPhase,
    /// Number of ticks that completed
    pub ticks: u64,
    /// Plane normal computed by the last completed tick
    pub last_normal: Option<Vec3>,
}

/// Recomputes every projection and segment for a plane through the origin
/// with the given orientation. Returns the plane normal used.
pub fn sync_projections(
    registry: &mut EntityRegistry,
    orientation: PlaneOrientation,
) -> Result<Vec3, ProjectionError> {
    let normal = normal_from_orientation(orientation);
    let plane = Plane::through_origin(normal)?;

    for i in 0..registry.point_count() {
        let point = registry.point_position(i)?;
        let projection = plane.project(point);

        registry.set_position(EntityId::Projection(i), projection)?;
        registry.set_segment_endpoints(EntityId::Segment(i), point, projection)?;
    }

    Ok(plane.normal())
}

/// Runs one tick of the projection sync against the registry resource
pub fn sync_projection_system(
    manipulator: Res<PlaneManipulator>,
    mut registry: ResMut<EntityRegistry>,
    mut state: ResMut<SyncState>,
) -> Result {
    state.phase = SyncPhase::Ticking;

    let orientation = manipulator.current_orientation();
    let result = sync_projections(&mut registry, orientation);
    state.phase = SyncPhase::Idle;

    state.last_normal = Some(result?);
    state.ticks += 1;
    Ok(())
}

/// Keeps camera orbit from fighting a plane drag
pub fn toggle_orbit_controls(
    manipulator: Res<PlaneManipulator>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let enabled = !manipulator.is_dragging();
    for mut orbit in cameras.iter_mut() {
        if orbit.enabled != enabled {
            orbit.enabled = enabled;
            debug!("Camera orbit {}", if enabled { "enabled" } else { "disabled" });
        }
    }
}

/// Plugin for the projection sync loop
pub struct SyncPlugin;

impl Plugin for SyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SyncState>().add_systems(
            Update,
            (sync_projection_system, toggle_orbit_controls)
                .chain()
                .in_set(ProjectorSets::Sync),
        );
    }
}
