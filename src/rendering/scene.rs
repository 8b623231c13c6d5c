//! Scene setup and registry-to-scene sync
//!
//! Spawns the camera, lights, one sphere per point and per projection, and
//! the plane disk the manipulator is attached to. Each sphere carries its
//! registry `EntityId`, and its transform is refreshed from the registry
//! every frame.

use bevy::prelude::*;

use crate::core::settings::{ProjectorSettings, PLANE_RESOLUTION};
use crate::manipulator::PlaneManipulator;
use crate::registry::{EntityId, EntityKind, EntityRegistry};
use crate::rendering::cameras::spawn_scene_camera;
use crate::rendering::draw::{draw_debug_axes, draw_segments};
use crate::systems::system_sets::ProjectorSets;
use crate::ui::theme::{
    AMBIENT_LIGHT_BRIGHTNESS, LIGHT_POSITION, PLANE_COLOR, POINT_COLOR, PROJECTION_COLOR,
};

/// Component that marks the plane disk
#[derive(Component)]
pub struct ProjectionPlane;

/// Spawns every visible entity of the scene
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<EntityRegistry>,
    settings: Res<ProjectorSettings>,
    mut manipulator: ResMut<PlaneManipulator>,
) -> Result {
    spawn_scene_camera(&mut commands);

    commands.spawn((
        PointLight::default(),
        Transform::from_translation(LIGHT_POSITION),
    ));

    let sphere = meshes.add(Sphere::new(settings.point_radius));
    let point_material = materials.add(StandardMaterial {
        base_color: POINT_COLOR,
        unlit: true,
        ..default()
    });
    let projection_material = materials.add(StandardMaterial {
        base_color: PROJECTION_COLOR,
        unlit: true,
        ..default()
    });

    for id in registry.ids() {
        let entry = registry.get(id)?;
        let material = match entry.kind() {
            EntityKind::Point => point_material.clone(),
            EntityKind::Projection => projection_material.clone(),
            // Segments are drawn as gizmo lines, not entities
            EntityKind::Segment => continue,
        };
        // Projection slots stay at the origin until the first sync
        let position = entry.position().unwrap_or(Vec3::ZERO);

        commands.spawn((
            id,
            Mesh3d(sphere.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position),
        ));
    }

    let disk = meshes.add(
        Circle::new(settings.plane_radius)
            .mesh()
            .resolution(PLANE_RESOLUTION),
    );
    let plane_material = materials.add(StandardMaterial {
        base_color: PLANE_COLOR,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let plane = commands
        .spawn((
            ProjectionPlane,
            Mesh3d(disk),
            MeshMaterial3d(plane_material),
            Transform::from_rotation(manipulator.rotation()),
        ))
        .id();
    manipulator.attach(plane);

    info!(
        "Scene ready with {} points and their projections",
        registry.point_count()
    );
    Ok(())
}

/// Moves point and projection spheres to their registry positions
pub fn apply_registry_positions(
    registry: Res<EntityRegistry>,
    mut spheres: Query<(&EntityId, &mut Transform)>,
) -> Result {
    for (id, mut transform) in spheres.iter_mut() {
        let Some(position) = registry.get(*id)?.position() else {
            continue;
        };
        if transform.translation != position {
            transform.translation = position;
        }
    }
    Ok(())
}

/// Plugin for the 3D scene
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            brightness: AMBIENT_LIGHT_BRIGHTNESS,
            ..default()
        })
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (apply_registry_positions, draw_segments, draw_debug_axes)
                .in_set(ProjectorSets::Present),
        );
    }
}
