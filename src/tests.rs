//! Cross-module scenarios: manipulator, sync loop, registry and geometry
//! working together the way one running frame uses them.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::GEOMETRY_EPSILON;
use crate::manipulator::{PlaneManipulator, RingAxis};
use crate::systems::sync::{SyncPlugin, SyncState};
use crate::systems::system_sets::ProjectorSetsPlugin;
use crate::{
    normal_from_orientation, project, sync_projections, EntityId, EntityRegistry, Plane,
    PlaneOrientation,
};

fn projection_of(registry: &EntityRegistry, i: usize) -> Vec3 {
    registry
        .get(EntityId::Projection(i))
        .expect("projection")
        .position()
        .expect("filled projection")
}

fn single_point_registry(point: Vec3) -> EntityRegistry {
    let mut registry = EntityRegistry::new();
    registry.create_point(EntityId::Point(0), point).expect("point");
    registry
        .create_projection_slot(EntityId::Projection(0))
        .expect("projection");
    registry
        .create_segment_slot(EntityId::Segment(0))
        .expect("segment");
    registry
}

#[test]
fn unrotated_plane_projects_onto_xy() {
    let normal = normal_from_orientation(PlaneOrientation::default());
    assert!(normal.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), GEOMETRY_EPSILON));

    let plane = Plane::through_origin(normal).expect("plane");
    assert!(project(Vec3::new(0.0, 0.0, 1.0), &plane).abs_diff_eq(Vec3::ZERO, GEOMETRY_EPSILON));
}

#[test]
fn quarter_yaw_plane_projects_onto_yz() {
    let orientation = PlaneOrientation::from_degrees(0.0, 90.0, 0.0);
    let normal = normal_from_orientation(orientation);
    // The normal lies on the X axis; which way it points doesn't change the plane
    assert!(normal.abs().abs_diff_eq(Vec3::X, GEOMETRY_EPSILON));

    let mut registry = single_point_registry(Vec3::new(5.0, 2.0, 3.0));
    sync_projections(&mut registry, orientation).expect("sync");
    assert!(projection_of(&registry, 0).abs_diff_eq(Vec3::new(0.0, 2.0, 3.0), 1e-4));
}

#[test]
fn origin_projects_to_itself_for_any_plane() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let orientation = PlaneOrientation::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        let mut registry = single_point_registry(Vec3::ZERO);
        sync_projections(&mut registry, orientation).expect("sync");
        assert_eq!(projection_of(&registry, 0), Vec3::ZERO);
    }
}

#[test]
fn ring_drag_rotates_the_projection_plane() {
    let mut manipulator = PlaneManipulator::default();
    let radius = 1.0;

    // Sweep a quarter turn on the X ring, from +Z round to +Y
    manipulator.begin_drag(RingAxis::X, Vec3::Z * radius);
    let applied = manipulator.update_drag(Vec3::Y * radius).expect("dragging");
    manipulator.end_drag();
    assert!((applied + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    assert!(!manipulator.is_dragging());

    let mut registry = single_point_registry(Vec3::new(0.3, 0.7, -0.2));
    let normal =
        sync_projections(&mut registry, manipulator.current_orientation()).expect("sync");

    assert!(normal.abs_diff_eq(Vec3::NEG_Y, 1e-4));
    assert!(projection_of(&registry, 0).abs_diff_eq(Vec3::new(0.3, 0.0, -0.2), 1e-4));
}

#[test]
fn frames_never_leave_stale_segments() {
    let mut rng = StdRng::seed_from_u64(99);
    let registry = EntityRegistry::with_random_points(10, &mut rng).expect("registry");

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, ProjectorSetsPlugin, SyncPlugin))
        .init_resource::<PlaneManipulator>()
        .insert_resource(registry);

    for frame in 0..10 {
        let degrees = frame as f32 * 9.0;
        app.world_mut()
            .resource_mut::<PlaneManipulator>()
            .set_orientation(PlaneOrientation::from_degrees(degrees, -degrees * 0.5, degrees));
        app.update();

        let registry = app.world().resource::<EntityRegistry>();
        for i in 0..registry.point_count() {
            let segment = registry
                .get(EntityId::Segment(i))
                .expect("segment")
                .endpoints()
                .expect("filled segment");
            assert_eq!(segment.start, registry.point_position(i).expect("point"));
            assert_eq!(segment.end, projection_of(registry, i));
        }
    }

    assert_eq!(app.world().resource::<SyncState>().ticks, 10);
}
