//! Integration tests for transform propagation and re-parenting helpers.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test hierarchy_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};

use vrgrip::components::globaltransform::GlobalTransform;
use vrgrip::components::transform::Transform;
use vrgrip::systems::grab::{reparent_keep_world, world_transform};
use vrgrip::systems::propagate_transforms::propagate_transforms;

const EPSILON: f32 = 1e-4;

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn tick_propagate(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(propagate_transforms);
    schedule.run(world);
}

#[test]
fn root_mirrors_local_transform() {
    let mut world = World::new();
    let root = world
        .spawn((
            Transform::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            GlobalTransform::default(),
        ))
        .id();

    tick_propagate(&mut world);

    let global = world.get::<GlobalTransform>(root).unwrap();
    assert!(vec_approx_eq(global.translation, Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn child_composes_parent_transform() {
    let mut world = World::new();
    let parent = world
        .spawn((
            Transform::new(
                Vec3::new(10.0, 0.0, 0.0),
                Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            ),
            GlobalTransform::default(),
        ))
        .id();
    let child = world
        .spawn((
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            GlobalTransform::default(),
            ChildOf(parent),
        ))
        .id();
    world.flush();

    tick_propagate(&mut world);

    // Parent's 90 degree yaw maps the child's +X offset onto -Z.
    let global = world.get::<GlobalTransform>(child).unwrap();
    assert!(vec_approx_eq(global.translation, Vec3::new(10.0, 0.0, -1.0)));
}

#[test]
fn grandchild_composes_full_chain() {
    let mut world = World::new();
    let root = world
        .spawn((
            Transform::from_translation(Vec3::new(0.0, 5.0, 0.0)),
            GlobalTransform::default(),
        ))
        .id();
    let middle = world
        .spawn((
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            GlobalTransform::default(),
            ChildOf(root),
        ))
        .id();
    let leaf = world
        .spawn((
            Transform::from_translation(Vec3::new(0.0, 0.0, 2.0)),
            GlobalTransform::default(),
            ChildOf(middle),
        ))
        .id();
    world.flush();

    tick_propagate(&mut world);

    let global = world.get::<GlobalTransform>(leaf).unwrap();
    assert!(vec_approx_eq(global.translation, Vec3::new(1.0, 5.0, 2.0)));
}

#[test]
fn missing_global_is_inserted_deferred() {
    let mut world = World::new();
    let root = world
        .spawn(Transform::from_translation(Vec3::new(3.0, 0.0, 0.0)))
        .id();

    tick_propagate(&mut world);

    let global = world.get::<GlobalTransform>(root).unwrap();
    assert!(vec_approx_eq(global.translation, Vec3::new(3.0, 0.0, 0.0)));
}

#[test]
fn world_transform_walks_parent_chain() {
    let mut world = World::new();
    let parent = world
        .spawn(Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)))
        .id();
    let child = world
        .spawn((
            Transform::from_translation(Vec3::new(2.0, 0.0, 0.0)),
            ChildOf(parent),
        ))
        .id();
    world.flush();

    let composed = world_transform(&world, child);
    assert!(vec_approx_eq(composed.translation, Vec3::new(2.0, 1.0, 0.0)));
}

#[test]
fn reparent_keeps_world_pose() {
    let mut world = World::new();
    let old_parent = world
        .spawn(Transform::from_translation(Vec3::new(5.0, 0.0, 0.0)))
        .id();
    let new_parent = world
        .spawn(Transform::new(
            Vec3::new(0.0, 2.0, 0.0),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        ))
        .id();
    let item = world
        .spawn((
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            ChildOf(old_parent),
        ))
        .id();
    world.flush();

    let before = world_transform(&world, item);
    reparent_keep_world(&mut world, item, Some(new_parent));

    assert_eq!(world.get::<ChildOf>(item).map(|c| c.0), Some(new_parent));
    let after = world_transform(&world, item);
    assert!(vec_approx_eq(after.translation, before.translation));
    assert!(after.rotation.angle_between(before.rotation) < EPSILON);
}

#[test]
fn reparent_to_none_detaches_at_world_pose() {
    let mut world = World::new();
    let parent = world
        .spawn(Transform::from_translation(Vec3::new(5.0, 5.0, 5.0)))
        .id();
    let item = world
        .spawn((
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            ChildOf(parent),
        ))
        .id();
    world.flush();

    reparent_keep_world(&mut world, item, None);

    assert!(world.get::<ChildOf>(item).is_none());
    let local = world.get::<Transform>(item).unwrap();
    assert!(vec_approx_eq(local.translation, Vec3::new(6.0, 5.0, 5.0)));
}

#[test]
fn reparent_to_despawned_parent_detaches() {
    let mut world = World::new();
    let parent = world.spawn(Transform::IDENTITY).id();
    let ghost = world.spawn_empty().id();
    let item = world
        .spawn((
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            ChildOf(parent),
        ))
        .id();
    world.flush();
    world.despawn(ghost);

    reparent_keep_world(&mut world, item, Some(ghost));

    assert!(world.get::<ChildOf>(item).is_none());
}
