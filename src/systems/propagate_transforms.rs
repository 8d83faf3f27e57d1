//! Transform propagation for parent-child entity hierarchies.
//!
//! Computes [`GlobalTransform`] for every entity with a [`Transform`],
//! composing local transforms down parent-child chains
//! ([`ChildOf`]/[`Children`]).
//!
//! # Schedule position
//!
//! Should run **after** all systems that mutate local transforms (grab
//! transitions, pose application) and **before** motion sampling, so
//! downstream systems see up-to-date world positions.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;

use crate::components::globaltransform::GlobalTransform;
use crate::components::transform::Transform;

/// Propagate transforms from root entities down through the hierarchy.
///
/// For each root entity (no [`ChildOf`]):
/// 1. Mirror its local [`Transform`] into its [`GlobalTransform`].
/// 2. Recursively traverse children, composing transforms at each level.
///
/// Entities that already have a `GlobalTransform` are updated in place.
/// Entities missing the component get it inserted via deferred [`Commands`]
/// (visible next tick).
pub fn propagate_transforms(
    roots: Query<(Entity, &Transform, Option<&Children>), Without<ChildOf>>,
    children_query: Query<(&Transform, Option<&Children>), With<ChildOf>>,
    mut globals: Query<&mut GlobalTransform>,
    mut commands: Commands,
) {
    for (root_entity, transform, children) in roots.iter() {
        let root_global = GlobalTransform::from_transform(transform);

        if let Ok(mut global) = globals.get_mut(root_entity) {
            *global = root_global;
        } else {
            commands.entity(root_entity).insert(root_global);
        }

        if let Some(children) = children {
            propagate_children(
                &root_global,
                children,
                &children_query,
                &mut globals,
                &mut commands,
            );
        }
    }
}

fn propagate_children(
    parent_global: &GlobalTransform,
    children: &Children,
    children_query: &Query<(&Transform, Option<&Children>), With<ChildOf>>,
    globals: &mut Query<&mut GlobalTransform>,
    commands: &mut Commands,
) {
    for child_entity in children.iter() {
        let Ok((local, maybe_grandchildren)) = children_query.get(child_entity) else {
            continue;
        };

        let composed = parent_global.as_transform().mul_transform(local);
        let child_global = GlobalTransform::from_transform(&composed);

        if let Ok(mut global) = globals.get_mut(child_entity) {
            *global = child_global;
        } else {
            commands.entity(child_entity).insert(child_global);
        }

        if let Some(grandchildren) = maybe_grandchildren {
            propagate_children(&child_global, grandchildren, children_query, globals, commands);
        }
    }
}
