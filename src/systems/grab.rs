//! Canonical grab/release protocol.
//!
//! Every mutation of a hand's `held` reference and a grabbable's `holder`
//! reference goes through the functions in this module, in a fixed call
//! sequence, so the bidirectional relationship can never diverge. No other
//! code path writes those fields.
//!
//! A grab layers its effects in capability order: base grabbable state,
//! then physical state (kinematic, re-parenting, motion reset) if the entity
//! has a [`PhysicalGrabbable`], then pose state (animator, anchor alignment)
//! if it has a [`PoseGrabbable`]. Release unwinds in the opposite order.
//! All failure modes here are recoverable-and-ignored: a missing capability
//! or a stale entity skips the affected behavior and never panics.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::grabbable::Grabbable;
use crate::components::handcontroller::{HandController, Handedness};
use crate::components::motion::MotionTracker;
use crate::components::physicalgrabbable::PhysicalGrabbable;
use crate::components::physicsbody::PhysicsBody;
use crate::components::poseanimator::PoseAnimator;
use crate::components::posegrabbable::PoseGrabbable;
use crate::components::transform::Transform;
use crate::events::grab::{GrabEvent, ReleaseEvent};

/// World-space transform of `entity`, composed by walking the parent chain.
///
/// Works off local [`Transform`]s directly so it stays correct in the middle
/// of a grab transition, before any propagation system has run.
pub fn world_transform(world: &World, entity: Entity) -> Transform {
    let mut result = world
        .get::<Transform>(entity)
        .copied()
        .unwrap_or(Transform::IDENTITY);
    let mut current = entity;
    while let Some(parent) = world.get::<ChildOf>(current).map(|c| c.0) {
        let parent_local = world
            .get::<Transform>(parent)
            .copied()
            .unwrap_or(Transform::IDENTITY);
        result = parent_local.mul_transform(&result);
        current = parent;
    }
    result
}

/// Re-parent `entity` under `new_parent` (or detach when `None`), keeping
/// its world-space pose by recomputing the local transform.
pub fn reparent_keep_world(world: &mut World, entity: Entity, new_parent: Option<Entity>) {
    let entity_world = world_transform(world, entity);
    match new_parent {
        Some(parent) if world.get_entity(parent).is_ok() => {
            let parent_world = world_transform(world, parent);
            let local = parent_world.inverse().mul_transform(&entity_world);
            world.entity_mut(entity).insert(ChildOf(parent));
            if let Some(mut transform) = world.get_mut::<Transform>(entity) {
                *transform = local;
            }
        }
        _ => {
            world.entity_mut(entity).remove::<ChildOf>();
            if let Some(mut transform) = world.get_mut::<Transform>(entity) {
                *transform = entity_world;
            }
        }
    }
    world.flush();
}

/// Clear a hand's `held` back-reference if it still points at `item`.
///
/// Idempotent; this is the notification a grabbable sends its previous
/// holder when it is released or stolen.
pub fn notify_holder_released(world: &mut World, hand: Entity, item: Entity) {
    if let Some(mut controller) = world.get_mut::<HandController>(hand) {
        if controller.held == Some(item) {
            controller.held = None;
        }
    }
}

/// Make `hand` grab `item`, releasing whatever it held before.
///
/// The attempt is silently dropped when `hand` is not a hand controller or
/// `item` is not grabbable (e.g. it was despawned between touch and grab).
pub fn grab(world: &mut World, hand: Entity, item: Entity) {
    if world.get::<HandController>(hand).is_none() {
        debug!("grab dropped: {hand:?} is not a hand controller");
        return;
    }
    if world.get::<Grabbable>(item).is_none() {
        debug!("grab dropped: {item:?} is not grabbable");
        return;
    }

    // Single-held-object invariant at the controller level.
    let previous = world
        .get::<HandController>(hand)
        .and_then(|controller| controller.held);
    if let Some(previous) = previous {
        if previous != item {
            release_item(world, previous);
        }
    }

    if let Some(mut controller) = world.get_mut::<HandController>(hand) {
        controller.held = Some(item);
    }
    grab_item(world, item, hand);
}

/// Release whatever `hand` currently holds. No-op for an empty hand.
pub fn release(world: &mut World, hand: Entity) {
    let held = world
        .get::<HandController>(hand)
        .and_then(|controller| controller.held);
    if let Some(item) = held {
        release_item(world, item);
        // The item may have been despawned (or lost its grabbable side)
        // while held; the hand's reference is cleared regardless.
        notify_holder_released(world, hand, item);
    }
}

/// Grabbable-side grab, layered base -> physical -> pose.
fn grab_item(world: &mut World, item: Entity, hand: Entity) {
    let Some(old_holder) = world.get::<Grabbable>(item).map(|g| g.holder) else {
        return;
    };

    // Steal: tell the previous holder its object is gone. A re-grab by the
    // same hand skips the notification, otherwise it would clear the `held`
    // reference that was just written.
    if let Some(old) = old_holder {
        if old != hand {
            notify_holder_released(world, old, item);
        }
    }
    if let Some(mut grabbable) = world.get_mut::<Grabbable>(item) {
        grabbable.holder = Some(hand);
    }

    if world.get::<PhysicalGrabbable>(item).is_some() {
        grab_physical(world, item, hand, old_holder.is_none());
    }
    if world.get::<PoseGrabbable>(item).is_some() {
        grab_pose(world, item, hand);
    }

    world.trigger(GrabEvent { item, hand });
}

/// Physical layer of a grab: snapshot on first grab, force kinematic,
/// re-parent under the hand, re-anchor the motion tracker.
fn grab_physical(world: &mut World, item: Entity, hand: Entity, first_grab: bool) {
    if first_grab {
        let was_kinematic = world
            .get::<PhysicsBody>(item)
            .map(|body| body.kinematic)
            .unwrap_or(false);
        let prev_parent = world.get::<ChildOf>(item).map(|c| c.0);
        if let Some(mut physical) = world.get_mut::<PhysicalGrabbable>(item) {
            physical.was_kinematic = was_kinematic;
            physical.prev_parent = prev_parent;
        }
    }

    if let Some(mut body) = world.get_mut::<PhysicsBody>(item) {
        body.kinematic = true;
    }
    reparent_keep_world(world, item, Some(hand));

    let position = world_transform(world, item).translation;
    if let Some(mut tracker) = world.get_mut::<MotionTracker>(item) {
        tracker.reset(position);
    }
}

/// Pose layer of a grab: re-target the holder's pose animator and align the
/// object's grip anchor with the hand origin.
fn grab_pose(world: &mut World, item: Entity, hand: Entity) {
    // A previous holder may still be posing from this object.
    let prev_animator = world
        .get::<PoseGrabbable>(item)
        .and_then(|pose| pose.driven_animator);
    if let Some(prev) = prev_animator {
        if let Some(mut animator) = world.get_mut::<PoseAnimator>(prev) {
            animator.stop();
        }
    }
    if let Some(mut pose) = world.get_mut::<PoseGrabbable>(item) {
        pose.driven_animator = None;
    }

    if world.get::<PoseAnimator>(hand).is_none() {
        debug!("pose skipped: {hand:?} has no pose animator");
        return;
    }

    let handedness = world
        .get::<HandController>(hand)
        .map(|controller| controller.handedness)
        .unwrap_or(Handedness::Unknown);
    let selected = match handedness {
        Handedness::Left => world
            .get::<PoseGrabbable>(item)
            .and_then(|pose| pose.pose_left.clone()),
        Handedness::Right => world
            .get::<PoseGrabbable>(item)
            .and_then(|pose| pose.pose_right.clone()),
        Handedness::Unknown => {
            debug!("pose skipped: {hand:?} has unknown handedness");
            None
        }
    };
    let Some(selected) = selected else {
        return;
    };

    // The object is already a child of the hand here (physical layer).
    // Setting its local transform to the anchor's inverse puts the grip
    // anchor exactly at the hand origin.
    let anchor = world
        .get::<PoseGrabbable>(item)
        .map(|pose| pose.anchor)
        .unwrap_or(Transform::IDENTITY);
    if let Some(mut transform) = world.get_mut::<Transform>(item) {
        *transform = anchor.inverse();
    }

    if let Some(mut animator) = world.get_mut::<PoseAnimator>(hand) {
        animator.play_pose(&selected);
    }
    if let Some(mut pose) = world.get_mut::<PoseGrabbable>(item) {
        pose.driven_animator = Some(hand);
    }
}

/// Grabbable-side release, layered pose -> physical -> base.
///
/// Releasing an already-free grabbable is a no-op: no notifications, no
/// state change, no event.
pub fn release_item(world: &mut World, item: Entity) {
    let holder = match world.get::<Grabbable>(item).map(|g| g.holder) {
        Some(Some(holder)) => holder,
        _ => return,
    };

    // Pose layer.
    let driven = world
        .get::<PoseGrabbable>(item)
        .and_then(|pose| pose.driven_animator);
    if let Some(animator_entity) = driven {
        if let Some(mut animator) = world.get_mut::<PoseAnimator>(animator_entity) {
            animator.stop();
        }
    }
    if let Some(mut pose) = world.get_mut::<PoseGrabbable>(item) {
        pose.driven_animator = None;
    }

    // Physical layer.
    if let Some(physical) = world.get::<PhysicalGrabbable>(item).copied() {
        reparent_keep_world(world, item, physical.prev_parent);
        let hand_velocity = world
            .get::<MotionTracker>(holder)
            .map(|tracker| tracker.velocity)
            .unwrap_or(Vec3::ZERO);
        if let Some(mut body) = world.get_mut::<PhysicsBody>(item) {
            body.kinematic = physical.was_kinematic;
            if !body.kinematic {
                body.velocity = hand_velocity * physical.release_speed_modifier;
            }
        }
    }

    // Base layer.
    let hand = if world.get_entity(holder).is_ok() {
        Some(holder)
    } else {
        None
    };
    if let Some(hand) = hand {
        notify_holder_released(world, hand, item);
    }
    if let Some(mut grabbable) = world.get_mut::<Grabbable>(item) {
        grabbable.holder = None;
    }

    world.trigger(ReleaseEvent { item, hand });
}
