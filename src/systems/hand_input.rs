//! Grab input sampling and threshold transitions.
//!
//! Each tick the device layer has already written the continuous grab
//! scalar into every hand's [`GrabSignal`]. This system detects threshold
//! crossings: a rising edge (was below, now at/above) grabs the most
//! recently touched valid grabbable, a falling edge releases. The sampled
//! scalar is also mirrored into the hand's [`Signals`] under
//! [`GRAB_SIGNAL`] for the hand-model animation layer.
//!
//! This is an exclusive system because a grab transition touches both ends
//! of the hand/object relationship plus the scene graph; all mutation goes
//! through [`crate::systems::grab`].

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::grabbable::Grabbable;
use crate::components::handcontroller::{GrabSignal, HandController};
use crate::components::signals::{GRAB_SIGNAL, Signals};
use crate::systems::grab::{grab, release};

/// Sample every hand's grab signal and run grab/release transitions.
pub fn hand_input_system(world: &mut World) {
    let mut samples: Vec<(Entity, f32)> = Vec::new();
    let mut hands = world.query::<(Entity, &HandController, &GrabSignal)>();
    for (entity, _, signal) in hands.iter(world) {
        samples.push((entity, signal.value));
    }

    for (hand, value) in samples {
        let Some(controller) = world.get::<HandController>(hand) else {
            continue;
        };
        let threshold = controller.grab_threshold;
        let pressing = controller.pressing;

        if !pressing && value >= threshold {
            if let Some(mut controller) = world.get_mut::<HandController>(hand) {
                controller.pressing = true;
            }
            grab_touching_object(world, hand);
        } else if pressing && value < threshold {
            if let Some(mut controller) = world.get_mut::<HandController>(hand) {
                controller.pressing = false;
            }
            release(world, hand);
        }

        if let Some(mut signals) = world.get_mut::<Signals>(hand) {
            signals.set_scalar(GRAB_SIGNAL, value);
        }
    }
}

/// Grab the most recently touched hovered entity that is still valid.
///
/// Entries that were despawned, lost their grabbable capability, or were
/// disabled since they were touched are skipped; despawned entries are also
/// pruned from the hovering list. When nothing valid remains the attempt is
/// silently dropped.
pub fn grab_touching_object(world: &mut World, hand: Entity) {
    let Some(controller) = world.get::<HandController>(hand) else {
        return;
    };
    let hovering: Vec<Entity> = controller.hovering.iter().copied().collect();

    let mut stale: Vec<Entity> = Vec::new();
    let mut target: Option<Entity> = None;
    for candidate in hovering.iter().rev() {
        if world.get_entity(*candidate).is_err() {
            stale.push(*candidate);
            continue;
        }
        if world.get::<Grabbable>(*candidate).is_none()
            || world.get::<Disabled>(*candidate).is_some()
        {
            debug!("skipping invalid grab candidate {candidate:?}");
            continue;
        }
        target = Some(*candidate);
        break;
    }

    if !stale.is_empty() {
        if let Some(mut controller) = world.get_mut::<HandController>(hand) {
            controller.hovering.retain(|e| !stale.contains(e));
        }
    }

    if let Some(item) = target {
        grab(world, hand, item);
    }
}
