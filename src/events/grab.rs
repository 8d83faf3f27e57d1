//! Grab and release notifications.
//!
//! The canonical grab/release protocol in [`crate::systems::grab`] triggers
//! these events after each settled transition. Observers can subscribe to
//! react in a decoupled manner (haptics, sound, highlighting, etc.); the
//! protocol's correctness does not depend on listener count or identity.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Event fired when a hand finishes grabbing an object.
#[derive(Event, Debug, Clone, Copy)]
pub struct GrabEvent {
    /// The grabbed object.
    pub item: Entity,
    /// The hand now holding it.
    pub hand: Entity,
}

/// Event fired when an object is released.
///
/// `hand` is the holder the object was released from. It is `None` when the
/// holder entity no longer existed at release time.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReleaseEvent {
    pub item: Entity,
    pub hand: Option<Entity>,
}

/// Example observer that logs grab transitions.
///
/// Register with `world.add_observer(observe_log_grab)`; replace with
/// game-specific reactions as needed.
pub fn observe_log_grab(trigger: On<GrabEvent>) {
    let event = trigger.event();
    debug!("grabbed {:?} with {:?}", event.item, event.hand);
}

/// Example observer that logs release transitions.
pub fn observe_log_release(trigger: On<ReleaseEvent>) {
    let event = trigger.event();
    debug!("released {:?} from {:?}", event.item, event.hand);
}
