//! Physical grabbable state.
//!
//! Extends [`Grabbable`](super::grabbable::Grabbable) entities that also own
//! a [`PhysicsBody`](super::physicsbody::PhysicsBody): while held, the body
//! is forced kinematic and the entity is re-parented under the hand; on
//! release, the pre-grab kinematic flag and scene-graph parent are restored
//! and, for dynamic bodies, the hand's sampled velocity (scaled by
//! `release_speed_modifier`) becomes the throw velocity.
//!
//! The snapshot fields are captured only on the Free -> Held transition, so
//! an object stolen from hand to hand keeps the values from before the first
//! grab.

use bevy_ecs::prelude::{Component, Entity};

/// Grab state for objects with a physics body.
#[derive(Component, Clone, Copy, Debug)]
pub struct PhysicalGrabbable {
    /// Multiplier applied to the hand velocity when thrown.
    pub release_speed_modifier: f32,
    /// Kinematic flag of the body before it was first grabbed.
    pub was_kinematic: bool,
    /// Scene-graph parent before it was first grabbed.
    pub prev_parent: Option<Entity>,
}

impl Default for PhysicalGrabbable {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicalGrabbable {
    pub fn new() -> Self {
        Self {
            release_speed_modifier: 1.0,
            was_kinematic: false,
            prev_parent: None,
        }
    }

    pub fn with_release_speed_modifier(mut self, modifier: f32) -> Self {
        self.release_speed_modifier = modifier;
        self
    }
}
