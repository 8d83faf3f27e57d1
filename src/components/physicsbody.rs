//! Physics-body proxy component.
//!
//! Stands in for the host engine's rigid body: a kinematic flag and a linear
//! velocity, both read and written by the grab protocol. While an object is
//! held the body is forced kinematic; on release the previous flag is
//! restored and, for dynamic bodies, the throw velocity is written here.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Proxy over the engine rigid body the grab systems toggle.
#[derive(Component, Clone, Copy, Debug)]
pub struct PhysicsBody {
    /// When true the body ignores forces and follows its transform.
    pub kinematic: bool,
    /// Linear velocity in world units per second.
    pub velocity: Vec3,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self::dynamic()
    }
}

impl PhysicsBody {
    /// A non-kinematic body at rest.
    pub fn dynamic() -> Self {
        Self {
            kinematic: false,
            velocity: Vec3::ZERO,
        }
    }

    /// A kinematic body at rest.
    pub fn kinematic() -> Self {
        Self {
            kinematic: true,
            velocity: Vec3::ZERO,
        }
    }
}
