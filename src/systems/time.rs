//! Time update functions.
//!
//! The host engine calls these once per corresponding tick with the
//! unscaled delta in seconds, before running the matching schedule.
use bevy_ecs::prelude::*;

use crate::resources::time::{PhysicsTime, VisualTime};

/// Advance the visual-frame clock.
pub fn update_visual_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<VisualTime>();
    time.elapsed += dt;
    time.delta = dt;
}

/// Advance the physics-tick clock.
pub fn update_physics_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<PhysicsTime>();
    time.elapsed += dt;
    time.delta = dt;
}
