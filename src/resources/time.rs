//! Visual-frame and physics-tick time resources.
//!
//! The host engine drives two ticks at possibly different rates: the visual
//! frame (pose application) and the physics tick (velocity sampling). They
//! are kept as separate resources so the physics tick duration stays the
//! velocity denominator even when the rates differ.

use bevy_ecs::prelude::Resource;

/// Time of the visual frame tick.
#[derive(Resource, Clone, Copy, Default)]
pub struct VisualTime {
    pub elapsed: f32,
    pub delta: f32,
}

/// Time of the fixed physics tick.
#[derive(Resource, Clone, Copy, Default)]
pub struct PhysicsTime {
    pub elapsed: f32,
    pub delta: f32,
}
