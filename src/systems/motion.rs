//! Physics-tick velocity sampling.
//!
//! Advances every [`MotionTracker`] from the entity's current world
//! position, once per physics tick. The physics tick delta is the
//! denominator; running this on the visual frame would skew release
//! velocities whenever the two rates differ.
//!
//! Expects [`propagate_transforms`](super::propagate_transforms::propagate_transforms)
//! to have run this tick so [`GlobalTransform`] is current.

use bevy_ecs::prelude::*;

use crate::components::globaltransform::GlobalTransform;
use crate::components::motion::MotionTracker;
use crate::resources::time::PhysicsTime;

/// Sample world-position deltas into velocities.
pub fn sample_motion_system(
    mut trackers: Query<(&GlobalTransform, &mut MotionTracker)>,
    time: Res<PhysicsTime>,
) {
    for (global, mut tracker) in trackers.iter_mut() {
        tracker.sample(global.translation, time.delta);
    }
}
