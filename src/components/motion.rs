//! Per-physics-tick motion sampling.
//!
//! [`MotionTracker`] remembers where an entity was on the previous physics
//! tick and derives a velocity from the positional delta. Hands carry one so
//! the release path can throw objects with the hand's current motion; held
//! objects may carry one as well for debugging or game logic.
//!
//! The physics tick duration is the denominator, never the visual frame
//! delta. See [`sample_motion_system`](crate::systems::motion::sample_motion_system).

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Velocity sample derived from world position deltas over physics ticks.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MotionTracker {
    /// World position at the previous physics tick.
    pub last_position: Vec3,
    /// `(position - last_position) / tick_duration` from the last sample.
    pub velocity: Vec3,
    // False until the tracker has an anchor position. A default-constructed
    // tracker on an entity away from the origin would otherwise report a
    // huge velocity on its first sample.
    primed: bool,
}

impl MotionTracker {
    /// Start tracking from a known position with zero velocity.
    pub fn at(position: Vec3) -> Self {
        Self {
            last_position: position,
            velocity: Vec3::ZERO,
            primed: true,
        }
    }

    /// Advance one physics tick. `dt` must be the physics tick duration in
    /// seconds; non-positive values leave the sample unchanged. The first
    /// sample after a default construction only anchors the position.
    pub fn sample(&mut self, position: Vec3, dt: f32) {
        if !self.primed {
            self.last_position = position;
            self.primed = true;
            return;
        }
        if dt > 0.0 {
            self.velocity = (position - self.last_position) / dt;
        }
        self.last_position = position;
    }

    /// Forget accumulated motion and re-anchor at `position`.
    pub fn reset(&mut self, position: Vec3) {
        self.last_position = position;
        self.velocity = Vec3::ZERO;
        self.primed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn sample_derives_velocity() {
        let mut tracker = MotionTracker::at(Vec3::ZERO);
        tracker.sample(Vec3::new(0.2, 0.0, 0.0), 0.02);
        assert!((tracker.velocity.x - 10.0).abs() < EPSILON);
        assert_eq!(tracker.last_position, Vec3::new(0.2, 0.0, 0.0));
    }

    #[test]
    fn zero_dt_keeps_velocity() {
        let mut tracker = MotionTracker::at(Vec3::ZERO);
        tracker.sample(Vec3::new(1.0, 0.0, 0.0), 0.02);
        let v = tracker.velocity;
        tracker.sample(Vec3::new(2.0, 0.0, 0.0), 0.0);
        assert_eq!(tracker.velocity, v);
        // Position still advances so the next valid sample is correct.
        assert_eq!(tracker.last_position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn first_sample_of_default_tracker_anchors_without_spike() {
        let mut tracker = MotionTracker::default();
        tracker.sample(Vec3::new(10.0, 0.0, 0.0), 0.02);
        assert_eq!(tracker.velocity, Vec3::ZERO);
        assert_eq!(tracker.last_position, Vec3::new(10.0, 0.0, 0.0));

        tracker.sample(Vec3::new(10.2, 0.0, 0.0), 0.02);
        assert!((tracker.velocity.x - 10.0).abs() < EPSILON);
    }

    #[test]
    fn reset_clears_velocity() {
        let mut tracker = MotionTracker::at(Vec3::ZERO);
        tracker.sample(Vec3::new(1.0, 1.0, 0.0), 0.01);
        tracker.reset(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(tracker.velocity, Vec3::ZERO);
        assert_eq!(tracker.last_position, Vec3::new(5.0, 0.0, 0.0));
    }
}
