//! Pose playback component for a hand skeleton.
//!
//! A [`PoseAnimator`] sits on the hand entity and owns the list of live bone
//! entities it may drive. While a pose is active, the
//! [`apply_pose_system`](crate::systems::pose_animator::apply_pose_system)
//! writes the recorded local transforms onto matching bones once per visual
//! frame, late in the frame so it overrides other transform updates.
//!
//! Stopping does not restore a rest pose: bones simply freeze at the last
//! applied transform.

use bevy_ecs::prelude::{Component, Entity};
use rustc_hash::FxHashMap;

use super::handpose::{BonePose, HandPose};

/// Drives recorded bone poses onto a live hand skeleton.
#[derive(Component, Debug, Default)]
pub struct PoseAnimator {
    /// Bone name paired with the live bone entity it addresses.
    bones: Vec<(String, Entity)>,
    /// The pose currently being held, empty when no pose is active.
    active: FxHashMap<String, BonePose>,
}

impl PoseAnimator {
    /// Create an animator over the given named bone entities.
    pub fn new(bones: Vec<(String, Entity)>) -> Self {
        Self {
            bones,
            active: FxHashMap::default(),
        }
    }

    /// Replace the active pose with a copy of `pose`. Idempotent for the
    /// same pose.
    pub fn play_pose(&mut self, pose: &HandPose) {
        self.active = pose.to_map();
    }

    /// Clear the active pose. Bones keep their last applied transform.
    pub fn stop(&mut self) {
        self.active.clear();
    }

    /// Whether a pose is currently active.
    pub fn is_playing(&self) -> bool {
        !self.active.is_empty()
    }

    /// The bone entities this animator addresses.
    pub fn bones(&self) -> &[(String, Entity)] {
        &self.bones
    }

    /// Active pose entry for `name`, if any.
    pub fn active_pose(&self, name: &str) -> Option<&BonePose> {
        self.active.get(name)
    }
}
