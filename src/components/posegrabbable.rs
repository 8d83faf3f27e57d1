//! Pose grabbable state.
//!
//! A pose grabbable carries one recorded [`HandPose`] per handedness and a
//! grip anchor. When grabbed, the matching pose is played on the holder's
//! [`PoseAnimator`](super::poseanimator::PoseAnimator) and the object is
//! aligned so that its anchor coincides with the hand origin.
//!
//! The anchor is the pose's local offset from the object, as authored.
//! Parenting the object to the hand with local transform `anchor⁻¹` puts
//! the anchor exactly at the hand origin, so no intermediate reparenting
//! step is needed to line the two up.
//!
//! A missing side store, a holder without a pose animator, or unknown
//! handedness all skip the pose behavior; the grab itself still succeeds.

use bevy_ecs::prelude::{Component, Entity};

use super::handpose::HandPose;
use super::transform::Transform;

/// Per-handedness poses and grip-anchor alignment for a grabbable.
#[derive(Component, Debug, Default)]
pub struct PoseGrabbable {
    /// Pose played when grabbed by a left hand.
    pub pose_left: Option<HandPose>,
    /// Pose played when grabbed by a right hand.
    pub pose_right: Option<HandPose>,
    /// Local offset of the grip anchor relative to this object.
    pub anchor: Transform,
    /// The animator currently driven by this object, cleared on release.
    pub driven_animator: Option<Entity>,
}

impl PoseGrabbable {
    pub fn new(pose_left: HandPose, pose_right: HandPose) -> Self {
        Self {
            pose_left: Some(pose_left),
            pose_right: Some(pose_right),
            anchor: Transform::IDENTITY,
            driven_animator: None,
        }
    }

    pub fn with_anchor(mut self, anchor: Transform) -> Self {
        self.anchor = anchor;
        self
    }
}
