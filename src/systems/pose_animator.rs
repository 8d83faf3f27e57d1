//! Pose application system.
//!
//! Once per visual frame, writes every active pose's recorded bone
//! transforms onto the animator's live bone entities. Bones not present in
//! the active pose are left untouched, and a stopped animator applies
//! nothing, so bones freeze at the last applied transform.
//!
//! # Schedule position
//!
//! Runs **after** grab transitions and any other transform updates of the
//! frame, so a pose triggered this frame is visible this frame and the pose
//! overrides whatever else moved the bones.

use bevy_ecs::prelude::*;

use crate::components::poseanimator::PoseAnimator;
use crate::components::transform::Transform;

/// Hold the active pose on every animator's bones.
pub fn apply_pose_system(
    animators: Query<&PoseAnimator>,
    mut transforms: Query<&mut Transform>,
) {
    for animator in animators.iter() {
        if !animator.is_playing() {
            continue;
        }
        for (bone_name, bone_entity) in animator.bones() {
            let Some(pose) = animator.active_pose(bone_name) else {
                continue;
            };
            let Ok(mut transform) = transforms.get_mut(*bone_entity) else {
                continue;
            };
            transform.translation = pose.position;
            transform.rotation = pose.rotation;
        }
    }
}
