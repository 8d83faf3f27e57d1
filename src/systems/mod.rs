//! Interaction systems.
//!
//! This module groups the ECS systems that advance the grab/pose
//! interaction, plus the canonical grab/release protocol they call into.
//!
//! Submodules overview
//! - [`grab`] – the canonical grab/release protocol and re-parenting helpers
//! - [`hand_input`] – threshold-crossing detection on the grab input scalar
//! - [`motion`] – physics-tick velocity sampling for hands and held objects
//! - [`pose_animator`] – apply the active pose to live hand bones
//! - [`propagate_transforms`] – compose local transforms into world space
//! - [`proximity`] – maintain each hand's hovering list from contact messages
//! - [`time`] – update the visual and physics clocks

use bevy_ecs::prelude::{IntoScheduleConfigs, Schedule};

pub mod grab;
pub mod hand_input;
pub mod motion;
pub mod pose_animator;
pub mod propagate_transforms;
pub mod proximity;
pub mod time;

/// Build the per-visual-frame schedule.
///
/// Ordering is load-bearing: the contact buffer is aged before proximity
/// tracking, input sampling runs after proximity tracking, grab transitions
/// before pose application, and propagation last, so a pose triggered this
/// frame is visible this frame. The schedule pumps the contact buffer
/// itself; the host only writes [`ContactMessage`](crate::events::contact::ContactMessage)s.
pub fn visual_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            proximity::update_contact_messages,
            proximity::proximity_system,
            hand_input::hand_input_system,
            pose_animator::apply_pose_system,
            propagate_transforms::propagate_transforms,
        )
            .chain(),
    );
    schedule
}

/// Build the per-physics-tick schedule.
///
/// Propagation runs first so motion sampling sees current world positions;
/// the physics delta is the velocity denominator.
pub fn physics_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            propagate_transforms::propagate_transforms,
            motion::sample_motion_system,
        )
            .chain(),
    );
    schedule
}
