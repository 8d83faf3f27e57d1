//! VR hand-interaction core.
//!
//! Grab/release state machine for hand-held objects, static hand-pose
//! capture/playback, and the ECS systems tying them to a host engine's
//! visual and physics ticks. The host injects a continuous grab scalar and
//! enter/exit contact messages per hand; everything else happens through
//! the schedules in [`systems`].

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
