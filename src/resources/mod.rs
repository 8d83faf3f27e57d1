//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `posestore` – registry of reusable hand-pose assets keyed by name
//! - `time` – visual-frame and physics-tick time, kept separate
pub mod posestore;
pub mod time;
