//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! participating in hand interaction: hands, grabbables, hand-skeleton bones,
//! and the scene-graph transforms tying them together.
//!
//! Submodules overview:
//! - [`grabbable`] – base capability: exclusively holdable by one hand
//! - [`globaltransform`] – computed world-space transform
//! - [`handcontroller`] – grab input, proximity list, and held object per hand
//! - [`handpose`] – immutable bone-name -> pose store
//! - [`motion`] – per-physics-tick velocity sampling
//! - [`physicalgrabbable`] – kinematic/parent snapshot and throw modifier
//! - [`physicsbody`] – kinematic flag and linear velocity proxy
//! - [`posegrabbable`] – per-handedness poses and grip-anchor alignment
//! - [`poseanimator`] – plays recorded poses onto live hand bones
//! - [`signals`] – per-entity scalar signals for cross-system communication
//! - [`transform`] – local translation and rotation

pub mod globaltransform;
pub mod grabbable;
pub mod handcontroller;
pub mod handpose;
pub mod motion;
pub mod physicalgrabbable;
pub mod physicsbody;
pub mod poseanimator;
pub mod posegrabbable;
pub mod signals;
pub mod transform;
