//! Computed world-space transform for entities in a hierarchy.
//!
//! When an entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent, its
//! [`Transform`](super::transform::Transform) is interpreted as local to the
//! parent. The
//! [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system composes the ancestor chain and stores the world-space result here.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};

use super::transform::Transform;

/// Computed world-space transform.
///
/// Managed by the transform propagation system. For root entities it mirrors
/// the local [`Transform`]; for children it contains the composed result of
/// the full ancestor chain.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobalTransform {
    /// World-space translation.
    pub translation: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
}

impl GlobalTransform {
    pub fn as_transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
        }
    }

    pub fn from_transform(t: &Transform) -> Self {
        Self {
            translation: t.translation,
            rotation: t.rotation,
        }
    }
}
