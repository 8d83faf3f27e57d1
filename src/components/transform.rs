use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Local translation and rotation of an entity.
///
/// When the entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent,
/// the values are relative to that parent; otherwise they are world-space.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation,
        }
    }

    /// Compose `self` (parent) with a child-local transform.
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Transform {
            translation: self.translation + self.rotation * child.translation,
            rotation: self.rotation * child.rotation,
        }
    }

    /// Transform a point from local space into this transform's space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * point
    }

    /// The inverse transform, such that `t.mul_transform(&t.inverse())`
    /// is the identity.
    pub fn inverse(&self) -> Transform {
        let inv_rot = self.rotation.inverse();
        Transform {
            translation: inv_rot * -self.translation,
            rotation: inv_rot,
        }
    }
}
