//! Base grabbable capability.
//!
//! An entity with a [`Grabbable`] component can be exclusively held by one
//! hand controller at a time. The component only stores the holder side of
//! the bidirectional hand/object relationship; every transition goes through
//! the canonical protocol in [`crate::systems::grab`], which keeps the hand's
//! `held` reference and this `holder` reference consistent and fires
//! [`GrabEvent`](crate::events::grab::GrabEvent) /
//! [`ReleaseEvent`](crate::events::grab::ReleaseEvent).

use bevy_ecs::prelude::{Component, Entity};

/// Marks an entity as grabbable and tracks who currently holds it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Grabbable {
    /// The hand controller entity holding this object, if any.
    ///
    /// Written only by the grab/release protocol.
    pub holder: Option<Entity>,
}

impl Grabbable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some hand currently holds this object.
    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    #[test]
    fn starts_free() {
        let grabbable = Grabbable::new();
        assert!(!grabbable.is_held());
        assert!(grabbable.holder.is_none());
    }

    #[test]
    fn held_when_holder_set() {
        let mut world = World::new();
        let hand = world.spawn_empty().id();
        let grabbable = Grabbable {
            holder: Some(hand),
        };
        assert!(grabbable.is_held());
    }
}
