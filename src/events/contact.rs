//! Contact messages from the host engine's proximity layer.
//!
//! The engine integration writes a [`ContactMessage`] whenever a hand's
//! trigger volume starts or stops overlapping another entity. The
//! [`proximity_system`](crate::systems::proximity::proximity_system) consumes
//! them to maintain each hand's hovering list. Messages naming entities
//! without a grabbable capability are ignored.

use bevy_ecs::prelude::*;

/// Whether a contact started or ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Enter,
    Exit,
}

/// One enter/exit contact between a hand and another entity.
#[derive(Message, Debug, Clone, Copy)]
pub struct ContactMessage {
    /// The hand controller entity reporting the contact.
    pub hand: Entity,
    /// The entity touched; may or may not be grabbable.
    pub other: Entity,
    pub phase: ContactPhase,
}

impl ContactMessage {
    pub fn enter(hand: Entity, other: Entity) -> Self {
        Self {
            hand,
            other,
            phase: ContactPhase::Enter,
        }
    }

    pub fn exit(hand: Entity, other: Entity) -> Self {
        Self {
            hand,
            other,
            phase: ContactPhase::Exit,
        }
    }
}
