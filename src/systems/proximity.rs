//! Proximity tracking from contact messages.
//!
//! Consumes the [`ContactMessage`]s the host engine writes for hand trigger
//! volumes and keeps each hand's hovering list in touch order. Entities
//! without a [`Grabbable`] capability are ignored on enter; exits remove the
//! entry without reordering the rest.

use bevy_ecs::prelude::*;

use crate::components::grabbable::Grabbable;
use crate::components::handcontroller::HandController;
use crate::events::contact::{ContactMessage, ContactPhase};

/// Advance the contact double-buffer.
///
/// Runs once per visual frame ahead of [`proximity_system`], so messages
/// written since the previous frame stay readable for exactly one frame and
/// the buffer cannot grow without bound over a long session.
pub fn update_contact_messages(mut contacts: ResMut<Messages<ContactMessage>>) {
    contacts.update();
}

/// Apply queued contact messages to the hands' hovering lists.
pub fn proximity_system(
    mut contacts: MessageReader<ContactMessage>,
    mut hands: Query<&mut HandController>,
    grabbables: Query<(), With<Grabbable>>,
) {
    for contact in contacts.read() {
        let Ok(mut controller) = hands.get_mut(contact.hand) else {
            continue;
        };
        match contact.phase {
            ContactPhase::Enter => {
                if grabbables.get(contact.other).is_ok() {
                    controller.touch(contact.other);
                }
            }
            ContactPhase::Exit => {
                controller.untouch(contact.other);
            }
        }
    }
}
