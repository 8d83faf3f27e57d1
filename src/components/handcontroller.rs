//! Hand controller component.
//!
//! The orchestrating side of the grab interaction: tracks which grabbables
//! the hand is currently touching (in touch order), which object it holds,
//! and the digital state derived from the continuous grab input. The actual
//! transition logic lives in
//! [`hand_input_system`](crate::systems::hand_input::hand_input_system) and
//! the canonical protocol in [`crate::systems::grab`].

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// Which hand a controller belongs to.
///
/// `Unknown` hands can still grab; only pose selection is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    #[default]
    Unknown,
    Left,
    Right,
}

/// State of one grabbing hand.
#[derive(Component, Debug)]
pub struct HandController {
    /// Left or right hand, for pose selection.
    pub handedness: Handedness,
    /// Grab input value at or above this counts as pressing.
    pub grab_threshold: f32,
    /// Digital grab state sampled last tick.
    pub pressing: bool,
    /// Grabbables currently touching this hand, in touch order.
    pub hovering: SmallVec<[Entity; 8]>,
    /// The object this hand currently holds.
    ///
    /// Written only by the grab/release protocol.
    pub held: Option<Entity>,
}

impl Default for HandController {
    fn default() -> Self {
        Self::new(Handedness::Unknown)
    }
}

impl HandController {
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            grab_threshold: 0.5,
            pressing: false,
            hovering: SmallVec::new(),
            held: None,
        }
    }

    pub fn with_grab_threshold(mut self, threshold: f32) -> Self {
        self.grab_threshold = threshold;
        self
    }

    /// Record that `entity` started touching this hand. Duplicates are
    /// ignored so the touch order stays stable.
    pub fn touch(&mut self, entity: Entity) {
        if !self.hovering.contains(&entity) {
            self.hovering.push(entity);
        }
    }

    /// Record that `entity` stopped touching this hand.
    pub fn untouch(&mut self, entity: Entity) {
        self.hovering.retain(|e| *e != entity);
    }

    /// The most recently touched grabbable, if any.
    pub fn last_touched(&self) -> Option<Entity> {
        self.hovering.last().copied()
    }
}

/// Continuous grab input in `0..=1`, written by the device layer.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct GrabSignal {
    pub value: f32,
}

impl GrabSignal {
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }
}
