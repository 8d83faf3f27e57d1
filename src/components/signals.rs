// Per-entity scalar signals for cross-system communication.
//
// The hand input system mirrors the sampled grab input into the hand
// entity's "grab" scalar so a hand-model animation layer can blend the
// open/closed hand without reading input itself.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

/// Scalar signal name used for the grab input amount.
pub const GRAB_SIGNAL: &str = "grab";

#[derive(Debug, Clone, Component, Default)]
pub struct Signals {
    scalars: FxHashMap<String, f32>,
}

impl Signals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }

    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }

    pub fn scalars(&self) -> &FxHashMap<String, f32> {
        &self.scalars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_scalar() {
        let mut signals = Signals::default();
        signals.set_scalar(GRAB_SIGNAL, 0.75);
        assert_eq!(signals.get_scalar(GRAB_SIGNAL), Some(0.75));
        assert_eq!(signals.get_scalar("missing"), None);
    }

    #[test]
    fn set_overwrites() {
        let mut signals = Signals::default();
        signals.set_scalar(GRAB_SIGNAL, 0.2);
        signals.set_scalar(GRAB_SIGNAL, 0.9);
        assert_eq!(signals.get_scalar(GRAB_SIGNAL), Some(0.9));
    }
}
