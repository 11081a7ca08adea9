//! Input domain: held-direction flags.

use bevy::prelude::*;

use super::KeyBindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Down,
    Up,
}

/// Which directions are currently held. Both may be held at once.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Fold one key transition into the flags. A key bound to both
    /// directions drives both. Returns whether the key was bound at all.
    pub fn apply(&mut self, bindings: &KeyBindings, key: &str, transition: KeyTransition) -> bool {
        let held = transition == KeyTransition::Down;
        let mut matched = false;

        if bindings.is_left(key) {
            self.left = held;
            matched = true;
        }
        if bindings.is_right(key) {
            self.right = held;
            matched = true;
        }

        matched
    }

    /// Net horizontal input in {-1, 0, 1}.
    pub fn direction(&self) -> i8 {
        i8::from(self.right) - i8::from(self.left)
    }

    pub fn clear(&mut self) {
        self.left = false;
        self.right = false;
    }
}
