//! Input domain: configurable key bindings and key identifiers.

use bevy::input::keyboard::Key;
use bevy::prelude::*;

use crate::content::KeyBindingsDef;

/// Key identifiers that steer the player, several aliases per direction.
/// Matching is exact string equality.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from(&KeyBindingsDef::default())
    }
}

impl From<&KeyBindingsDef> for KeyBindings {
    fn from(def: &KeyBindingsDef) -> Self {
        Self {
            left: def.left.clone(),
            right: def.right.clone(),
        }
    }
}

impl KeyBindings {
    pub fn is_left(&self, key: &str) -> bool {
        self.left.iter().any(|k| k == key)
    }

    pub fn is_right(&self, key: &str) -> bool {
        self.right.iter().any(|k| k == key)
    }
}

/// Web-style identifier for a logical key: the typed text for character
/// keys, the `KeyboardEvent.key` name ("ArrowLeft", "Enter") for the
/// named keys a binding can use. Every other key has no identifier.
pub fn key_identifier(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_string()),
        named => named_key(named).map(str::to_string),
    }
}

fn named_key(key: &Key) -> Option<&'static str> {
    let name = match key {
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::ArrowUp => "ArrowUp",
        Key::ArrowDown => "ArrowDown",
        Key::Space => "Space",
        Key::Enter => "Enter",
        Key::Tab => "Tab",
        Key::Escape => "Escape",
        Key::Backspace => "Backspace",
        Key::Delete => "Delete",
        Key::Insert => "Insert",
        Key::Home => "Home",
        Key::End => "End",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Shift => "Shift",
        Key::Control => "Control",
        Key::Alt => "Alt",
        Key::Meta => "Meta",
        _ => return None,
    };
    Some(name)
}
