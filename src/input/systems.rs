//! Input domain: keyboard and focus event sampling.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::content::StageConfig;
use crate::input::{InputState, KeyBindings, KeyTransition, key_identifier};

pub(crate) fn setup_key_bindings(mut commands: Commands, config: Res<StageConfig>) {
    let bindings = KeyBindings::from(&config.keys);
    debug!(
        "Key bindings: left={:?}, right={:?}",
        bindings.left, bindings.right
    );
    commands.insert_resource(bindings);
}

pub(crate) fn read_key_events(
    bindings: Res<KeyBindings>,
    mut keys: MessageReader<KeyboardInput>,
    mut input: ResMut<InputState>,
) {
    for event in keys.read() {
        let Some(key) = key_identifier(&event.logical_key) else {
            continue;
        };
        let transition = match event.state {
            ButtonState::Pressed => KeyTransition::Down,
            ButtonState::Released => KeyTransition::Up,
        };

        if input.apply(&bindings, &key, transition) {
            trace!(
                "Key {:?} {:?}: left={}, right={}",
                key, transition, input.left, input.right
            );
        }
    }
}

/// Releases held directions when the window loses focus, since the
/// matching key-up would never arrive.
pub(crate) fn release_on_focus_loss(
    mut focus: MessageReader<WindowFocused>,
    mut input: ResMut<InputState>,
) {
    let lost_focus = focus.read().fold(false, |lost, event| lost || !event.focused);

    if lost_focus && (input.left || input.right) {
        input.clear();
        debug!("Window lost focus, released held directions");
    }
}
