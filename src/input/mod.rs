//! Input domain: key bindings and the held-direction tracker.

mod bindings;
mod state;
mod systems;

pub use bindings::{KeyBindings, key_identifier};
pub use state::{InputState, KeyTransition};

use bevy::prelude::*;

use crate::core::StrollSet;
use crate::input::systems::{read_key_events, release_on_focus_loss, setup_key_bindings};

pub struct InputTrackerPlugin;

impl Plugin for InputTrackerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .init_resource::<KeyBindings>()
            .add_systems(Startup, setup_key_bindings)
            .add_systems(
                Update,
                (release_on_focus_loss, read_key_events)
                    .chain()
                    .in_set(StrollSet::Input),
            );
    }
}
