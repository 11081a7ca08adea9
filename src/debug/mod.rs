//! Debug overlays for tuning the stage.
//!
//! Features:
//! - F3: text readout of input, motion and hotspot state
//! - F4: outlines of every stage element (player, triggers, targets)

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use systems::format_readout;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_element_bounds, handle_debug_hotkeys, record_last_toggle, setup_debug_info_overlay,
    update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, setup_debug_info_overlay)
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    record_last_toggle,
                    update_debug_info_overlay,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                draw_element_bounds.run_if(|state: Res<DebugState>| state.show_bounds),
            );
    }
}
