//! Presentation domain: visuals for the flipped, walking and popped flags.

mod systems;
#[cfg(test)]
mod tests;

pub use systems::{POP_SCALE, popped_tint};

use bevy::prelude::*;

use crate::core::{StageState, StrollSet};
use crate::presentation::systems::{
    animate_walking, apply_popped_visuals, settle_stopped_walkers, spawn_facing_marker,
    update_facing_marker,
};

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(StageState::Running), spawn_facing_marker)
            .add_systems(
                Update,
                (
                    update_facing_marker,
                    animate_walking,
                    settle_stopped_walkers,
                    apply_popped_visuals,
                )
                    .in_set(StrollSet::Presentation),
            );
    }
}
