//! Movement domain: player motion driven by the input tracker.

mod bootstrap;
mod components;
mod resources;
mod step;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, MovementState, Player, Walking};
pub use resources::MovementTuning;
pub use step::{MotionEffect, advance};

use bevy::prelude::*;

use crate::core::StrollSet;
use crate::movement::bootstrap::{bootstrap_player, setup_movement_tuning};
use crate::movement::systems::apply_motion;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(Startup, setup_movement_tuning)
            .add_systems(PostStartup, bootstrap_player)
            .add_systems(Update, apply_motion.in_set(StrollSet::Motion));
    }
}
