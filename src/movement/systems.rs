//! Movement domain: applying the motion step to the player.

use bevy::prelude::*;

use crate::input::InputState;
use crate::movement::step::{MotionEffect, advance};
use crate::movement::{MovementState, MovementTuning, Player, Walking};
use crate::stage::{PageBox, StageBounds};

pub(crate) fn apply_motion(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<InputState>,
    tuning: Res<MovementTuning>,
    bounds: Res<StageBounds>,
    mut query: Query<(Entity, &mut MovementState, &mut PageBox, &mut Sprite), With<Player>>,
) {
    let dt = time.delta_secs();
    let direction = input.direction();

    for (entity, mut state, mut page_box, mut sprite) in &mut query {
        let max_x = bounds.max_x(page_box.width);
        let outcome = advance(*state, direction, tuning.speed, max_x, dt);

        for effect in &outcome.effects {
            match *effect {
                MotionEffect::SetLeft(x) => page_box.x = x,
                MotionEffect::SetFlipped(flipped) => sprite.flip_x = flipped,
                MotionEffect::SetWalking(true) => {
                    commands.entity(entity).insert(Walking);
                }
                MotionEffect::SetWalking(false) => {
                    commands.entity(entity).remove::<Walking>();
                }
            }
        }

        state.set_if_neq(outcome.state);
    }
}
