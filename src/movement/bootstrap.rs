//! Movement domain: resolving the player anchor and tuning from config.

use bevy::prelude::*;

use crate::content::StageConfig;
use crate::core::StageState;
use crate::movement::{MovementState, MovementTuning, Player};
use crate::stage::{PageBox, StageBounds, StageElement, clamp};

pub(crate) fn setup_movement_tuning(mut commands: Commands, config: Res<StageConfig>) {
    let tuning = MovementTuning::from_speed(config.speed).unwrap_or_else(|| {
        let fallback = MovementTuning::default();
        warn!(
            "Speed {} is unusable, moving at {} px/s instead",
            config.speed, fallback.speed
        );
        fallback
    });
    commands.insert_resource(tuning);
}

/// Attach the player components to the configured element, or disable the
/// stage when no element carries that name.
pub(crate) fn bootstrap_player(
    mut commands: Commands,
    config: Res<StageConfig>,
    bounds: Res<StageBounds>,
    elements: Query<(Entity, &Name, &PageBox), With<StageElement>>,
    mut next_state: ResMut<NextState<StageState>>,
) {
    let Some((entity, _, page_box)) = elements
        .iter()
        .find(|(_, name, _)| name.as_str() == config.player)
    else {
        error!(
            "Player element '{}' not found, controls will not start",
            config.player
        );
        next_state.set(StageState::Disabled);
        return;
    };

    let max_x = bounds.max_x(page_box.width);
    let x = clamp(page_box.x, 0.0, max_x);
    if x != page_box.x {
        warn!(
            "Player starts outside the container at x={}, clamped to {}",
            page_box.x, x
        );
    }

    commands.entity(entity).insert((
        Player,
        MovementState {
            x,
            ..default()
        },
        PageBox { x, ..*page_box },
    ));

    info!(
        "Player '{}' ready: x={}, width={}, max_x={}",
        config.player, x, page_box.width, max_x
    );
    next_state.set(StageState::Running);
}
