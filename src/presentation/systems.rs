//! Presentation domain: sprite tint, scale and facing marker systems.

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::hotspots::Popped;
use crate::movement::{Facing, MovementState, Player, Walking};
use crate::stage::{ElementColor, PageBox};

/// Scale applied to a popped target.
pub const POP_SCALE: f32 = 1.12;

const BOB_AMPLITUDE: f32 = 0.06;
const BOB_STEPS_PER_SEC: f32 = 3.0;
const MARKER_SIZE: f32 = 8.0;

/// Small square on the player's leading side, so facing is visible on an
/// untextured sprite.
#[derive(Component, Debug)]
pub struct FacingMarker {
    /// Horizontal distance from the player's center.
    pub offset: f32,
}

/// Color of a popped target: its base color pulled toward white.
pub fn popped_tint(base: Color) -> Color {
    let srgba = base.to_srgba();
    let lift = |c: f32| c + (1.0 - c) * 0.35;
    Color::srgba(
        lift(srgba.red),
        lift(srgba.green),
        lift(srgba.blue),
        srgba.alpha,
    )
}

pub(crate) fn spawn_facing_marker(
    mut commands: Commands,
    players: Query<(Entity, &PageBox, &MovementState), With<Player>>,
) {
    for (entity, page_box, state) in &players {
        let offset = page_box.width / 4.0;
        let x = match state.facing {
            Facing::Right => offset,
            Facing::Left => -offset,
        };
        commands.entity(entity).with_child((
            FacingMarker { offset },
            Sprite::from_color(Color::srgb(0.1, 0.1, 0.12), Vec2::splat(MARKER_SIZE)),
            Transform::from_xyz(x, page_box.height / 4.0, 0.1),
        ));
    }
}

pub(crate) fn update_facing_marker(
    players: Query<(&MovementState, &Children), (With<Player>, Changed<MovementState>)>,
    mut markers: Query<(&FacingMarker, &mut Transform)>,
) {
    for (state, children) in &players {
        let mut children = markers.iter_many_mut(children);
        while let Some((marker, mut transform)) = children.fetch_next() {
            transform.translation.x = match state.facing {
                Facing::Right => marker.offset,
                Facing::Left => -marker.offset,
            };
        }
    }
}

/// Vertical squash while walking.
pub(crate) fn animate_walking(
    time: Res<Time>,
    mut walkers: Query<&mut Transform, (With<Walking>, With<Player>)>,
) {
    let phase = time.elapsed_secs() * BOB_STEPS_PER_SEC * TAU;
    for mut transform in &mut walkers {
        transform.scale.y = 1.0 - BOB_AMPLITUDE * phase.sin().abs();
    }
}

pub(crate) fn settle_stopped_walkers(
    mut stopped: RemovedComponents<Walking>,
    mut transforms: Query<&mut Transform>,
) {
    for entity in stopped.read() {
        if let Ok(mut transform) = transforms.get_mut(entity) {
            transform.scale.y = 1.0;
        }
    }
}

pub(crate) fn apply_popped_visuals(
    mut targets: Query<(&Popped, &ElementColor, &mut Sprite, &mut Transform), Changed<Popped>>,
) {
    for (popped, base, mut sprite, mut transform) in &mut targets {
        if popped.0 {
            sprite.color = popped_tint(base.0);
            transform.scale = Vec3::splat(POP_SCALE);
        } else {
            sprite.color = base.0;
            transform.scale = Vec3::ONE;
        }
    }
}
