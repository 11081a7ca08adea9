//! Movement domain: tests for the motion step and player bootstrap.

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::WindowFocused;
use std::time::Duration;

use super::{Facing, MotionEffect, MovementState, MovementTuning, Player, Walking, advance};
use crate::content::{ElementDef, StageConfig};
use crate::input::InputState;
use crate::core::StageState;
use crate::stage::PageBox;
use crate::testing::{element, small_stage, stage_app};

const SPEED: f32 = 300.0;
const MAX_X: f32 = 350.0; // 400 container - 50 entity

fn at(x: f32) -> MovementState {
    MovementState {
        x,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Position and clamping
// -----------------------------------------------------------------------------

#[test]
fn test_moves_right_without_clamping() {
    let outcome = advance(at(0.0), 1, SPEED, MAX_X, 0.5);
    assert_eq!(outcome.state.x, 150.0);
    assert!(outcome.effects.contains(&MotionEffect::SetLeft(150.0)));
}

#[test]
fn test_clamps_to_right_edge() {
    let outcome = advance(at(380.0), 1, SPEED, MAX_X, 0.5);
    assert_eq!(outcome.state.x, 350.0);
}

#[test]
fn test_clamps_to_left_edge() {
    let outcome = advance(at(20.0), -1, SPEED, MAX_X, 0.5);
    assert_eq!(outcome.state.x, 0.0);
}

#[test]
fn test_idle_frame_keeps_position() {
    let outcome = advance(at(123.0), 0, SPEED, MAX_X, 0.5);
    assert_eq!(outcome.state.x, 123.0);
    assert!(
        !outcome
            .effects
            .iter()
            .any(|e| matches!(e, MotionEffect::SetLeft(_)))
    );
}

#[test]
fn test_position_stays_in_bounds_for_any_sequence() {
    let dts = [0.0, 0.016, 0.033, 0.5, 1.7, 0.001, 3.0, 0.25];
    let directions = [1, 1, -1, 0, 1, -1, -1, 0, 1, 1, 1];
    let mut state = at(10.0);

    for step in 0..200 {
        let dt = dts[step % dts.len()];
        let direction = directions[(step * 7) % directions.len()];
        state = advance(state, direction, SPEED, MAX_X, dt).state;
        assert!(
            (0.0..=MAX_X).contains(&state.x),
            "x={} out of bounds at step {}",
            state.x,
            step
        );
    }
}

#[test]
fn test_tuning_rejects_unusable_speeds() {
    assert_eq!(MovementTuning::from_speed(120.0).map(|t| t.speed), Some(120.0));
    assert!(MovementTuning::from_speed(0.0).is_none());
    assert!(MovementTuning::from_speed(-300.0).is_none());
    assert!(MovementTuning::from_speed(f32::NAN).is_none());
    assert!(MovementTuning::from_speed(f32::INFINITY).is_none());
}

#[test]
fn test_zero_width_range_pins_position() {
    let outcome = advance(at(0.0), 1, SPEED, 0.0, 1.0);
    assert_eq!(outcome.state.x, 0.0);
}

// -----------------------------------------------------------------------------
// Walking and facing flags
// -----------------------------------------------------------------------------

#[test]
fn test_walking_iff_direction_nonzero() {
    let moving = advance(at(100.0), -1, SPEED, MAX_X, 0.1).state;
    assert!(moving.walking);

    let stopped = advance(moving, 0, SPEED, MAX_X, 0.1).state;
    assert!(!stopped.walking);

    let moving_again = advance(stopped, 1, SPEED, MAX_X, 0.1).state;
    assert!(moving_again.walking);
}

#[test]
fn test_walking_effect_only_on_change() {
    let first = advance(at(100.0), 1, SPEED, MAX_X, 0.1);
    assert!(first.effects.contains(&MotionEffect::SetWalking(true)));

    let second = advance(first.state, 1, SPEED, MAX_X, 0.1);
    assert!(
        !second
            .effects
            .iter()
            .any(|e| matches!(e, MotionEffect::SetWalking(_)))
    );

    let stop = advance(second.state, 0, SPEED, MAX_X, 0.1);
    assert_eq!(stop.effects, vec![MotionEffect::SetWalking(false)]);
}

#[test]
fn test_facing_follows_last_direction() {
    let left = advance(at(100.0), -1, SPEED, MAX_X, 0.1);
    assert_eq!(left.state.facing, Facing::Left);
    assert!(left.effects.contains(&MotionEffect::SetFlipped(true)));

    let idle = advance(left.state, 0, SPEED, MAX_X, 0.1);
    assert_eq!(idle.state.facing, Facing::Left);

    let right = advance(idle.state, 1, SPEED, MAX_X, 0.1);
    assert_eq!(right.state.facing, Facing::Right);
    assert!(right.effects.contains(&MotionEffect::SetFlipped(false)));
}

#[test]
fn test_facing_updates_even_when_pinned_at_wall() {
    let pinned = advance(at(0.0), -1, SPEED, MAX_X, 0.1);
    assert_eq!(pinned.state.x, 0.0);
    assert_eq!(pinned.state.facing, Facing::Left);
    assert!(pinned.state.walking);
}

// -----------------------------------------------------------------------------
// App-level behaviour
// -----------------------------------------------------------------------------

fn key_event(key: Key, key_code: KeyCode, state: ButtonState) -> KeyboardInput {
    KeyboardInput {
        key_code,
        logical_key: key,
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    }
}

fn press_right(app: &mut App) {
    app.world_mut().write_message(key_event(
        Key::ArrowRight,
        KeyCode::ArrowRight,
        ButtonState::Pressed,
    ));
}

fn player_x(app: &mut App) -> f32 {
    let player = element(app, "player");
    app.world().get::<PageBox>(player).unwrap().x
}

/// Holds the right arrow for five 100ms frames and returns the final x.
fn x_after_holding_right(config: StageConfig) -> f32 {
    let mut app = stage_app(config);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.update();

    press_right(&mut app);
    for _ in 0..5 {
        app.update();
    }
    player_x(&mut app)
}

#[test]
fn test_bootstrap_marks_player_and_runs() {
    let mut app = stage_app(small_stage());
    app.update();

    let player = element(&mut app, "player");
    assert!(app.world().get::<Player>(player).is_some());
    assert_eq!(
        app.world().get::<MovementState>(player),
        Some(&MovementState::default())
    );
    assert_eq!(
        app.world().resource::<State<StageState>>().get(),
        &StageState::Running
    );
}

#[test]
fn test_missing_player_disables_stage() {
    let mut config = small_stage();
    config.player = "hero".to_string();
    let mut app = stage_app(config);
    app.update();
    app.update();

    assert_eq!(
        app.world().resource::<State<StageState>>().get(),
        &StageState::Disabled
    );
    let mut players = app.world_mut().query_filtered::<Entity, With<Player>>();
    assert_eq!(players.iter(app.world()).count(), 0);
}

#[test]
fn test_player_starting_outside_is_clamped() {
    let mut config = small_stage();
    config.elements[0] = ElementDef::new("player", 390.0, 0.0, 50.0, 50.0);
    let mut app = stage_app(config);
    app.update();

    let player = element(&mut app, "player");
    assert_eq!(app.world().get::<MovementState>(player).unwrap().x, 350.0);
    assert_eq!(app.world().get::<PageBox>(player).unwrap().x, 350.0);
}

#[test]
fn test_held_key_moves_player_each_frame() {
    let mut app = stage_app(small_stage());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.update();

    app.world_mut().write_message(key_event(
        Key::ArrowRight,
        KeyCode::ArrowRight,
        ButtonState::Pressed,
    ));
    for _ in 0..5 {
        app.update();
    }

    let player = element(&mut app, "player");
    let x = app.world().get::<PageBox>(player).unwrap().x;
    assert!((x - 150.0).abs() < 1e-3, "x={x}");
    assert!(app.world().get::<Walking>(player).is_some());

    app.world_mut().write_message(key_event(
        Key::ArrowRight,
        KeyCode::ArrowRight,
        ButtonState::Released,
    ));
    app.update();
    app.update();

    let x_after = app.world().get::<PageBox>(player).unwrap().x;
    assert!((x_after - x).abs() < 1e-3);
    assert!(app.world().get::<Walking>(player).is_none());
}

#[test]
fn test_letter_alias_moves_left_and_flips() {
    let mut app = stage_app(small_stage());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.update();

    let player = element(&mut app, "player");
    app.world_mut().get_mut::<PageBox>(player).unwrap().x = 200.0;
    app.world_mut().get_mut::<MovementState>(player).unwrap().x = 200.0;

    app.world_mut().write_message(key_event(
        Key::Character("a".into()),
        KeyCode::KeyA,
        ButtonState::Pressed,
    ));
    app.update();
    app.update();

    let state = *app.world().get::<MovementState>(player).unwrap();
    assert!(state.x < 200.0);
    assert_eq!(state.facing, Facing::Left);
    assert!(app.world().get::<Sprite>(player).unwrap().flip_x);
}

#[test]
fn test_focus_loss_releases_held_keys() {
    let mut app = stage_app(small_stage());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.update();

    press_right(&mut app);
    app.update();
    app.update();
    assert!(app.world().resource::<InputState>().right);
    let x = player_x(&mut app);
    assert!(x > 0.0);

    app.world_mut().write_message(WindowFocused {
        window: Entity::PLACEHOLDER,
        focused: false,
    });
    app.update();
    assert_eq!(*app.world().resource::<InputState>(), InputState::default());

    app.update();
    app.update();
    assert_eq!(player_x(&mut app), x);
    let player = element(&mut app, "player");
    assert!(app.world().get::<Walking>(player).is_none());
}

#[test]
fn test_unusable_speed_falls_back_to_default() {
    for speed in [f32::NAN, -300.0, 0.0] {
        let mut config = small_stage();
        config.speed = speed;
        let x = x_after_holding_right(config);
        assert!((x - 150.0).abs() < 1e-3, "speed={speed}: x={x}");
    }
}
