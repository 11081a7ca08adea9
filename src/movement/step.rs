//! Movement domain: the per-frame motion step.
//!
//! `advance` is pure: it takes the previous state and the frame inputs and
//! returns the next state plus the presentational changes the frame caused.
//! Systems apply those changes to the ECS.

use crate::movement::{Facing, MovementState};
use crate::stage::clamp;

/// A visible change produced by one motion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEffect {
    /// New left offset; emitted on every moving frame.
    SetLeft(f32),
    /// Walking flag changed.
    SetWalking(bool),
    /// Facing changed; `true` means mirrored (facing left).
    SetFlipped(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub state: MovementState,
    pub effects: Vec<MotionEffect>,
}

/// Advance `state` by one frame.
///
/// `direction` is the net input in {-1, 0, 1}, `speed` is in pixels per
/// second, `dt` in seconds, and `max_x` the right-most allowed offset.
pub fn advance(
    state: MovementState,
    direction: i8,
    speed: f32,
    max_x: f32,
    dt: f32,
) -> StepOutcome {
    let mut next = state;
    let mut effects = Vec::new();

    if direction != 0 {
        next.x = clamp(state.x + f32::from(direction) * speed * dt, 0.0, max_x);
        next.facing = if direction < 0 {
            Facing::Left
        } else {
            Facing::Right
        };
        effects.push(MotionEffect::SetLeft(next.x));
    }
    next.walking = direction != 0;

    if next.walking != state.walking {
        effects.push(MotionEffect::SetWalking(next.walking));
    }
    if next.facing != state.facing {
        effects.push(MotionEffect::SetFlipped(next.facing.is_flipped()));
    }

    StepOutcome {
        state: next,
        effects,
    }
}
