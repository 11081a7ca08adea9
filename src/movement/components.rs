//! Movement domain: player components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// The sprite is mirrored while facing left.
    pub fn is_flipped(self) -> bool {
        self == Facing::Left
    }
}

/// Logical motion state of the player, advanced once per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementState {
    /// Left offset inside the container, always within `[0, max_x]`.
    pub x: f32,
    /// Sticky: only changes when moving.
    pub facing: Facing,
    /// True iff the last frame had a non-zero direction.
    pub walking: bool,
}

/// Present on the player while it walks.
#[derive(Component, Debug)]
pub struct Walking;
