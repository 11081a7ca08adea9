//! Stage domain: element components and the container resource.

use bevy::prelude::*;

/// Marker for every named element spawned from the stage config.
#[derive(Component, Debug)]
pub struct StageElement;

/// Marker for the container backdrop.
#[derive(Component, Debug)]
pub struct StageBackdrop;

/// Base color of an element, kept so visuals can tint and restore it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ElementColor(pub Color);

/// Size of the container all elements live in.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct StageBounds {
    pub width: f32,
    pub height: f32,
}

impl StageBounds {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Largest left offset for an element of `width`; never negative.
    pub fn max_x(&self, width: f32) -> f32 {
        (self.width - width).max(0.0)
    }
}
