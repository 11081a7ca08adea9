//! Hotspots domain: message definitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// What changed a target's popped state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopSource {
    Collision,
    Pointer,
}

/// Fired when a hotspot target's popped state actually changes
#[derive(Debug, Clone)]
pub struct HotspotToggled {
    /// Index into `ActiveHotspots::pairs`.
    pub pair: usize,
    pub target: Entity,
    pub popped: bool,
    pub source: PopSource,
}

impl Message for HotspotToggled {}
