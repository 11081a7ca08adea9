//! Movement domain: tuning resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Pixels per second.
    pub speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self { speed: 300.0 }
    }
}

impl MovementTuning {
    /// Tuning for a configured speed, or `None` when the speed is not a
    /// positive finite number.
    pub fn from_speed(speed: f32) -> Option<Self> {
        (speed.is_finite() && speed > 0.0).then_some(Self { speed })
    }
}
