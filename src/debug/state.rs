//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking which debug overlays are visible
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Text readout of the controller state
    pub show_info: bool,
    /// Outline every stage element's page box
    pub show_bounds: bool,
    /// Most recent hotspot change, for the readout
    pub last_toggle: Option<String>,
}
