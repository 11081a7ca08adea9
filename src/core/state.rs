//! Core domain: stage lifecycle states and per-frame system ordering.

use bevy::prelude::*;

/// Lifecycle of the interactive stage.
///
/// `Boot` covers config loading and element spawning. The stage moves to
/// `Running` once the player anchor resolves, or to `Disabled` when it does
/// not; the app itself keeps running either way.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum StageState {
    #[default]
    Boot,
    Running,
    Disabled,
}

/// Per-frame ordering of the controller. Sets run in declaration order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum StrollSet {
    /// Key and focus events fold into `InputState`.
    Input,
    /// Player position, facing and walking flag.
    Motion,
    /// Hotspot overlap checks.
    Hotspots,
    /// Visuals derived from the flags above.
    Presentation,
}
