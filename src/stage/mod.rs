//! Stage domain: the container, its named elements and page-space layout.

mod components;
mod geometry;
mod systems;

pub use components::{ElementColor, StageBackdrop, StageBounds, StageElement};
pub use geometry::{GeometryError, PageBox, PageRect, clamp};
pub use systems::index_elements;

use bevy::prelude::*;

use crate::core::StrollSet;
use crate::stage::systems::{spawn_stage, sync_page_transforms};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_stage).add_systems(
            Update,
            sync_page_transforms
                .after(StrollSet::Hotspots)
                .before(StrollSet::Presentation),
        );
    }
}
