//! Hotspots domain: trigger/target pairs popped by overlap or pointer.

mod collision;
mod components;
mod events;
mod pointer;
mod resolve;

pub use collision::{HotspotError, evaluate_pair};
pub use components::{ActiveHotspots, HotspotPair, HotspotSettings, HotspotTrigger, Popped};
pub use events::{HotspotToggled, PopSource};
pub use resolve::resolve_bindings;

use bevy::prelude::*;

use crate::content::HotspotAuthority;
use crate::core::{StageState, StrollSet};
use crate::hotspots::collision::update_hotspot_collisions;
use crate::hotspots::resolve::{resolve_hotspots, setup_hotspot_settings};

pub struct HotspotsPlugin;

impl Plugin for HotspotsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveHotspots>()
            .init_resource::<HotspotSettings>()
            .add_message::<HotspotToggled>()
            .add_systems(Startup, setup_hotspot_settings)
            .add_systems(OnEnter(StageState::Running), resolve_hotspots)
            .add_systems(
                Update,
                update_hotspot_collisions
                    .in_set(StrollSet::Hotspots)
                    .run_if(collision_decides),
            );
    }
}

fn collision_decides(settings: Res<HotspotSettings>) -> bool {
    settings.authority == HotspotAuthority::Collision
}
