//! Shared helpers for app-level tests.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::window::WindowFocused;

use crate::content::{ContainerDef, ElementDef, HotspotBindingDef, StageConfig};
use crate::hotspots::HotspotsPlugin;
use crate::input::InputTrackerPlugin;
use crate::movement::MovementPlugin;
use crate::stage::StagePlugin;

/// Headless app with every controller plugin and `config` preloaded.
pub(crate) fn stage_app(config: StageConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy::input::InputPlugin, StatesPlugin))
        .add_message::<WindowFocused>()
        .insert_resource(config);
    crate::core::configure_schedule(&mut app);
    app.add_plugins((
        StagePlugin,
        InputTrackerPlugin,
        MovementPlugin,
        HotspotsPlugin,
    ));
    app
}

/// 400x300 container; player 50x50 at the top-left, trigger `hs-a` at
/// (40, 10) overlapping it, trigger `hs-b` far to the right.
pub(crate) fn small_stage() -> StageConfig {
    StageConfig {
        container: ContainerDef {
            width: 400.0,
            height: 300.0,
            ..default()
        },
        elements: vec![
            ElementDef::new("player", 0.0, 0.0, 50.0, 50.0),
            ElementDef::new("hs-a", 40.0, 10.0, 50.0, 50.0),
            ElementDef::new("a-obj", 40.0, 100.0, 50.0, 50.0),
            ElementDef::new("hs-b", 300.0, 10.0, 50.0, 50.0),
            ElementDef::new("b-obj", 300.0, 100.0, 50.0, 50.0),
        ],
        hotspots: vec![
            HotspotBindingDef::new("hs-a", "a-obj"),
            HotspotBindingDef::new("hs-b", "b-obj"),
        ],
        ..default()
    }
}

pub(crate) fn element(app: &mut App, name: &str) -> Entity {
    let world = app.world_mut();
    let mut query = world.query::<(Entity, &Name)>();
    query
        .iter(world)
        .find(|(_, n)| n.as_str() == name)
        .map(|(entity, _)| entity)
        .unwrap_or_else(|| panic!("no element named {name}"))
}
