mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hotspots;
mod input;
mod movement;
mod presentation;
mod stage;
#[cfg(test)]
mod testing;

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hotspot Stroll".to_string(),
            resolution: WindowResolution::new(960, 540),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        stage::StagePlugin,
        input::InputTrackerPlugin,
        movement::MovementPlugin,
        hotspots::HotspotsPlugin,
        presentation::PresentationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
