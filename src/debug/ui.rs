//! Debug domain: overlay spawning helpers.

use bevy::prelude::*;

/// Marker for the debug info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Readout panel pinned to the top-right corner, hidden until toggled.
pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    let panel = Node {
        position_type: PositionType::Absolute,
        top: Val::Px(12.0),
        right: Val::Px(12.0),
        min_width: Val::Px(220.0),
        padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
        border: UiRect::left(Val::Px(3.0)),
        ..default()
    };

    commands.spawn((
        Name::new("Stroll readout"),
        DebugInfoOverlay,
        Text::default(),
        TextFont::from_font_size(13.0),
        TextColor(Color::srgb(0.95, 0.92, 0.75)),
        panel,
        BackgroundColor(Color::srgba(0.08, 0.1, 0.14, 0.82)),
        BorderColor::all(Color::srgb(0.95, 0.75, 0.3)),
        Visibility::Hidden,
    ));
}
