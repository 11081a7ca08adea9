//! Debug domain: hotkeys, readout and bounds gizmos.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::core::StageState;
use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::hotspots::{ActiveHotspots, HotspotSettings, HotspotToggled, HotspotTrigger, Popped};
use crate::input::InputState;
use crate::movement::{MovementState, Player};
use crate::stage::{PageBox, StageBounds, StageElement};

/// F3 toggles the readout, F4 the element outlines
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info overlay: {}", debug_state.show_info);
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_bounds = !debug_state.show_bounds;
        info!("Debug bounds: {}", debug_state.show_bounds);
    }
}

pub(crate) fn record_last_toggle(
    mut toggled: MessageReader<HotspotToggled>,
    hotspots: Res<ActiveHotspots>,
    mut debug_state: ResMut<DebugState>,
) {
    for message in toggled.read() {
        let label = hotspots
            .pairs
            .get(message.pair)
            .map(|pair| pair.label.as_str())
            .unwrap_or("?");
        debug_state.last_toggle = Some(format!(
            "{} {} ({:?})",
            label,
            if message.popped { "popped" } else { "settled" },
            message.source
        ));
    }
}

/// Multi-line readout of the controller state.
pub fn format_readout(
    stage_state: &StageState,
    input: &InputState,
    motion: Option<&MovementState>,
    popped: usize,
    active: usize,
    settings: &HotspotSettings,
    last_toggle: Option<&str>,
) -> String {
    let motion = match motion {
        Some(state) => format!(
            "x: {:.1}  facing: {:?}  walking: {}",
            state.x, state.facing, state.walking
        ),
        None => "no player".to_string(),
    };

    format!(
        "Stage: {:?}\nKeys: left={} right={} dir={}\n{}\nHotspots: {}/{} popped ({:?})\nLast: {}",
        stage_state,
        input.left,
        input.right,
        input.direction(),
        motion,
        popped,
        active,
        settings.authority,
        last_toggle.unwrap_or("-")
    )
}

pub(crate) fn setup_debug_info_overlay(mut commands: Commands) {
    spawn_debug_info_overlay(&mut commands);
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    stage_state: Res<State<StageState>>,
    input: Res<InputState>,
    settings: Res<HotspotSettings>,
    hotspots: Res<ActiveHotspots>,
    player_query: Query<&MovementState, With<Player>>,
    popped_query: Query<&Popped>,
    mut overlay_query: Query<(&mut Text, &mut Visibility), With<DebugInfoOverlay>>,
) {
    let Ok((mut text, mut visibility)) = overlay_query.single_mut() else {
        return;
    };

    visibility.set_if_neq(if debug_state.show_info {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    });
    if !debug_state.show_info {
        return;
    }

    let popped = popped_query.iter().filter(|p| p.0).count();
    **text = format_readout(
        stage_state.get(),
        &input,
        player_query.iter().next(),
        popped,
        hotspots.pairs.len(),
        &settings,
        debug_state.last_toggle.as_deref(),
    );
}

pub(crate) fn draw_element_bounds(
    mut gizmos: Gizmos,
    bounds: Option<Res<StageBounds>>,
    elements: Query<(&PageBox, Has<Player>, Has<HotspotTrigger>), With<StageElement>>,
) {
    let Some(bounds) = bounds else {
        return;
    };

    for (page_box, is_player, is_trigger) in &elements {
        let color = if is_player {
            Color::srgb(0.3, 0.8, 1.0)
        } else if is_trigger {
            Color::srgb(1.0, 0.8, 0.2)
        } else {
            Color::srgb(0.6, 0.6, 0.6)
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(page_box.world_center(bounds.size())),
            Vec2::new(page_box.width, page_box.height),
            color,
        );
    }
}
