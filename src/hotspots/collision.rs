//! Hotspots domain: per-frame overlap checks between player and triggers.

use bevy::prelude::*;
use thiserror::Error;

use crate::hotspots::{ActiveHotspots, HotspotPair, HotspotToggled, PopSource, Popped};
use crate::movement::Player;
use crate::stage::{GeometryError, PageBox};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HotspotError {
    #[error("element {0} is gone")]
    MissingElement(Entity),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Whether the player's box overlaps the trigger's box.
pub fn evaluate_pair(player: &PageBox, trigger: &PageBox) -> Result<bool, GeometryError> {
    Ok(player.rect()?.overlaps(&trigger.rect()?))
}

/// Write `popped` to the pair's target, announcing real changes.
pub(crate) fn set_popped(
    index: usize,
    pair: &HotspotPair,
    popped: bool,
    source: PopSource,
    targets: &mut Query<&mut Popped>,
    toggled: &mut MessageWriter<HotspotToggled>,
) -> Result<(), HotspotError> {
    let mut state = targets
        .get_mut(pair.target)
        .map_err(|_| HotspotError::MissingElement(pair.target))?;

    if state.0 != popped {
        state.0 = popped;
        toggled.write(HotspotToggled {
            pair: index,
            target: pair.target,
            popped,
            source,
        });
        info!(
            "Hotspot {} {} ({:?})",
            pair.label,
            if popped { "popped" } else { "settled" },
            source
        );
    }

    Ok(())
}

fn check_pair(
    index: usize,
    pair: &HotspotPair,
    player: &PageBox,
    boxes: &Query<&PageBox>,
    targets: &mut Query<&mut Popped>,
    toggled: &mut MessageWriter<HotspotToggled>,
) -> Result<(), HotspotError> {
    let trigger = boxes
        .get(pair.trigger)
        .map_err(|_| HotspotError::MissingElement(pair.trigger))?;
    let overlapping = evaluate_pair(player, trigger)?;
    set_popped(index, pair, overlapping, PopSource::Collision, targets, toggled)
}

/// Overwrites every target's popped state with the overlap result.
/// A failing pair is skipped for this frame; the rest still update.
pub(crate) fn update_hotspot_collisions(
    mut hotspots: ResMut<ActiveHotspots>,
    player: Query<&PageBox, With<Player>>,
    boxes: Query<&PageBox>,
    mut targets: Query<&mut Popped>,
    mut toggled: MessageWriter<HotspotToggled>,
) {
    let Ok(player_box) = player.single() else {
        warn_once!("No single player element, skipping hotspot checks");
        return;
    };

    for (index, pair) in hotspots.bypass_change_detection().pairs.iter_mut().enumerate() {
        match check_pair(index, pair, player_box, &boxes, &mut targets, &mut toggled) {
            Ok(()) => {
                if pair.faulted {
                    pair.faulted = false;
                    info!("Hotspot {} recovered", pair.label);
                }
            }
            Err(e) => {
                if !pair.faulted {
                    pair.faulted = true;
                    warn!("Hotspot {} skipped: {}", pair.label, e);
                }
            }
        }
    }
}
