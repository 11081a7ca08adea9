//! Hotspots domain: pointer interaction on triggers.

use bevy::prelude::*;

use crate::content::HotspotAuthority;
use crate::hotspots::collision::set_popped;
use crate::hotspots::{ActiveHotspots, HotspotSettings, HotspotToggled, PopSource, Popped};

/// Pointer enter/press pops every target of the trigger, leave/release
/// settles them. Ignored unless the pointer is the configured authority.
fn apply_pointer(
    trigger: Entity,
    popped: bool,
    settings: &HotspotSettings,
    hotspots: &ActiveHotspots,
    targets: &mut Query<&mut Popped>,
    toggled: &mut MessageWriter<HotspotToggled>,
) {
    if settings.authority != HotspotAuthority::Pointer {
        debug!("Pointer on trigger {} ignored: collision decides", trigger);
        return;
    }

    for index in hotspots.pairs_for_trigger(trigger) {
        let pair = &hotspots.pairs[index];
        if let Err(e) = set_popped(index, pair, popped, PopSource::Pointer, targets, toggled) {
            warn!("Hotspot {} pointer update failed: {}", pair.label, e);
        }
    }
}

pub(crate) fn on_trigger_over(
    over: On<Pointer<Over>>,
    settings: Res<HotspotSettings>,
    hotspots: Res<ActiveHotspots>,
    mut targets: Query<&mut Popped>,
    mut toggled: MessageWriter<HotspotToggled>,
) {
    apply_pointer(over.entity, true, &settings, &hotspots, &mut targets, &mut toggled);
}

pub(crate) fn on_trigger_out(
    out: On<Pointer<Out>>,
    settings: Res<HotspotSettings>,
    hotspots: Res<ActiveHotspots>,
    mut targets: Query<&mut Popped>,
    mut toggled: MessageWriter<HotspotToggled>,
) {
    apply_pointer(out.entity, false, &settings, &hotspots, &mut targets, &mut toggled);
}

pub(crate) fn on_trigger_press(
    press: On<Pointer<Press>>,
    settings: Res<HotspotSettings>,
    hotspots: Res<ActiveHotspots>,
    mut targets: Query<&mut Popped>,
    mut toggled: MessageWriter<HotspotToggled>,
) {
    apply_pointer(press.entity, true, &settings, &hotspots, &mut targets, &mut toggled);
}

pub(crate) fn on_trigger_release(
    release: On<Pointer<Release>>,
    settings: Res<HotspotSettings>,
    hotspots: Res<ActiveHotspots>,
    mut targets: Query<&mut Popped>,
    mut toggled: MessageWriter<HotspotToggled>,
) {
    apply_pointer(release.entity, false, &settings, &hotspots, &mut targets, &mut toggled);
}
