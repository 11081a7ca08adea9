//! Hotspots domain: resolving configured bindings to stage elements.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::{HotspotBindingDef, StageConfig};
use crate::hotspots::pointer::{on_trigger_out, on_trigger_over, on_trigger_press, on_trigger_release};
use crate::hotspots::{ActiveHotspots, HotspotPair, HotspotSettings, HotspotTrigger, Popped};
use crate::stage::{StageElement, index_elements};

/// A binding left out of the active set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedBinding {
    pub binding: HotspotBindingDef,
    /// Which ends were missing: "trigger", "target" or both.
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub pairs: Vec<HotspotPair>,
    pub dropped: Vec<DroppedBinding>,
}

/// Match bindings against the element index. A binding is kept only when
/// both its trigger and its target exist.
pub fn resolve_bindings(bindings: &[HotspotBindingDef], index: &HashMap<&str, Entity>) -> Resolution {
    let mut resolution = Resolution::default();

    for binding in bindings {
        let trigger = index.get(binding.trigger.as_str()).copied();
        let target = index.get(binding.target.as_str()).copied();

        match (trigger, target) {
            (Some(trigger), Some(target)) => resolution.pairs.push(HotspotPair::new(
                trigger,
                target,
                format!("{} -> {}", binding.trigger, binding.target),
            )),
            _ => {
                let mut missing = Vec::new();
                if trigger.is_none() {
                    missing.push("trigger");
                }
                if target.is_none() {
                    missing.push("target");
                }
                resolution.dropped.push(DroppedBinding {
                    binding: binding.clone(),
                    missing,
                });
            }
        }
    }

    resolution
}

pub(crate) fn setup_hotspot_settings(mut commands: Commands, config: Res<StageConfig>) {
    commands.insert_resource(HotspotSettings {
        authority: config.authority,
    });
}

/// Builds `ActiveHotspots` when the stage starts running and hooks pointer
/// observers onto each distinct trigger.
pub(crate) fn resolve_hotspots(
    mut commands: Commands,
    config: Res<StageConfig>,
    elements: Query<(Entity, &Name), With<StageElement>>,
) {
    let index = index_elements(elements.iter());
    let resolution = resolve_bindings(&config.hotspots, &index);

    for dropped in &resolution.dropped {
        warn!(
            "Hotspot {} -> {} dropped: missing {}",
            dropped.binding.trigger,
            dropped.binding.target,
            dropped.missing.join(" and ")
        );
    }

    let mut hooked: Vec<Entity> = Vec::new();
    for pair in &resolution.pairs {
        commands.entity(pair.target).insert(Popped::default());

        if hooked.contains(&pair.trigger) {
            continue;
        }
        hooked.push(pair.trigger);
        commands
            .entity(pair.trigger)
            .insert(HotspotTrigger)
            .observe(on_trigger_over)
            .observe(on_trigger_out)
            .observe(on_trigger_press)
            .observe(on_trigger_release);
    }

    info!(
        "Hotspots active: {} of {} configured",
        resolution.pairs.len(),
        config.hotspots.len()
    );

    commands.insert_resource(ActiveHotspots {
        pairs: resolution.pairs,
    });
}
