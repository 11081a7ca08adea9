//! Hotspots domain: trigger/target components and the active pair list.

use bevy::prelude::*;

use crate::content::HotspotAuthority;

/// Marker for elements that act as a hotspot trigger.
#[derive(Component, Debug)]
pub struct HotspotTrigger;

/// Popped state of a hotspot target.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Popped(pub bool);

/// A resolved (trigger, target) binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotPair {
    pub trigger: Entity,
    pub target: Entity,
    /// "trigger -> target", for logs.
    pub label: String,
    /// Set while the last evaluation of this pair failed.
    pub faulted: bool,
}

impl HotspotPair {
    pub fn new(trigger: Entity, target: Entity, label: impl Into<String>) -> Self {
        Self {
            trigger,
            target,
            label: label.into(),
            faulted: false,
        }
    }
}

/// Pairs whose trigger and target both resolved. Fixed once the stage runs.
#[derive(Resource, Debug, Default)]
pub struct ActiveHotspots {
    pub pairs: Vec<HotspotPair>,
}

impl ActiveHotspots {
    /// Indices of the pairs driven by `trigger`.
    pub fn pairs_for_trigger(&self, trigger: Entity) -> impl Iterator<Item = usize> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .filter(move |(_, pair)| pair.trigger == trigger)
            .map(|(index, _)| index)
    }
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct HotspotSettings {
    pub authority: HotspotAuthority,
}
