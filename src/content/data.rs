//! Data definitions for the stage RON file.
//!
//! These structs mirror the structure in assets/data/stage.ron. Every field
//! has a default so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Current layout of stage.ron.
pub const STAGE_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Stage (stage.ron)
// ============================================================================

/// Complete stage description: tuning, key bindings, layout and hotspots.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StageConfig {
    pub schema_version: u32,
    /// Horizontal speed in pixels per second.
    pub speed: f32,
    pub keys: KeyBindingsDef,
    pub container: ContainerDef,
    /// Name of the element the keyboard drives.
    pub player: String,
    pub elements: Vec<ElementDef>,
    pub hotspots: Vec<HotspotBindingDef>,
    pub authority: HotspotAuthority,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            schema_version: STAGE_SCHEMA_VERSION,
            speed: 300.0,
            keys: KeyBindingsDef::default(),
            container: ContainerDef::default(),
            player: "player".to_string(),
            elements: default_elements(),
            hotspots: vec![
                HotspotBindingDef::new("hs-tree", "tree-obj"),
                HotspotBindingDef::new("hs-house", "house-obj"),
            ],
            authority: HotspotAuthority::default(),
        }
    }
}

// ============================================================================
// Key bindings
// ============================================================================

/// Key identifiers per direction, in web `KeyboardEvent.key` form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindingsDef {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindingsDef {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "a".into(), "A".into()],
            right: vec!["ArrowRight".into(), "d".into(), "D".into()],
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContainerDef {
    pub width: f32,
    pub height: f32,
    pub color: (f32, f32, f32),
}

impl Default for ContainerDef {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 300.0,
            color: (0.16, 0.18, 0.24),
        }
    }
}

/// One absolutely positioned element. `x`/`y` are the top-left corner in
/// page space (origin at the container's top-left, y down).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ElementDef {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_element_color")]
    pub color: (f32, f32, f32),
    /// Draw order; higher is in front.
    #[serde(default)]
    pub layer: f32,
}

impl ElementDef {
    pub fn new(name: &str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            width,
            height,
            color: default_element_color(),
            layer: 0.0,
        }
    }

    pub fn with_color(mut self, color: (f32, f32, f32)) -> Self {
        self.color = color;
        self
    }

    pub fn with_layer(mut self, layer: f32) -> Self {
        self.layer = layer;
        self
    }
}

fn default_element_color() -> (f32, f32, f32) {
    (0.7, 0.7, 0.7)
}

fn default_elements() -> Vec<ElementDef> {
    vec![
        ElementDef::new("tree-obj", 190.0, 90.0, 70.0, 130.0)
            .with_color((0.25, 0.55, 0.3))
            .with_layer(1.0),
        ElementDef::new("hs-tree", 180.0, 220.0, 90.0, 50.0).with_color((0.3, 0.34, 0.3)),
        ElementDef::new("house-obj", 530.0, 110.0, 100.0, 110.0)
            .with_color((0.65, 0.45, 0.3))
            .with_layer(1.0),
        ElementDef::new("hs-house", 520.0, 220.0, 120.0, 50.0).with_color((0.36, 0.32, 0.3)),
        ElementDef::new("player", 40.0, 190.0, 50.0, 80.0)
            .with_color((0.92, 0.9, 0.85))
            .with_layer(2.0),
    ]
}

// ============================================================================
// Hotspots
// ============================================================================

/// Binds a trigger element to the target element it pops.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HotspotBindingDef {
    pub trigger: String,
    pub target: String,
}

impl HotspotBindingDef {
    pub fn new(trigger: &str, target: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            target: target.to_string(),
        }
    }
}

/// Which input decides a target's popped state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum HotspotAuthority {
    /// The player's overlap with the trigger, re-evaluated every frame.
    #[default]
    Collision,
    /// Pointer enter/press pops, leave/release unpops.
    Pointer,
}
