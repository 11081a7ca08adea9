//! Content domain: the stage config loaded from RON at startup.

mod data;
mod loader;
mod validation;

pub use data::{
    ContainerDef, ElementDef, HotspotAuthority, HotspotBindingDef, KeyBindingsDef,
    STAGE_SCHEMA_VERSION, StageConfig,
};
pub use loader::{ConfigError, load_stage_config, parse_stage_config, stage_config_path};
pub use validation::{ValidationIssue, validate_stage_config};

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, setup_stage_config);
    }
}

/// Loads the stage file unless a `StageConfig` was inserted up front.
/// A missing or broken file falls back to the built-in stage.
fn setup_stage_config(mut commands: Commands, existing: Option<Res<StageConfig>>) {
    let config = match existing {
        Some(config) => {
            info!("Using preconfigured stage");
            config.clone()
        }
        None => {
            let path = stage_config_path();
            match load_stage_config(&path) {
                Ok(config) => {
                    info!("Loaded stage from {}", path.display());
                    config
                }
                Err(e) => {
                    error!("{}; using built-in stage", e);
                    StageConfig::default()
                }
            }
        }
    };

    let issues = validate_stage_config(&config);
    for issue in &issues {
        warn!("Stage config: {}", issue);
    }

    info!(
        "Stage: {}x{} container, {} elements, {} hotspots, speed={} px/s, authority={:?}",
        config.container.width,
        config.container.height,
        config.elements.len(),
        config.hotspots.len(),
        config.speed,
        config.authority
    );

    commands.insert_resource(config);
}
