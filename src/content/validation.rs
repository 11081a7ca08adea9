//! Validation for cross-references and sizes inside a stage config.

use std::collections::HashSet;
use thiserror::Error;

use super::data::StageConfig;

/// A problem found in a stage config. None of these stop startup; missing
/// anchors are handled when the stage resolves its elements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("speed must be a positive number of pixels per second, got {0}")]
    InvalidSpeed(f32),
    #[error("no keys bound for moving {0}")]
    EmptyKeySet(&'static str),
    #[error("container must have a positive size, got {width}x{height}")]
    InvalidContainer { width: f32, height: f32 },
    #[error("element '{0}' is defined more than once")]
    DuplicateElement(String),
    #[error("element '{name}' must have a positive size, got {width}x{height}")]
    InvalidElementSize { name: String, width: f32, height: f32 },
    #[error("player references missing element '{0}'")]
    UnknownPlayer(String),
    #[error("hotspot {field} references missing element '{name}'")]
    UnknownHotspotElement { field: &'static str, name: String },
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Validate a stage config.
/// Returns a list of issues, empty if the config is consistent.
pub fn validate_stage_config(config: &StageConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !positive(config.speed) {
        issues.push(ValidationIssue::InvalidSpeed(config.speed));
    }

    if config.keys.left.is_empty() {
        issues.push(ValidationIssue::EmptyKeySet("left"));
    }
    if config.keys.right.is_empty() {
        issues.push(ValidationIssue::EmptyKeySet("right"));
    }

    if !positive(config.container.width) || !positive(config.container.height) {
        issues.push(ValidationIssue::InvalidContainer {
            width: config.container.width,
            height: config.container.height,
        });
    }

    // Elements
    let mut seen = HashSet::new();
    for element in &config.elements {
        if !seen.insert(element.name.as_str()) {
            issues.push(ValidationIssue::DuplicateElement(element.name.clone()));
        }
        if !positive(element.width) || !positive(element.height) {
            issues.push(ValidationIssue::InvalidElementSize {
                name: element.name.clone(),
                width: element.width,
                height: element.height,
            });
        }
    }

    if !seen.contains(config.player.as_str()) {
        issues.push(ValidationIssue::UnknownPlayer(config.player.clone()));
    }

    // Hotspots
    for binding in &config.hotspots {
        for (field, name) in [("trigger", &binding.trigger), ("target", &binding.target)] {
            if !seen.contains(name.as_str()) {
                issues.push(ValidationIssue::UnknownHotspotElement {
                    field,
                    name: name.clone(),
                });
            }
        }
    }

    issues
}
