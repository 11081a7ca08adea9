//! Core domain: lifecycle state, system sets and the camera.

mod state;

pub use state::{StageState, StrollSet};

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        configure_schedule(app);
        app.add_systems(Startup, setup_camera);
    }
}

/// Registers the stage state and chains the per-frame sets.
/// Motion and hotspot work only happens while the stage is running.
pub(crate) fn configure_schedule(app: &mut App) {
    app.init_state::<StageState>()
        .configure_sets(
            Update,
            (
                StrollSet::Input,
                StrollSet::Motion,
                StrollSet::Hotspots,
                StrollSet::Presentation,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (StrollSet::Motion, StrollSet::Hotspots).run_if(in_state(StageState::Running)),
        )
        .add_systems(OnEnter(StageState::Running), log_running)
        .add_systems(OnEnter(StageState::Disabled), log_disabled);
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn log_running() {
    info!("Stage running");
}

fn log_disabled() {
    warn!("Stage disabled: movement and hotspots will not run");
}
