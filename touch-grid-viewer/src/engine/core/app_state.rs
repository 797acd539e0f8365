use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting on `viewer.json`.
    #[default]
    Loading,
    /// Scene spawned; touch input drives the content group.
    Running,
}

pub fn log_running(config: Res<crate::engine::core::config::ViewerConfig>) {
    info!(
        "→ Running: {}x{} tile grid, {:?} camera",
        config.grid.columns, config.grid.rows, config.camera.projection
    );
}
