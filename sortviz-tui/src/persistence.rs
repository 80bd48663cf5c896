//! App state persistence: JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use sortviz_core::{SortingAlgorithm, Visualizer, VisualizerConfig};

use crate::app::{AppState, ControlFocus, Overlay};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub algorithm: SortingAlgorithm,
    pub animation_speed: Option<f64>,
    pub bar_count: Option<usize>,
    pub focus: ControlFocus,
    pub help_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            algorithm: SortingAlgorithm::Bubble,
            animation_speed: None,
            bar_count: None,
            focus: ControlFocus::Speed,
            help_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app and its controller.
pub fn extract(app: &AppState, viz: &Visualizer) -> PersistedState {
    PersistedState {
        algorithm: viz.selected_algorithm(),
        animation_speed: Some(viz.animation_speed()),
        bar_count: Some(viz.bar_count()),
        focus: app.focus,
        help_dismissed: app.overlay != Overlay::Help,
    }
}

/// Apply persisted state before the controller mounts.
///
/// Stored values are clamped to the current config, which may have changed
/// since they were written.
pub fn apply(app: &mut AppState, viz: &mut Visualizer, state: PersistedState) {
    let config: VisualizerConfig = viz.config().clone();
    viz.set_selected_algorithm(state.algorithm);
    if let Some(speed) = state.animation_speed {
        viz.set_animation_speed(speed.clamp(config.min_speed, config.max_speed));
    }
    if let Some(count) = state.bar_count {
        viz.set_bar_count(count.clamp(config.min_bars, config.max_bars));
    }
    app.focus = state.focus;
    if !state.help_dismissed {
        app.overlay = Overlay::Help;
    }
}
