//! Visualizer configuration: speed and bar-count bounds, height budget, timing.
//!
//! Stored as an optional TOML file. Every field has a default, so a partial
//! file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, VisualizerError};

pub const MIN_ANIMATION_SPEED: f64 = 100.0;
pub const MAX_ANIMATION_SPEED: f64 = 400.0;
pub const DEFAULT_BAR_COUNT: usize = 50;
pub const MIN_BAR_HEIGHT: u32 = 35;

/// Tunables for one visualizer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub min_speed: f64,
    pub max_speed: f64,
    pub default_speed: f64,
    pub min_bars: usize,
    pub max_bars: usize,
    pub default_bars: usize,
    /// Smallest magnitude a generated bar can have.
    pub min_bar_height: u32,
    /// Viewport units kept free for controls around the chart.
    pub viewport_reserve: u32,
    /// Floor for the vertical budget on small viewports.
    pub min_budget: u32,
    /// Numerator of the step delay: `delay_ms = delay_scale_ms / speed`.
    pub delay_scale_ms: f64,
    pub resize_debounce_ms: u64,
    /// Fixed seed for dataset generation. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            min_speed: MIN_ANIMATION_SPEED,
            max_speed: MAX_ANIMATION_SPEED,
            default_speed: MAX_ANIMATION_SPEED,
            min_bars: 5,
            max_bars: 200,
            default_bars: DEFAULT_BAR_COUNT,
            min_bar_height: MIN_BAR_HEIGHT,
            viewport_reserve: 320,
            min_budget: 100,
            delay_scale_ms: 200.0,
            resize_debounce_ms: 100,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, VisualizerError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_speed must be positive, got {}",
                self.min_speed
            )));
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::Invalid(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        if self.default_speed < self.min_speed || self.default_speed > self.max_speed {
            return Err(ConfigError::Invalid(format!(
                "default_speed {} outside [{}, {}]",
                self.default_speed, self.min_speed, self.max_speed
            )));
        }
        if self.min_bars == 0 || self.min_bars > self.max_bars {
            return Err(ConfigError::Invalid(format!(
                "bar bounds [{}, {}] are empty or start at zero",
                self.min_bars, self.max_bars
            )));
        }
        if self.default_bars < self.min_bars || self.default_bars > self.max_bars {
            return Err(ConfigError::Invalid(format!(
                "default_bars {} outside [{}, {}]",
                self.default_bars, self.min_bars, self.max_bars
            )));
        }
        if self.min_budget < self.min_bar_height {
            return Err(ConfigError::Invalid(format!(
                "min_budget {} is below min_bar_height {}",
                self.min_budget, self.min_bar_height
            )));
        }
        if !(self.delay_scale_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "delay_scale_ms must be positive, got {}",
                self.delay_scale_ms
            )));
        }
        Ok(())
    }

    /// Inter-step delay for a given speed: `(1 / speed) * delay_scale_ms`.
    ///
    /// Computed in whole nanoseconds so `i * delay` stays exact across a playback.
    pub fn animation_delay(&self, speed: f64) -> Duration {
        let nanos = (self.delay_scale_ms * 1_000_000.0 / speed).round();
        Duration::from_nanos(nanos as u64)
    }

    /// Largest bar magnitude that fits a viewport of the given height.
    pub fn vertical_budget(&self, viewport_height: u32) -> u32 {
        viewport_height
            .saturating_sub(self.viewport_reserve)
            .max(self.min_budget)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
