//! Error types for the visualizer core.

use thiserror::Error;

/// Errors from loading or validating a [`crate::config::VisualizerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors surfaced by the visualizer session.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The controller was accessed before a session provided one.
    #[error("visualizer accessed outside of a provided session")]
    OutsideProvider,
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
