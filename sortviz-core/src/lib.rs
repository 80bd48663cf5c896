//! SortViz Core: dataset ownership and playback scheduling for a sorting visualizer.
//!
//! This crate contains everything the front ends share:
//! - The visualization controller (dataset, bar handles, flags, playback)
//! - A virtual-clock event queue with generation-guarded invalidation
//! - A trailing-edge debouncer for viewport resizes
//! - Step producers for the supported algorithms
//! - Configuration, the session context guard, and error types

pub mod algorithms;
pub mod config;
pub mod context;
pub mod controller;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod scheduler;
pub mod step;

pub use algorithms::SortingAlgorithm;
pub use config::VisualizerConfig;
pub use context::VisualizerContext;
pub use controller::{FiredMutation, PlaybackState, Visualizer};
pub use dataset::Bar;
pub use error::{ConfigError, VisualizerError};
pub use step::{AnimationStep, VisualMutation};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the session types can move to another thread.
    #[allow(dead_code)]
    fn assert_send() {
        fn require_send<T: Send>() {}

        require_send::<Visualizer>();
        require_send::<VisualizerContext>();
        require_send::<AnimationStep>();
        require_send::<VisualMutation>();
        require_send::<VisualizerConfig>();
    }
}
