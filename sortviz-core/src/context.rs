//! Session-scoped holder for the controller.
//!
//! Front ends create one context per session, provide a [`Visualizer`] once,
//! and hand the context to whatever needs the shared state. Access before a
//! controller was provided fails fast with [`VisualizerError::OutsideProvider`].

use crate::controller::Visualizer;
use crate::error::VisualizerError;

#[derive(Default)]
pub struct VisualizerContext {
    visualizer: Option<Visualizer>,
}

impl VisualizerContext {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context that already holds `visualizer`.
    pub fn with(visualizer: Visualizer) -> Self {
        Self {
            visualizer: Some(visualizer),
        }
    }

    /// Install the session controller, replacing any previous one.
    pub fn provide(&mut self, visualizer: Visualizer) {
        self.visualizer = Some(visualizer);
    }

    pub fn is_provided(&self) -> bool {
        self.visualizer.is_some()
    }

    pub fn get(&self) -> Result<&Visualizer, VisualizerError> {
        self.visualizer
            .as_ref()
            .ok_or(VisualizerError::OutsideProvider)
    }

    pub fn get_mut(&mut self) -> Result<&mut Visualizer, VisualizerError> {
        self.visualizer
            .as_mut()
            .ok_or(VisualizerError::OutsideProvider)
    }
}
