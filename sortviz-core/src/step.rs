//! Playback input and output types.

use serde::{Deserialize, Serialize};

/// One unit of algorithmic work, as produced by a step producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationStep {
    /// Mark the indices active, then unmark them one delay later.
    Compare { indices: Vec<usize> },
    /// Write a new magnitude into a single bar.
    Swap { index: usize, height: u32 },
}

impl AnimationStep {
    pub fn compare(indices: impl Into<Vec<usize>>) -> Self {
        AnimationStep::Compare {
            indices: indices.into(),
        }
    }

    pub fn swap(index: usize, height: u32) -> Self {
        AnimationStep::Swap { index, height }
    }

    pub fn is_swap(&self) -> bool {
        matches!(self, AnimationStep::Swap { .. })
    }
}

/// A visual change applied to the bar collection or the playback flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualMutation {
    Activate { indices: Vec<usize> },
    Deactivate { indices: Vec<usize> },
    SetHeight { index: usize, height: u32 },
    /// Clear every active mark (deferred half of a reset).
    RestoreDefaults,
    /// Final event of a playback: sorting off, complete on.
    PlaybackComplete,
}

impl VisualMutation {
    pub fn label(&self) -> &'static str {
        match self {
            VisualMutation::Activate { .. } => "activate",
            VisualMutation::Deactivate { .. } => "deactivate",
            VisualMutation::SetHeight { .. } => "set_height",
            VisualMutation::RestoreDefaults => "restore_defaults",
            VisualMutation::PlaybackComplete => "playback_complete",
        }
    }
}

/// Apply every swap in order to a copy of `data`.
///
/// Mirrors what playback does to the bar heights; useful for checking that a
/// producer's output actually sorts its input.
pub fn apply_swaps(data: &[u32], steps: &[AnimationStep]) -> Vec<u32> {
    let mut out = data.to_vec();
    for step in steps {
        if let AnimationStep::Swap { index, height } = step {
            if let Some(slot) = out.get_mut(*index) {
                *slot = *height;
            }
        }
    }
    out
}
