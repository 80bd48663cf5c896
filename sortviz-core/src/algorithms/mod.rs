//! Step producers: pure functions from a dataset to a playback sequence.
//!
//! Each producer sorts a private copy of its input in ascending order and
//! records every comparison and every write as an [`AnimationStep`]. Replaying
//! the swaps in order over the input yields the sorted data.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use serde::{Deserialize, Serialize};

use crate::step::AnimationStep;

pub use bubble::bubble_sort_steps;
pub use insertion::insertion_sort_steps;
pub use merge::merge_sort_steps;
pub use quick::quick_sort_steps;
pub use selection::selection_sort_steps;

/// Supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortingAlgorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl SortingAlgorithm {
    pub const ALL: [SortingAlgorithm; 5] = [
        SortingAlgorithm::Bubble,
        SortingAlgorithm::Insertion,
        SortingAlgorithm::Selection,
        SortingAlgorithm::Merge,
        SortingAlgorithm::Quick,
    ];

    pub fn index(self) -> usize {
        match self {
            SortingAlgorithm::Bubble => 0,
            SortingAlgorithm::Insertion => 1,
            SortingAlgorithm::Selection => 2,
            SortingAlgorithm::Merge => 3,
            SortingAlgorithm::Quick => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Short identifier, as accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble => "bubble",
            SortingAlgorithm::Insertion => "insertion",
            SortingAlgorithm::Selection => "selection",
            SortingAlgorithm::Merge => "merge",
            SortingAlgorithm::Quick => "quick",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble => "Bubble Sort",
            SortingAlgorithm::Insertion => "Insertion Sort",
            SortingAlgorithm::Selection => "Selection Sort",
            SortingAlgorithm::Merge => "Merge Sort",
            SortingAlgorithm::Quick => "Quick Sort",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble
            | SortingAlgorithm::Insertion
            | SortingAlgorithm::Selection => "O(n^2)",
            SortingAlgorithm::Merge => "O(n log n)",
            SortingAlgorithm::Quick => "O(n log n) avg, O(n^2) worst",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Produce the playback sequence for `data`.
    pub fn animations(self, data: &[u32]) -> Vec<AnimationStep> {
        match self {
            SortingAlgorithm::Bubble => bubble_sort_steps(data),
            SortingAlgorithm::Insertion => insertion_sort_steps(data),
            SortingAlgorithm::Selection => selection_sort_steps(data),
            SortingAlgorithm::Merge => merge_sort_steps(data),
            SortingAlgorithm::Quick => quick_sort_steps(data),
        }
    }
}
