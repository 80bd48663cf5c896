//! Random dataset generation and the bar handles that mirror it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Draw `count` magnitudes uniformly from the inclusive range `[min, max]`.
///
/// If `max < min` every sample is `min`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, min: u32, max: u32) -> Vec<u32> {
    let max = max.max(min);
    (0..count).map(|_| rng.gen_range(min..=max)).collect()
}

/// Visual state of one rendered bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub height: u32,
    /// Highlighted as part of an in-flight comparison.
    pub active: bool,
}

impl Bar {
    pub fn new(height: u32) -> Self {
        Self {
            height,
            active: false,
        }
    }
}

/// Rewrite `bars` to mirror `data`: one handle per index, in order.
///
/// Heights are overwritten; existing `active` marks are left for the deferred
/// restore to clear. Handles added for new indices start in the default state.
pub fn sync_bars(bars: &mut Vec<Bar>, data: &[u32]) {
    bars.truncate(data.len());
    for (bar, &height) in bars.iter_mut().zip(data) {
        bar.height = height;
    }
    let existing = bars.len();
    bars.extend(data[existing..].iter().map(|&h| Bar::new(h)));
}
