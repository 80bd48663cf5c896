//! The visualization controller: single owner of the dataset, the bar
//! handles, the configuration, and the playback flags.
//!
//! All timing is driven by the caller's clock: every operation that schedules
//! or fires work takes `now`, a `Duration` since session start. Nothing here
//! blocks; `run_animation` only queues events and `tick` fires the due ones.
//!
//! Invalidation uses two layers. A reset drops every queued event, and it
//! also bumps the generation so that anything scheduled under an older
//! generation is a no-op if it ever reaches `tick`. A completion from an
//! abandoned playback therefore cannot flip the flags after a reset.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::algorithms::SortingAlgorithm;
use crate::config::VisualizerConfig;
use crate::dataset::{self, Bar};
use crate::debounce::Debouncer;
use crate::scheduler::{ScheduledAction, Timeline};
use crate::step::{AnimationStep, VisualMutation};

/// Derived playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Idle,
    Sorting,
    Complete,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Sorting => "Sorting",
            PlaybackState::Complete => "Complete",
        }
    }
}

/// A mutation that took effect during `tick`, stamped with its scheduled time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredMutation {
    pub at: Duration,
    pub mutation: VisualMutation,
}

pub struct Visualizer {
    config: VisualizerConfig,
    dataset: Vec<u32>,
    bars: Vec<Bar>,
    selected_algorithm: SortingAlgorithm,
    animation_speed: f64,
    bar_count: usize,
    is_sorting: bool,
    is_animation_complete: bool,
    generation: u64,
    timeline: Timeline,
    resize: Debouncer,
    viewport_height: u32,
    rng: StdRng,
}

impl Visualizer {
    /// Build an unmounted controller. The dataset stays empty until `mount`.
    pub fn new(config: VisualizerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            dataset: Vec::new(),
            bars: Vec::new(),
            selected_algorithm: SortingAlgorithm::default(),
            animation_speed: config.default_speed,
            bar_count: config.default_bars,
            is_sorting: false,
            is_animation_complete: false,
            generation: 0,
            timeline: Timeline::new(),
            resize: Debouncer::new(config.resize_debounce()),
            viewport_height: 0,
            rng,
            config,
        }
    }

    // ── Setters ──────────────────────────────────────────────────────

    pub fn set_selected_algorithm(&mut self, algorithm: SortingAlgorithm) {
        self.selected_algorithm = algorithm;
    }

    /// Speeds outside `[min_speed, max_speed]` are not rejected.
    pub fn set_animation_speed(&mut self, speed: f64) {
        self.animation_speed = speed;
    }

    /// Takes effect on the next reset.
    pub fn set_bar_count(&mut self, count: usize) {
        self.bar_count = count;
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Record the viewport and perform the initial reset.
    pub fn mount(&mut self, viewport_height: u32, now: Duration) {
        self.viewport_height = viewport_height;
        self.reset_array_and_animation(now);
    }

    /// Record a new viewport height and re-arm the trailing resize reset.
    pub fn on_resize(&mut self, viewport_height: u32, now: Duration) {
        self.viewport_height = viewport_height;
        self.resize.trigger(now);
    }

    /// Regenerate the dataset, clear the flags, and invalidate all pending work.
    ///
    /// Clearing the active marks is deferred to the next `tick`.
    pub fn reset_array_and_animation(&mut self, now: Duration) {
        let budget = self.vertical_budget();
        self.dataset = dataset::generate(
            &mut self.rng,
            self.bar_count,
            self.config.min_bar_height,
            budget,
        );
        dataset::sync_bars(&mut self.bars, &self.dataset);

        self.is_sorting = false;
        self.is_animation_complete = false;

        let dropped = self.timeline.cancel_all();
        self.generation += 1;
        self.timeline.schedule(
            now,
            self.generation,
            ScheduledAction::Apply(VisualMutation::RestoreDefaults),
        );

        log::info!(
            "reset: {} bars in [{}, {}], generation {}, dropped {} pending events",
            self.bar_count,
            self.config.min_bar_height,
            budget,
            self.generation,
            dropped
        );
    }

    /// Schedule a playback of `steps` starting at `now`.
    ///
    /// Step `i` fires at `now + i * delay`; completion fires at
    /// `now + steps.len() * delay`. Callers must not start a playback while
    /// [`Self::requires_reset`] is true.
    pub fn run_animation(&mut self, steps: Vec<AnimationStep>, now: Duration) {
        self.is_sorting = true;

        let delay = self.animation_delay();
        let generation = self.generation;
        let count = steps.len();

        for (i, step) in steps.into_iter().enumerate() {
            let at = now + offset(delay, i);
            let action = match step {
                AnimationStep::Compare { indices } => ScheduledAction::Highlight {
                    indices,
                    hold: delay,
                },
                AnimationStep::Swap { index, height } => {
                    ScheduledAction::Apply(VisualMutation::SetHeight { index, height })
                }
            };
            self.timeline.schedule(at, generation, action);
        }

        self.timeline.schedule(
            now + offset(delay, count),
            generation,
            ScheduledAction::Apply(VisualMutation::PlaybackComplete),
        );

        log::debug!(
            "scheduled {} steps at {:?} intervals, generation {}",
            count,
            delay,
            generation
        );
    }

    /// Produce steps with the selected algorithm and start playing them.
    ///
    /// Returns the number of steps scheduled.
    pub fn run_selected(&mut self, now: Duration) -> usize {
        let steps = self.selected_algorithm.animations(&self.dataset);
        let count = steps.len();
        log::info!(
            "running {} over {} bars: {} steps",
            self.selected_algorithm.label(),
            self.dataset.len(),
            count
        );
        self.run_animation(steps, now);
        count
    }

    /// One event-loop turn: fire the resize reset if due, then every queued
    /// event at or before `now`.
    pub fn tick(&mut self, now: Duration) -> Vec<FiredMutation> {
        if self.resize.poll(now) {
            self.reset_array_and_animation(now);
        }

        let mut fired = Vec::new();
        while let Some(event) = self.timeline.pop_due(now) {
            if event.generation != self.generation {
                log::debug!(
                    "dropping stale event from generation {} at {:?}",
                    event.generation,
                    event.at
                );
                continue;
            }

            let mutation = match event.action {
                ScheduledAction::Highlight { indices, hold } => {
                    self.timeline.schedule(
                        event.at + hold,
                        event.generation,
                        ScheduledAction::Apply(VisualMutation::Deactivate {
                            indices: indices.clone(),
                        }),
                    );
                    VisualMutation::Activate { indices }
                }
                ScheduledAction::Apply(mutation) => mutation,
            };

            self.apply(&mutation);
            fired.push(FiredMutation {
                at: event.at,
                mutation,
            });
        }
        fired
    }

    fn apply(&mut self, mutation: &VisualMutation) {
        match mutation {
            VisualMutation::Activate { indices } => self.mark(indices, true),
            VisualMutation::Deactivate { indices } => self.mark(indices, false),
            VisualMutation::SetHeight { index, height } => match self.bars.get_mut(*index) {
                Some(bar) => bar.height = *height,
                None => log::warn!(
                    "height update for bar {} ignored: only {} bars",
                    index,
                    self.bars.len()
                ),
            },
            VisualMutation::RestoreDefaults => {
                for bar in &mut self.bars {
                    bar.active = false;
                }
            }
            VisualMutation::PlaybackComplete => {
                self.is_sorting = false;
                self.is_animation_complete = true;
                log::info!("playback complete, generation {}", self.generation);
            }
        }
    }

    fn mark(&mut self, indices: &[usize], active: bool) {
        let len = self.bars.len();
        for &index in indices {
            match self.bars.get_mut(index) {
                Some(bar) => bar.active = active,
                None => log::warn!("mark for bar {} ignored: only {} bars", index, len),
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn dataset(&self) -> &[u32] {
        &self.dataset
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn selected_algorithm(&self) -> SortingAlgorithm {
        self.selected_algorithm
    }

    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    pub fn bar_count(&self) -> usize {
        self.bar_count
    }

    pub fn is_sorting(&self) -> bool {
        self.is_sorting
    }

    pub fn is_animation_complete(&self) -> bool {
        self.is_animation_complete
    }

    /// A fresh dataset is needed before another playback may start.
    pub fn requires_reset(&self) -> bool {
        self.is_sorting || self.is_animation_complete
    }

    pub fn playback_state(&self) -> PlaybackState {
        if self.is_sorting {
            PlaybackState::Sorting
        } else if self.is_animation_complete {
            PlaybackState::Complete
        } else {
            PlaybackState::Idle
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_events(&self) -> usize {
        self.timeline.len()
    }

    /// Earliest instant at which `tick` has work: a queued event or the resize reset.
    pub fn next_event_at(&self) -> Option<Duration> {
        match (self.timeline.next_deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn vertical_budget(&self) -> u32 {
        self.config.vertical_budget(self.viewport_height)
    }

    pub fn animation_delay(&self) -> Duration {
        self.config.animation_delay(self.animation_speed)
    }
}

fn offset(delay: Duration, steps: usize) -> Duration {
    delay.saturating_mul(u32::try_from(steps).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn seeded() -> Visualizer {
        Visualizer::new(VisualizerConfig {
            seed: Some(11),
            ..VisualizerConfig::default()
        })
    }

    #[test]
    fn new_controller_is_idle_and_empty() {
        let viz = seeded();
        assert_eq!(viz.playback_state(), PlaybackState::Idle);
        assert!(!viz.requires_reset());
        assert!(viz.dataset().is_empty());
        assert_eq!(viz.bar_count(), 50);
        assert_eq!(viz.animation_speed(), viz.config().max_speed);
    }

    #[test]
    fn mount_generates_dataset() {
        let mut viz = seeded();
        viz.mount(800, ms(0));
        assert_eq!(viz.dataset().len(), 50);
        assert_eq!(viz.bars().len(), 50);
        assert!(viz.dataset().iter().all(|&h| (35..=480).contains(&h)));
        assert_eq!(viz.generation(), 1);
    }

    #[test]
    fn bar_count_applies_on_next_reset() {
        let mut viz = seeded();
        viz.mount(800, ms(0));
        viz.set_bar_count(12);
        assert_eq!(viz.dataset().len(), 50);
        viz.reset_array_and_animation(ms(1));
        assert_eq!(viz.dataset().len(), 12);
        assert_eq!(viz.bars().len(), 12);
    }

    #[test]
    fn restore_is_deferred_to_next_tick() {
        let mut viz = seeded();
        viz.mount(800, ms(0));
        viz.tick(ms(0));
        viz.run_animation(vec![AnimationStep::compare([0, 1])], ms(0));
        viz.tick(ms(0));
        assert!(viz.bars()[0].active);

        viz.reset_array_and_animation(ms(0));
        assert!(viz.bars()[0].active, "marks survive until the deferred restore");
        let fired = viz.tick(ms(0));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].mutation, VisualMutation::RestoreDefaults);
        assert!(viz.bars().iter().all(|b| !b.active));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut viz = seeded();
        viz.set_bar_count(3);
        viz.mount(800, ms(0));
        viz.run_animation(
            vec![AnimationStep::swap(99, 40), AnimationStep::compare([1, 7])],
            ms(0),
        );
        viz.tick(ms(10));
        assert_eq!(viz.bars().len(), 3);
        assert!(viz.is_animation_complete());
    }

    #[test]
    fn run_selected_plays_to_sorted_bars() {
        let mut viz = seeded();
        viz.set_bar_count(16);
        viz.set_selected_algorithm(SortingAlgorithm::Merge);
        viz.mount(800, ms(0));
        let count = viz.run_selected(ms(0));
        assert!(count > 0);

        while let Some(at) = viz.next_event_at() {
            viz.tick(at);
        }

        let mut expected = viz.dataset().to_vec();
        expected.sort_unstable();
        let heights: Vec<u32> = viz.bars().iter().map(|b| b.height).collect();
        assert_eq!(heights, expected);
        assert_eq!(viz.playback_state(), PlaybackState::Complete);
        assert!(viz.bars().iter().all(|b| !b.active));
    }

    #[test]
    fn next_event_includes_resize_deadline() {
        let mut viz = seeded();
        viz.mount(800, ms(0));
        viz.tick(ms(0));
        assert_eq!(viz.next_event_at(), None);
        viz.on_resize(900, ms(40));
        assert_eq!(viz.next_event_at(), Some(ms(140)));
    }
}
