//! Playback scheduling scenarios driven on a virtual clock.

use std::time::Duration;

use sortviz_core::{
    AnimationStep, FiredMutation, PlaybackState, Visualizer, VisualizerConfig, VisualMutation,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn mounted(bars: usize, speed: f64) -> Visualizer {
    let mut viz = Visualizer::new(VisualizerConfig {
        seed: Some(2024),
        ..VisualizerConfig::default()
    });
    viz.set_bar_count(bars);
    viz.set_animation_speed(speed);
    viz.mount(800, ms(0));
    // Drain the deferred restore from mount.
    viz.tick(ms(0));
    viz
}

fn drain(viz: &mut Visualizer) -> Vec<FiredMutation> {
    let mut fired = Vec::new();
    while let Some(at) = viz.next_event_at() {
        fired.extend(viz.tick(at));
    }
    fired
}

// ── Step-by-step scenario ────────────────────────────────────────────

#[test]
fn compare_and_swap_fire_on_schedule() {
    let mut viz = mounted(10, 200.0);
    assert_eq!(viz.animation_delay(), ms(1));

    viz.run_animation(
        vec![AnimationStep::compare([0, 1]), AnimationStep::swap(2, 50)],
        ms(0),
    );
    assert_eq!(viz.playback_state(), PlaybackState::Sorting);
    assert!(viz.requires_reset());

    let t0 = viz.tick(ms(0));
    assert_eq!(
        t0,
        vec![FiredMutation {
            at: ms(0),
            mutation: VisualMutation::Activate { indices: vec![0, 1] },
        }]
    );
    assert!(viz.bars()[0].active && viz.bars()[1].active);

    let t1: Vec<VisualMutation> = viz.tick(ms(1)).into_iter().map(|f| f.mutation).collect();
    assert_eq!(t1.len(), 2);
    assert!(t1.contains(&VisualMutation::Deactivate { indices: vec![0, 1] }));
    assert!(t1.contains(&VisualMutation::SetHeight { index: 2, height: 50 }));
    assert!(!viz.bars()[0].active && !viz.bars()[1].active);
    assert_eq!(viz.bars()[2].height, 50);
    assert!(viz.is_sorting());

    let t2 = viz.tick(ms(2));
    assert_eq!(
        t2,
        vec![FiredMutation {
            at: ms(2),
            mutation: VisualMutation::PlaybackComplete,
        }]
    );
    assert!(!viz.is_sorting());
    assert!(viz.is_animation_complete());
    assert_eq!(viz.playback_state(), PlaybackState::Complete);
}

#[test]
fn nothing_fires_between_deadlines() {
    let mut viz = mounted(10, 100.0);
    viz.run_animation(vec![AnimationStep::swap(0, 40), AnimationStep::swap(1, 41)], ms(0));
    viz.tick(ms(0));
    assert!(viz.tick(ms(1)).is_empty());
    assert_eq!(viz.tick(ms(2)).len(), 1);
}

// ── Completion timing ────────────────────────────────────────────────

#[test]
fn completion_fires_last_at_length_times_delay() {
    let mut viz = mounted(20, 100.0);
    let delay = viz.animation_delay();
    let steps: Vec<AnimationStep> = (0..8)
        .map(|i| {
            if i % 2 == 0 {
                AnimationStep::compare([i, i + 1])
            } else {
                AnimationStep::swap(i, 60)
            }
        })
        .collect();
    let len = steps.len() as u32;

    viz.run_animation(steps, ms(5));
    let fired = drain(&mut viz);

    let (last, rest) = fired.split_last().unwrap();
    assert_eq!(last.mutation, VisualMutation::PlaybackComplete);
    assert_eq!(last.at, ms(5) + delay * len);
    assert!(rest.iter().all(|f| f.at <= last.at));
    assert!(rest.windows(2).all(|w| w[0].at <= w[1].at));
}

#[test]
fn empty_playback_completes_immediately() {
    let mut viz = mounted(5, 200.0);
    viz.run_animation(Vec::new(), ms(3));
    assert!(viz.is_sorting());
    let fired = viz.tick(ms(3));
    assert_eq!(fired.len(), 1);
    assert!(viz.is_animation_complete());
}

// ── Reset semantics ──────────────────────────────────────────────────

#[test]
fn reset_during_playback_cancels_everything() {
    let mut viz = mounted(10, 100.0);
    viz.run_animation(
        vec![
            AnimationStep::compare([0, 1]),
            AnimationStep::swap(3, 99),
            AnimationStep::swap(4, 98),
        ],
        ms(0),
    );
    viz.tick(ms(0));
    assert!(viz.is_sorting());

    viz.reset_array_and_animation(ms(1));
    assert_eq!(viz.playback_state(), PlaybackState::Idle);
    assert_eq!(viz.pending_events(), 1, "only the deferred restore remains");

    let fired = drain(&mut viz);
    assert_eq!(
        fired.iter().map(|f| &f.mutation).collect::<Vec<_>>(),
        vec![&VisualMutation::RestoreDefaults]
    );
    assert!(!viz.is_animation_complete(), "stale completion must not fire");
    assert!(viz.bars().iter().all(|b| !b.active));
}

#[test]
fn reset_twice_is_idle_with_fresh_data() {
    let mut viz = mounted(30, 200.0);
    viz.reset_array_and_animation(ms(1));
    let first_gen = viz.generation();
    assert_eq!(viz.dataset().len(), 30);
    assert_eq!(viz.playback_state(), PlaybackState::Idle);

    viz.reset_array_and_animation(ms(1));
    assert_eq!(viz.generation(), first_gen + 1);
    assert_eq!(viz.dataset().len(), 30);
    assert!(!viz.is_sorting());
    assert!(!viz.is_animation_complete());
    assert_eq!(viz.pending_events(), 1);
}

#[test]
fn reset_after_complete_allows_another_run() {
    let mut viz = mounted(8, 400.0);
    viz.run_selected(ms(0));
    drain(&mut viz);
    assert!(viz.requires_reset());

    viz.reset_array_and_animation(ms(50));
    assert!(!viz.requires_reset());
    viz.run_selected(ms(50));
    drain(&mut viz);
    assert_eq!(viz.playback_state(), PlaybackState::Complete);
}

// ── Resize debounce ──────────────────────────────────────────────────

#[test]
fn resize_burst_triggers_single_reset() {
    let mut viz = mounted(10, 200.0);
    let start_gen = viz.generation();
    let mut reset_times = Vec::new();

    for t in 0..=400u64 {
        if [0, 30, 60, 90].contains(&t) {
            viz.on_resize(900 + t as u32, ms(t));
        }
        let before = viz.generation();
        viz.tick(ms(t));
        if viz.generation() != before {
            reset_times.push(t);
        }
    }

    assert_eq!(reset_times, vec![190]);
    assert_eq!(viz.generation(), start_gen + 1);
    assert_eq!(viz.viewport_height(), 990);
    assert_eq!(viz.vertical_budget(), 670);
}

#[test]
fn resize_reset_invalidates_running_playback() {
    let mut viz = mounted(10, 100.0);
    let steps: Vec<AnimationStep> = (0..500).map(|i| AnimationStep::swap(i % 10, 77)).collect();
    viz.run_animation(steps, ms(0));
    viz.on_resize(1200, ms(0));

    viz.tick(ms(99));
    assert!(viz.is_sorting());
    viz.tick(ms(100));
    assert_eq!(viz.playback_state(), PlaybackState::Idle);

    drain(&mut viz);
    assert_eq!(viz.playback_state(), PlaybackState::Idle);
    assert!(viz.dataset().iter().all(|&h| (35..=880).contains(&h)));
}

// ── Delay bounds ─────────────────────────────────────────────────────

#[test]
fn delay_formula_at_speed_bounds() {
    let mut viz = mounted(10, 100.0);
    let config = viz.config().clone();

    viz.set_animation_speed(config.min_speed);
    let slowest = viz.animation_delay();
    viz.set_animation_speed(config.max_speed);
    let fastest = viz.animation_delay();

    // (1 / 100) * 200 = 2ms and (1 / 400) * 200 = 0.5ms
    assert_eq!(slowest, Duration::from_millis(2));
    assert_eq!(fastest, Duration::from_micros(500));
    assert!(slowest > fastest);
}
