//! Criterion benchmarks for SortViz hot paths.
//!
//! Benchmarks:
//! 1. Step production per algorithm
//! 2. Scheduling a full playback
//! 3. Draining a scheduled playback to completion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use sortviz_core::{SortingAlgorithm, Visualizer, VisualizerConfig};

// ── Helpers ──────────────────────────────────────────────────────────

fn mounted(bars: usize) -> Visualizer {
    let mut viz = Visualizer::new(VisualizerConfig {
        seed: Some(99),
        max_bars: 1_000,
        ..VisualizerConfig::default()
    });
    viz.set_bar_count(bars);
    viz.mount(1_200, Duration::ZERO);
    viz.tick(Duration::ZERO);
    viz
}

// ── 1. Step production ───────────────────────────────────────────────

fn bench_producers(c: &mut Criterion) {
    let mut group = c.benchmark_group("producers");
    let viz = mounted(200);
    let data = viz.dataset().to_vec();
    for alg in SortingAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(alg.id()), &data, |b, data| {
            b.iter(|| black_box(alg.animations(black_box(data))))
        });
    }
    group.finish();
}

// ── 2/3. Scheduling and draining ─────────────────────────────────────

fn bench_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");
    for bars in [50usize, 200] {
        let base = mounted(bars);
        let steps = SortingAlgorithm::Bubble.animations(base.dataset());

        group.bench_with_input(BenchmarkId::new("schedule", bars), &steps, |b, steps| {
            b.iter(|| {
                let mut viz = mounted(bars);
                viz.run_animation(steps.clone(), Duration::ZERO);
                black_box(viz.pending_events())
            })
        });

        group.bench_with_input(BenchmarkId::new("drain", bars), &steps, |b, steps| {
            b.iter(|| {
                let mut viz = mounted(bars);
                viz.run_animation(steps.clone(), Duration::ZERO);
                let mut fired = 0;
                while let Some(at) = viz.next_event_at() {
                    fired += viz.tick(at).len();
                }
                black_box(fired)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_producers, bench_playback);
criterion_main!(benches);
