//! SortViz CLI: headless playback on a virtual clock.
//!
//! Commands:
//! - `plan` plays one algorithm to completion and prints every fired mutation
//! - `algorithms` lists the available step producers

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use sortviz_core::{
    FiredMutation, PlaybackState, SortingAlgorithm, VisualMutation, Visualizer, VisualizerConfig,
};

#[derive(Parser)]
#[command(name = "sortviz", about = "SortViz CLI: sorting playback without a terminal UI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an algorithm on a fresh dataset and print the fired timeline.
    Plan {
        /// Algorithm id: bubble, insertion, selection, merge, quick.
        #[arg(long, default_value = "bubble")]
        algorithm: String,

        /// Number of bars. Defaults to the configured default.
        #[arg(long)]
        bars: Option<usize>,

        /// Animation speed. Defaults to the configured default.
        #[arg(long)]
        speed: Option<f64>,

        /// Viewport height in layout units.
        #[arg(long, default_value_t = 800)]
        viewport: u32,

        /// Seed for reproducible datasets. Overrides the config seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the available algorithms.
    Algorithms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            algorithm,
            bars,
            speed,
            viewport,
            seed,
            format,
            config,
        } => run_plan(PlanArgs {
            algorithm,
            bars,
            speed,
            viewport,
            seed,
            format,
            config,
        }),
        Commands::Algorithms => {
            run_algorithms();
            Ok(())
        }
    }
}

struct PlanArgs {
    algorithm: String,
    bars: Option<usize>,
    speed: Option<f64>,
    viewport: u32,
    seed: Option<u64>,
    format: OutputFormat,
    config: Option<PathBuf>,
}

/// Everything a finished headless playback produced.
#[derive(Debug, Serialize)]
struct PlanReport {
    algorithm: SortingAlgorithm,
    speed: f64,
    delay_us: u64,
    initial: Vec<u32>,
    steps: usize,
    events: Vec<EventRow>,
    final_heights: Vec<u32>,
    state: PlaybackState,
}

/// One fired mutation, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct EventRow {
    at_ms: f64,
    kind: &'static str,
    indices: String,
    index: Option<usize>,
    height: Option<u32>,
}

impl From<&FiredMutation> for EventRow {
    fn from(fired: &FiredMutation) -> Self {
        let (indices, index, height) = match &fired.mutation {
            VisualMutation::Activate { indices } | VisualMutation::Deactivate { indices } => {
                (join_indices(indices), None, None)
            }
            VisualMutation::SetHeight { index, height } => (String::new(), Some(*index), Some(*height)),
            VisualMutation::RestoreDefaults | VisualMutation::PlaybackComplete => {
                (String::new(), None, None)
            }
        };
        EventRow {
            at_ms: duration_ms(fired.at),
            kind: fired.mutation.label(),
            indices,
            index,
            height,
        }
    }
}

fn join_indices(indices: &[usize]) -> String {
    let parts: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    parts.join(" ")
}

fn duration_ms(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

fn run_plan(args: PlanArgs) -> Result<()> {
    let Some(algorithm) = SortingAlgorithm::parse(&args.algorithm) else {
        let valid: Vec<&str> = SortingAlgorithm::ALL.iter().map(|a| a.id()).collect();
        bail!("unknown algorithm '{}'. Valid: {}", args.algorithm, valid.join(", "));
    };

    let mut config = match &args.config {
        Some(path) => VisualizerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => VisualizerConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if let Some(bars) = args.bars {
        if !(config.min_bars..=config.max_bars).contains(&bars) {
            bail!(
                "--bars must be within {}..={}, got {bars}",
                config.min_bars,
                config.max_bars
            );
        }
    }
    if let Some(speed) = args.speed {
        if !(config.min_speed..=config.max_speed).contains(&speed) {
            bail!(
                "--speed must be within {}..={}, got {speed}",
                config.min_speed,
                config.max_speed
            );
        }
    }

    let report = play(config, algorithm, args.bars, args.speed, args.viewport);

    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => write_csv(&report.events, io::stdout())?,
    }
    Ok(())
}

/// Mount, play, and drain a session on a virtual clock.
fn play(
    config: VisualizerConfig,
    algorithm: SortingAlgorithm,
    bars: Option<usize>,
    speed: Option<f64>,
    viewport: u32,
) -> PlanReport {
    let mut viz = Visualizer::new(config);
    viz.set_selected_algorithm(algorithm);
    if let Some(bars) = bars {
        viz.set_bar_count(bars);
    }
    if let Some(speed) = speed {
        viz.set_animation_speed(speed);
    }

    let start = Duration::ZERO;
    viz.mount(viewport, start);
    // Settle the deferred restore from mount before playback starts.
    viz.tick(start);

    let initial = viz.dataset().to_vec();
    let steps = viz.run_selected(start);

    let mut events = Vec::new();
    while let Some(at) = viz.next_event_at() {
        events.extend(viz.tick(at).iter().map(EventRow::from));
    }
    log::info!("{} plan drained: {} steps, {} events", algorithm.label(), steps, events.len());

    PlanReport {
        algorithm,
        speed: viz.animation_speed(),
        delay_us: viz.animation_delay().as_micros() as u64,
        initial,
        steps,
        events,
        final_heights: viz.bars().iter().map(|b| b.height).collect(),
        state: viz.playback_state(),
    }
}

fn print_text(report: &PlanReport) {
    println!("Algorithm: {} ({})", report.algorithm.label(), report.algorithm.complexity());
    println!("Speed:     {} (step delay {} us)", report.speed, report.delay_us);
    println!("Steps:     {}", report.steps);
    println!("Initial:   {:?}", report.initial);
    println!();
    println!("{:>10}  {:<18} {}", "t (ms)", "Mutation", "Target");
    println!("{}", "-".repeat(44));
    for row in &report.events {
        let target = match (row.index, row.height) {
            (Some(index), Some(height)) => format!("[{index}] = {height}"),
            _ => row.indices.clone(),
        };
        println!("{:>10.3}  {:<18} {}", row.at_ms, row.kind, target);
    }
    println!();
    println!("Final:     {:?}", report.final_heights);
    println!("State:     {}", report.state.label());
}

fn write_csv<W: io::Write>(rows: &[EventRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn run_algorithms() {
    println!("{:<10} {:<16} {}", "Id", "Name", "Complexity");
    println!("{}", "-".repeat(40));
    for algorithm in SortingAlgorithm::ALL {
        println!(
            "{:<10} {:<16} {}",
            algorithm.id(),
            algorithm.label(),
            algorithm.complexity()
        );
    }
}
