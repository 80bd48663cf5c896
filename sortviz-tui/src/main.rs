//! SortViz TUI: terminal sorting visualizer.
//!
//! Layout:
//! 1. Header: playback state, algorithm complexity, step delay
//! 2. Chart: one bar per dataset index, compared bars highlighted
//! 3. Controls: algorithm selector, speed and bar-count sliders
//! 4. Status bar: key hints and the latest message

mod app;
mod input;
mod logger;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use sortviz_core::{Visualizer, VisualizerConfig};

use crate::app::{viewport_units, AppState};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let log_rx = logger::init();

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sortviz");
    let config = load_config(&config_dir.join("config.toml"))?;
    let state_path = config_dir.join("state.json");

    // Build app state and the session controller
    let mut app = AppState::new(log_rx);
    let mut viz = Visualizer::new(config);
    persistence::apply(&mut app, &mut viz, persistence::load(&state_path));
    app.context.provide(viz);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Mount: first dataset sized to the current terminal
    let rows = terminal.size()?.height;
    let now = app.now();
    app.visualizer_mut()?.mount(viewport_units(rows), now);

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Ok(viz) = app.visualizer() {
        let persisted = persistence::extract(&app, viz);
        let _ = persistence::save(&state_path, &persisted);
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_config(path: &Path) -> Result<VisualizerConfig> {
    if !path.exists() {
        return Ok(VisualizerConfig::default());
    }
    VisualizerConfig::from_file(path)
        .with_context(|| format!("loading config from {}", path.display()))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // 1. Fire due playback events and the debounced resize reset
        let now = app.now();
        app.visualizer_mut()?.tick(now);
        app.drain_logs();

        // 2. Render
        let viz = app.visualizer()?;
        terminal.draw(|f| ui::draw(f, app, viz))?;

        // 3. Poll for input events (16ms timeout for ~60 FPS playback)
        if event::poll(Duration::from_millis(16))? {
            let now = app.now();
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key, now)?,
                Event::Resize(_, rows) => input::handle_resize(app, rows, now)?,
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
