//! Application state: single-owner, main-thread only.
//!
//! The controller lives in a [`VisualizerContext`]; everything else here is
//! presentation state (focus, overlays, status line, log history).

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use log::Level;
use serde::{Deserialize, Serialize};

use sortviz_core::{Visualizer, VisualizerContext, VisualizerError};

use crate::logger::LogEvent;
use crate::ui::widgets::slider::Slider;

/// Abstract height units per terminal row, used to size the dataset budget.
pub const UNITS_PER_ROW: u32 = 16;

const LOG_HISTORY_CAP: usize = 50;

/// Convert a terminal height in rows to viewport units.
pub fn viewport_units(rows: u16) -> u32 {
    u32::from(rows) * UNITS_PER_ROW
}

/// Which slider has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlFocus {
    Speed,
    Bars,
}

impl ControlFocus {
    pub fn toggle(self) -> Self {
        match self {
            ControlFocus::Speed => ControlFocus::Bars,
            ControlFocus::Bars => ControlFocus::Speed,
        }
    }

    /// Build the slider for this control from the controller's current values.
    ///
    /// Disabled while a playback is in progress.
    pub fn slider(self, viz: &Visualizer) -> Slider<'static> {
        let config = viz.config();
        match self {
            ControlFocus::Speed => Slider::new("Slow", "Fast")
                .bounds(config.min_speed, config.max_speed)
                .step(10.0)
                .value(viz.animation_speed())
                .disabled(viz.is_sorting()),
            ControlFocus::Bars => Slider::new("Few", "Many")
                .bounds(config.min_bars as f64, config.max_bars as f64)
                .step(5.0)
                .value(viz.bar_count() as f64)
                .disabled(viz.is_sorting()),
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A log line captured for the log overlay.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub level: Level,
    pub message: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Logs,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub context: VisualizerContext,
    pub focus: ControlFocus,
    pub overlay: Overlay,

    pub status_message: Option<(String, StatusLevel)>,
    pub log_history: VecDeque<LogRecord>,
    pub log_scroll: usize,
    log_rx: Option<Receiver<LogEvent>>,

    started: Instant,
}

impl AppState {
    pub fn new(log_rx: Option<Receiver<LogEvent>>) -> Self {
        Self {
            running: true,
            context: VisualizerContext::empty(),
            focus: ControlFocus::Speed,
            overlay: Overlay::None,
            status_message: None,
            log_history: VecDeque::with_capacity(LOG_HISTORY_CAP),
            log_scroll: 0,
            log_rx,
            started: Instant::now(),
        }
    }

    /// Session clock fed to the controller.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn visualizer(&self) -> Result<&Visualizer, VisualizerError> {
        self.context.get()
    }

    pub fn visualizer_mut(&mut self) -> Result<&mut Visualizer, VisualizerError> {
        self.context.get_mut()
    }

    /// Pull pending log events into the history. Warnings and errors are
    /// mirrored to the status line.
    pub fn drain_logs(&mut self) {
        let events: Vec<LogEvent> = match &self.log_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.push_log(event.level, event.message);
        }
    }

    /// Push a record to the history, capping at 50.
    pub fn push_log(&mut self, level: Level, message: String) {
        match level {
            Level::Error => self.status_message = Some((message.clone(), StatusLevel::Error)),
            Level::Warn => self.status_message = Some((message.clone(), StatusLevel::Warning)),
            _ => {}
        }
        self.log_history.push_front(LogRecord {
            timestamp: chrono::Local::now().naive_local(),
            level,
            message,
        });
        if self.log_history.len() > LOG_HISTORY_CAP {
            self.log_history.pop_back();
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
