//! Custom logger that routes records into the TUI log history.
//!
//! Writing to stderr would corrupt the alternate screen, so records are sent
//! over a channel and drained by the main loop each frame.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use log::{Level, LevelFilter, Metadata, Record};

/// A log record in transit to the UI.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
}

static LOG_SENDER: Mutex<Option<Sender<LogEvent>>> = Mutex::new(None);

struct TuiLogger;

impl log::Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(guard) = LOG_SENDER.lock() {
            if let Some(sender) = guard.as_ref() {
                let _ = sender.send(LogEvent {
                    level: record.level(),
                    message: record.args().to_string(),
                });
            }
        }
    }

    fn flush(&self) {}
}

static TUI_LOGGER: TuiLogger = TuiLogger;

/// Install the logger and return the receiving end of its channel.
///
/// The level defaults to Info and can be overridden with `RUST_LOG`.
/// Returns `None` if another logger is already installed.
pub fn init() -> Option<Receiver<LogEvent>> {
    let (tx, rx) = mpsc::channel();
    if let Ok(mut guard) = LOG_SENDER.lock() {
        *guard = Some(tx);
    }
    if log::set_logger(&TUI_LOGGER).is_err() {
        return None;
    }
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
    Some(rx)
}
