//! Parrot/neon theme tokens.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, highlights)
//! - **Positive**: Neon green (sorted bars, completion)
//! - **Negative**: Hot pink (bars under comparison, errors)
//! - **Warning**: Neon orange (locked controls, alerts)
//! - **Neutral**: Cool purple (bars at rest, secondary info)
//! - **Muted**: Steel blue (disabled, hints)

use ratatui::style::{Color, Modifier, Style};

use sortviz_core::PlaybackState;

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Bar color: compared bars stand out, a finished playback turns everything green.
pub fn bar_color(active: bool, state: PlaybackState) -> Color {
    match (active, state) {
        (true, _) => NEGATIVE,
        (false, PlaybackState::Complete) => POSITIVE,
        (false, _) => NEUTRAL,
    }
}

pub fn state_style(state: PlaybackState) -> Style {
    match state {
        PlaybackState::Idle => neutral(),
        PlaybackState::Sorting => warning().add_modifier(Modifier::BOLD),
        PlaybackState::Complete => positive().add_modifier(Modifier::BOLD),
    }
}
