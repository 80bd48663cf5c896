//! Labeled horizontal slider widget.
//!
//! Stateless: the caller owns the value and passes it in on every frame.
//! Input is translated into a new value and reported through a change
//! handler; the slider never stores it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme;

/// A keyboard interaction with a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderInput {
    Decrease,
    Increase,
    Min,
    Max,
}

#[derive(Debug, Clone)]
pub struct Slider<'a> {
    first_text: &'a str,
    last_text: &'a str,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    disabled: bool,
    focused: bool,
}

impl<'a> Slider<'a> {
    pub fn new(first_text: &'a str, last_text: &'a str) -> Self {
        Self {
            first_text,
            last_text,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
            disabled: false,
            focused: false,
        }
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Translate `input` into a new value and hand it to `on_change`.
    ///
    /// Does nothing when disabled or when the value would not change.
    pub fn handle(&self, input: SliderInput, mut on_change: impl FnMut(f64)) {
        if self.disabled {
            return;
        }
        let next = match input {
            SliderInput::Decrease => self.value - self.step,
            SliderInput::Increase => self.value + self.step,
            SliderInput::Min => self.min,
            SliderInput::Max => self.max,
        }
        .clamp(self.min, self.max);

        if next != self.value {
            on_change(next);
        }
    }

    /// `[=====     ]` with `width` cells between the brackets.
    pub fn track(&self, width: usize) -> String {
        let range = self.max - self.min;
        if range <= 0.0 {
            return format!("[{}]", "=".repeat(width));
        }
        let frac = ((self.value - self.min) / range).clamp(0.0, 1.0);
        let filled = (frac * width as f64).round() as usize;
        let empty = width.saturating_sub(filled);
        format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
    }
}

impl Widget for Slider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = self.first_text.len() + self.last_text.len() + 4;
        let track_width = (area.width as usize).saturating_sub(label_width).max(1);

        let (label_style, track_style) = if self.disabled {
            (theme::muted(), theme::muted())
        } else if self.focused {
            (theme::accent_bold(), theme::accent())
        } else {
            (theme::neutral(), theme::neutral())
        };

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.first_text), label_style),
            Span::styled(self.track(track_width), track_style),
            Span::styled(format!(" {}", self.last_text), label_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
