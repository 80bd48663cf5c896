//! Bar chart of the controller's bar handles.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use sortviz_core::Visualizer;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, viz: &Visualizer) {
    if viz.bars().is_empty() {
        let msg = Line::from(Span::styled("No data yet. Press r to generate.", theme::muted()));
        f.render_widget(Paragraph::new(msg), area);
        return;
    }

    let (bar_width, bar_gap) = layout_bars(area.width, viz.bars().len());
    let state = viz.playback_state();
    let bars: Vec<Bar> = viz
        .bars()
        .iter()
        .map(|b| {
            Bar::default()
                .value(u64::from(b.height))
                .text_value(String::new())
                .style(Style::default().fg(theme::bar_color(b.active, state)))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(viz.vertical_budget()));
    f.render_widget(chart, area);
}

/// Pick a bar width and gap so `count` bars fit in `width` columns.
///
/// Bars stay at least one column wide; when they cannot all fit the chart
/// clips on the right.
pub fn layout_bars(width: u16, count: usize) -> (u16, u16) {
    let count = count.max(1) as u16;
    if width >= count.saturating_mul(2) {
        let gap = 1;
        let bar = (width.saturating_sub(count.saturating_sub(1) * gap) / count).max(1);
        (bar, gap)
    } else {
        (1, 0)
    }
}
