//! Top-level UI layout: header, bar chart, controls, status bar.

pub mod bars_panel;
pub mod controls_panel;
pub mod overlays;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sortviz_core::Visualizer;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState, viz: &Visualizer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], viz);

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", viz.selected_algorithm().label()))
        .title_style(theme::panel_title(true));
    let chart_inner = chart_block.inner(chunks[1]);
    f.render_widget(chart_block, chunks[1]);
    bars_panel::render(f, chart_inner, viz);

    controls_panel::render(f, chunks[2], app, viz);
    status_bar::render(f, chunks[3], app);

    // Draw overlays on top.
    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1]),
        Overlay::Logs => overlays::render_logs(f, chunks[1], app),
        Overlay::None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, viz: &Visualizer) {
    let state = viz.playback_state();
    let line = Line::from(vec![
        Span::styled(" SortViz ", theme::accent_bold()),
        Span::styled(format!("[{}] ", state.label()), theme::state_style(state)),
        Span::styled(
            format!(
                "{} | {} bars | speed {:.0} | step {:.2}ms",
                viz.selected_algorithm().complexity(),
                viz.dataset().len(),
                viz.animation_speed(),
                viz.animation_delay().as_secs_f64() * 1000.0,
            ),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
