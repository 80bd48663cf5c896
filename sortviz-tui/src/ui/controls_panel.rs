//! Controls: algorithm selector plus the speed and bar-count sliders.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use sortviz_core::{SortingAlgorithm, Visualizer};

use crate::app::{AppState, ControlFocus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, viz: &Visualizer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Controls ")
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(algorithm_line(viz)), rows[0]);

    for (row, focus) in [(rows[1], ControlFocus::Speed), (rows[2], ControlFocus::Bars)] {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(10), Constraint::Length(8)])
            .split(row);

        let is_focused = app.focus == focus;
        let (name, value) = match focus {
            ControlFocus::Speed => ("Speed", format!("{:.0}", viz.animation_speed())),
            ControlFocus::Bars => ("Bars", viz.bar_count().to_string()),
        };
        let name_style = if is_focused {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };

        f.render_widget(
            Paragraph::new(Span::styled(format!("{name:>12}: "), name_style)),
            cols[0],
        );
        f.render_widget(focus.slider(viz).focused(is_focused), cols[1]);
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {value}"), name_style)),
            cols[2],
        );
    }
}

fn algorithm_line(viz: &Visualizer) -> Line<'static> {
    let selected = viz.selected_algorithm();
    let mut spans = vec![Span::styled(format!("{:>12}: ", "Algorithm"), theme::muted())];
    for alg in SortingAlgorithm::ALL {
        let style = if alg == selected {
            theme::accent_bold()
        } else if viz.is_sorting() {
            theme::muted()
        } else {
            theme::neutral()
        };
        spans.push(Span::styled(format!(" {} ", alg.id()), style));
    }
    let action = if viz.requires_reset() { "reset" } else { "sort" };
    spans.push(Span::styled(format!("   [space] {action}"), theme::muted()));
    Line::from(spans)
}
