//! Overlays drawn on top of the chart: help and log history.

use log::Level;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

const HELP_KEYS: [(&str, &str); 9] = [
    ("space / enter", "Sort with the selected algorithm, or reset once done"),
    ("r", "Generate a new array"),
    ("a / A", "Next / previous algorithm"),
    ("tab / j / k", "Switch between speed and bar sliders"),
    ("h / l", "Adjust the focused slider"),
    ("H / End", "Jump the slider to its minimum / maximum"),
    ("L", "Show the log history"),
    ("?", "Show this help"),
    ("q", "Quit"),
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(Span::styled("Sorting visualizer", theme::accent_bold())),
        Line::from(Span::styled(
            "Sliders are locked while a sort is playing.",
            theme::muted(),
        )),
        Line::from(""),
    ];
    for (key, desc) in HELP_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:>14}  "), theme::accent()),
            Span::styled(desc, theme::neutral()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press any key to close", theme::muted())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Help ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

pub fn render_logs(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 80, area);
    f.render_widget(Clear, popup);

    let lines: Vec<Line> = if app.log_history.is_empty() {
        vec![Line::from(Span::styled("No log records yet.", theme::muted()))]
    } else {
        app.log_history
            .iter()
            .skip(app.log_scroll)
            .map(|record| {
                let level_style = match record.level {
                    Level::Error => theme::negative(),
                    Level::Warn => theme::warning(),
                    Level::Info => theme::accent(),
                    Level::Debug | Level::Trace => theme::muted(),
                };
                Line::from(vec![
                    Span::styled(record.timestamp.format("%H:%M:%S ").to_string(), theme::muted()),
                    Span::styled(format!("{:<5} ", record.level), level_style),
                    Span::styled(record.message.as_str(), theme::neutral()),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" Logs ({}) [j/k]scroll [Esc]close ", app.log_history.len()));
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
