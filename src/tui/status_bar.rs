//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Key hints while the panel is closed
const MAIN_HINTS: &[(&str, &str)] = &[("s", "Settings"), ("click ◀", "Open"), ("q", "Quit")];

/// Key hints while the panel is open
const PANEL_HINTS: &[(&str, &str)] = &[
    ("Tab", "Next"),
    ("←/→", "Change"),
    ("Enter", "Open/Select"),
    ("Ctrl+S", "Apply"),
    ("s", "Close"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if state.status_message.is_empty() {
            Line::from("")
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let hints = if state.panel.is_open() {
            PANEL_HINTS
        } else {
            MAIN_HINTS
        };

        let status = Paragraph::new(vec![status_line, Self::hints_line(hints, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .border_style(Style::default().fg(theme.text_muted))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn hints_line(hints: &[(&'static str, &'static str)], theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
