//! Horizontal divider.

use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};

use crate::tui::Theme;

/// A full-width horizontal rule.
pub struct Separator;

impl Separator {
    /// Render the rule across the first row of `area`.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let rule = "─".repeat(area.width as usize);
        f.render_widget(
            Paragraph::new(Line::styled(rule, Style::default().fg(theme.text_muted))),
            area,
        );
    }
}
