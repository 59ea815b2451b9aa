//! Form action button.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::Theme;

/// What a button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Restores defaults
    Reset,
    /// Commits the form
    Submit,
}

/// A bordered, centered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// Caption
    pub title: &'static str,
    /// Role of the button
    pub kind: ButtonKind,
}

impl Button {
    /// Creates a button.
    #[must_use]
    pub const fn new(title: &'static str, kind: ButtonKind) -> Self {
        Self { title, kind }
    }

    /// Render the button. Submit buttons are filled, reset buttons outlined.
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border = if focused { theme.accent } else { theme.primary };
        let style = match self.kind {
            ButtonKind::Submit => Style::default()
                .fg(theme.background)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
            ButtonKind::Reset => Style::default().fg(theme.primary).bg(theme.surface),
        };

        let caption = if focused {
            format!("[ {} ]", self.title)
        } else {
            self.title.to_string()
        };

        let paragraph = Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(paragraph, area);
    }
}
