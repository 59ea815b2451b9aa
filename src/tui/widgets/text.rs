//! Styled single-line text: headings and field labels.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::Theme;

/// A line of text with heading/label styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<'a> {
    content: &'a str,
    uppercase: bool,
    bold: bool,
    muted: bool,
}

impl<'a> Text<'a> {
    /// Plain text in the theme's text color.
    #[must_use]
    pub const fn new(content: &'a str) -> Self {
        Self {
            content,
            uppercase: false,
            bold: false,
            muted: false,
        }
    }

    /// Render in upper case.
    pub const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Render in bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Render in the muted label color.
    pub const fn muted(mut self) -> Self {
        self.muted = true;
        self
    }

    /// Text as it will appear on screen
    #[must_use]
    pub fn display(&self) -> String {
        if self.uppercase {
            self.content.to_uppercase()
        } else {
            self.content.to_string()
        }
    }

    /// Render the text into the first row of `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut style = Style::default().fg(if self.muted {
            theme.text_muted
        } else {
            theme.text
        });
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        f.render_widget(Paragraph::new(Line::styled(self.display(), style)), area);
    }
}
