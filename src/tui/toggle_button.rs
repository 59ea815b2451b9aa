//! Arrow button that opens and closes the settings panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::ClickEvent;
use super::Theme;

/// Stateless toggle affordance. The open flag is passed in for rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowButton;

impl ArrowButton {
    /// Arrow glyph for the given state: points at the panel edge when closed.
    #[must_use]
    pub const fn glyph(is_open: bool) -> &'static str {
        if is_open {
            "▶"
        } else {
            "◀"
        }
    }

    /// Returns true when the click activates the button.
    ///
    /// An activating click is marked handled so no outer handler sees it.
    pub fn handle_click(click: &mut ClickEvent, area: Rect) -> bool {
        if click.is_inside(area) {
            click.stop_propagation();
            true
        } else {
            false
        }
    }

    /// Render the button.
    pub fn render(f: &mut Frame, area: Rect, is_open: bool, focused: bool, theme: &Theme) {
        let border = if focused { theme.accent } else { theme.primary };
        let paragraph = Paragraph::new(Self::glyph(is_open))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.primary)
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_inside_activates_and_stops_propagation() {
        let mut click = ClickEvent::new(3, 2);
        assert!(ArrowButton::handle_click(&mut click, Rect::new(1, 1, 5, 3)));
        assert!(click.is_propagation_stopped());
    }

    #[test]
    fn test_click_outside_passes_through() {
        let mut click = ClickEvent::new(10, 2);
        assert!(!ArrowButton::handle_click(&mut click, Rect::new(1, 1, 5, 3)));
        assert!(!click.is_propagation_stopped());
    }

    #[test]
    fn test_glyph_follows_state() {
        assert_ne!(ArrowButton::glyph(true), ArrowButton::glyph(false));
    }
}
