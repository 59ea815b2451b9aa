//! Radio group: all options visible on one row, exactly one marked.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::SettingOption;
use crate::tui::component::ClickEvent;
use crate::tui::Theme;

use super::wrap_step;

/// Gap between two options on the row
const OPTION_GAP: u16 = 2;

/// Radio group over a static option list.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    title: &'static str,
    options: &'static [SettingOption],
}

impl RadioGroup {
    /// Creates a radio group.
    #[must_use]
    pub const fn new(title: &'static str, options: &'static [SettingOption]) -> Self {
        Self { title, options }
    }

    /// Label of the group
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Hit areas of each option inside the bordered `area`, in option order.
    ///
    /// Options that do not fit on the row get an empty area.
    #[must_use]
    pub fn option_areas(&self, area: Rect) -> Vec<Rect> {
        let row_y = area.y.saturating_add(1);
        let right = area.x.saturating_add(area.width).saturating_sub(1);
        let mut x = area.x.saturating_add(1);

        self.options
            .iter()
            .map(|option| {
                // "(•) " + title
                let width = u16::try_from(option.title.chars().count())
                    .unwrap_or(u16::MAX)
                    .saturating_add(4);
                if area.height < 3 || x.saturating_add(width) > right {
                    return Rect::default();
                }
                let rect = Rect::new(x, row_y, width, 1);
                x = x.saturating_add(width + OPTION_GAP);
                rect
            })
            .collect()
    }

    /// Handle a keyboard event while the group has focus.
    ///
    /// Arrows and hjkl move the mark; returns the newly marked option.
    pub fn handle_key(&self, key: KeyEvent, selected: SettingOption) -> Option<SettingOption> {
        let forward = match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => false,
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => true,
            _ => return None,
        };
        let index = self.options.iter().position(|o| *o == selected).unwrap_or(0);
        self.options
            .get(wrap_step(index, self.options.len(), forward))
            .copied()
    }

    /// Handle a click; returns the option under the cursor, if any.
    pub fn handle_click(&self, click: &ClickEvent, area: Rect) -> Option<SettingOption> {
        self.option_areas(area)
            .into_iter()
            .position(|rect| click.is_inside(rect))
            .and_then(|index| self.options.get(index).copied())
    }

    /// Render the group.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        selected: SettingOption,
        focused: bool,
        theme: &Theme,
    ) {
        let border = if focused { theme.accent } else { theme.text_muted };

        let mut spans = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(OPTION_GAP as usize)));
            }
            let (mark, style) = if *option == selected {
                ("(•) ", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
            } else {
                ("( ) ", Style::default().fg(theme.text))
            };
            spans.push(Span::styled(mark, style));
            spans.push(Span::styled(option.title, style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::FONT_SIZE_OPTIONS;
    use crossterm::event::KeyModifiers;

    fn make_group() -> RadioGroup {
        RadioGroup::new("Font size", FONT_SIZE_OPTIONS)
    }

    const AREA: Rect = Rect::new(0, 0, 40, 3);

    #[test]
    fn test_option_areas_laid_out_in_a_row() {
        let areas = make_group().option_areas(AREA);
        // "(•) 18px" is 8 cells wide, followed by a 2 cell gap
        assert_eq!(areas[0], Rect::new(1, 1, 8, 1));
        assert_eq!(areas[1], Rect::new(11, 1, 8, 1));
        assert_eq!(areas[2], Rect::new(21, 1, 8, 1));
    }

    #[test]
    fn test_option_areas_drop_what_does_not_fit() {
        let areas = make_group().option_areas(Rect::new(0, 0, 22, 3));
        assert_ne!(areas[1], Rect::default());
        assert_eq!(areas[2], Rect::default());
    }

    #[test]
    fn test_click_marks_option() {
        let group = make_group();
        assert_eq!(
            group.handle_click(&ClickEvent::new(12, 1), AREA),
            Some(FONT_SIZE_OPTIONS[1])
        );
        // Gap between options
        assert_eq!(group.handle_click(&ClickEvent::new(9, 1), AREA), None);
        // Border row
        assert_eq!(group.handle_click(&ClickEvent::new(2, 0), AREA), None);
    }

    #[test]
    fn test_arrow_keys_move_mark() {
        let group = make_group();
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::empty());
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::empty());

        assert_eq!(group.handle_key(right, FONT_SIZE_OPTIONS[2]), Some(FONT_SIZE_OPTIONS[0]));
        assert_eq!(group.handle_key(left, FONT_SIZE_OPTIONS[1]), Some(FONT_SIZE_OPTIONS[0]));

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(group.handle_key(enter, FONT_SIZE_OPTIONS[1]), None);
    }
}
