//! Dropdown selection control.
//!
//! Renders as a bordered box showing the selected option; when open, an
//! option list is drawn over whatever lies below (or above) the box.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::SettingOption;
use crate::tui::component::ClickEvent;
use crate::tui::Theme;

use super::{swatch, wrap_step};

/// Events that can be returned from dropdown input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    /// Option list was opened
    Opened,
    /// Option list was closed without choosing
    Closed,
    /// Highlight moved inside the open list
    Highlighted(usize),
    /// User chose an option
    Selected(SettingOption),
}

/// Dropdown over a static option list.
#[derive(Debug, Clone)]
pub struct Select {
    title: &'static str,
    options: &'static [SettingOption],
    open: bool,
    highlighted: usize,
}

impl Select {
    /// Creates a closed dropdown.
    #[must_use]
    pub const fn new(title: &'static str, options: &'static [SettingOption]) -> Self {
        Self {
            title,
            options,
            open: false,
            highlighted: 0,
        }
    }

    /// Label of the dropdown
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Whether the option list is showing
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the highlighted option in the open list
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Opens the list with the current selection highlighted.
    pub fn open(&mut self, selected: SettingOption) {
        self.highlighted = self.index_of(selected).unwrap_or(0);
        self.open = true;
    }

    /// Closes the list without choosing.
    pub fn close(&mut self) {
        self.open = false;
    }

    fn index_of(&self, option: SettingOption) -> Option<usize> {
        self.options.iter().position(|o| *o == option)
    }

    fn step(&self, selected: SettingOption, forward: bool) -> Option<SettingOption> {
        let index = self.index_of(selected).unwrap_or(0);
        self.options
            .get(wrap_step(index, self.options.len(), forward))
            .copied()
    }

    /// Handle a keyboard event while the dropdown has focus.
    ///
    /// Closed: Enter/Space opens the list, arrows and hjkl change the selection
    /// directly. Open: arrows move the highlight, Enter/Space chooses, Esc closes.
    pub fn handle_key(&mut self, key: KeyEvent, selected: SettingOption) -> Option<SelectEvent> {
        if self.open {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.highlighted = wrap_step(self.highlighted, self.options.len(), false);
                    Some(SelectEvent::Highlighted(self.highlighted))
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.highlighted = wrap_step(self.highlighted, self.options.len(), true);
                    Some(SelectEvent::Highlighted(self.highlighted))
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open = false;
                    self.options
                        .get(self.highlighted)
                        .map(|option| SelectEvent::Selected(*option))
                }
                KeyCode::Esc => {
                    self.open = false;
                    Some(SelectEvent::Closed)
                }
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open(selected);
                    Some(SelectEvent::Opened)
                }
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
                    self.step(selected, false).map(SelectEvent::Selected)
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
                    self.step(selected, true).map(SelectEvent::Selected)
                }
                _ => None,
            }
        }
    }

    /// Handle a click.
    ///
    /// `control` is the box area and `list` the area the open list occupies.
    /// While open, any click either chooses an option or closes the list.
    pub fn handle_click(
        &mut self,
        click: &ClickEvent,
        control: Rect,
        list: Rect,
        selected: SettingOption,
    ) -> Option<SelectEvent> {
        if self.open {
            self.open = false;
            if let Some(index) = self.option_at(click, list) {
                return self.options.get(index).map(|option| SelectEvent::Selected(*option));
            }
            return Some(SelectEvent::Closed);
        }
        if click.is_inside(control) {
            self.open(selected);
            return Some(SelectEvent::Opened);
        }
        None
    }

    /// Height the open list wants, borders included.
    #[must_use]
    pub fn list_height(&self) -> u16 {
        u16::try_from(self.options.len()).unwrap_or(u16::MAX).saturating_add(2)
    }

    /// First visible option for a list showing `visible` rows.
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        self.highlighted.saturating_sub(visible - 1)
    }

    /// Maps a click to an option index in the open list.
    #[must_use]
    pub fn option_at(&self, click: &ClickEvent, list: Rect) -> Option<usize> {
        let rows = Rect {
            x: list.x.saturating_add(1),
            y: list.y.saturating_add(1),
            width: list.width.saturating_sub(2),
            height: list.height.saturating_sub(2),
        };
        if !click.is_inside(rows) {
            return None;
        }
        let index = self.scroll_offset(rows.height as usize) + (click.row - rows.y) as usize;
        (index < self.options.len()).then_some(index)
    }

    /// Render the closed box.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        selected: SettingOption,
        focused: bool,
        theme: &Theme,
    ) {
        let border = if focused || self.open {
            theme.accent
        } else {
            theme.text_muted
        };
        let arrow = if self.open { "▲" } else { "▼" };

        let mut spans: Vec<Span> = swatch(&selected).into_iter().collect();
        spans.push(Span::styled(selected.title, Style::default().fg(theme.text)));

        let inner_width = area.width.saturating_sub(2) as usize;
        let used: usize = spans.iter().map(Span::width).sum();
        spans.push(Span::raw(" ".repeat(inner_width.saturating_sub(used + 1))));
        spans.push(Span::styled(arrow, Style::default().fg(border)));

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(paragraph, area);
    }

    /// Render the open option list.
    pub fn render_list(&self, f: &mut Frame, list: Rect, selected: SettingOption, theme: &Theme) {
        if !self.open || list.height < 3 {
            return;
        }
        f.render_widget(Clear, list);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                let mut spans: Vec<Span> = swatch(option).into_iter().collect();
                let style = if *option == selected {
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                spans.push(Span::styled(option.title, style));
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list_widget = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .style(Style::default().bg(theme.surface)),
            )
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol("► ");

        let visible = list.height.saturating_sub(2) as usize;
        let mut state = ListState::default()
            .with_offset(self.scroll_offset(visible))
            .with_selected(Some(self.highlighted));
        f.render_stateful_widget(list_widget, list, &mut state);
    }
}
