//! Article settings panel.
//!
//! The panel owns a draft copy of the article settings and an open/closed
//! flag. Widget selections only touch the draft; the committed settings owned
//! by the parent change only when the panel emits [`SettingsPanelEvent::Applied`]
//! or [`SettingsPanelEvent::Reset`].
//!
//! While open, the panel keeps an outside-click listener on the [`Document`]
//! so a click that lands outside the panel closes it. Closing never touches
//! the draft; reopening shows the edits made before.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::models::{ArticleState, SettingField, SettingOption};
use crate::shortcuts::{Action, ShortcutRegistry, PANEL_CONTEXT};

use super::component::{ClickEvent, Component};
use super::document::Document;
use super::outside_click::OutsideClickClose;
use super::toggle_button::ArrowButton;
use super::widgets::{Button, ButtonKind, RadioGroup, Select, SelectEvent, Separator, Text};
use super::Theme;

/// Preferred panel width in columns
pub const PANEL_WIDTH: u16 = 44;
/// Toggle button width
pub const TOGGLE_WIDTH: u16 = 5;
/// Toggle button height
pub const TOGGLE_HEIGHT: u16 = 3;

const HEADING: &str = "Set parameters";
const RESET_BUTTON: Button = Button::new("Reset", ButtonKind::Reset);
const APPLY_BUTTON: Button = Button::new("Apply", ButtonKind::Submit);

/// Events emitted by the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPanelEvent {
    /// The panel was opened
    Opened,
    /// The panel was closed
    Closed,
    /// One draft field changed
    DraftEdited(SettingField),
    /// Commit this state
    Applied(ArticleState),
    /// Commit these defaults
    Reset(ArticleState),
    /// Input was consumed with no further effect
    Handled,
}

/// Which element of the panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    /// The arrow button
    #[default]
    Toggle,
    /// A field's widget
    Field(SettingField),
    /// The Reset button
    Reset,
    /// The Apply button
    Apply,
}

impl PanelFocus {
    /// Tab order
    pub const ORDER: [Self; 8] = [
        Self::Toggle,
        Self::Field(SettingField::FontFamily),
        Self::Field(SettingField::FontSize),
        Self::Field(SettingField::FontColor),
        Self::Field(SettingField::BackgroundColor),
        Self::Field(SettingField::ContentWidth),
        Self::Reset,
        Self::Apply,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[next]
    }
}

/// Screen regions of the panel for a given viewport.
///
/// Rendering and hit-testing both go through [`PanelLayout::compute`], so
/// what is drawn is what is clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    /// Arrow button
    pub toggle: Rect,
    /// Panel body; empty while closed
    pub root: Rect,
    /// "Set parameters" heading
    pub heading: Rect,
    /// Field labels, in [`SettingField::ALL`] order
    pub labels: [Rect; 5],
    /// Field widgets, in [`SettingField::ALL`] order
    pub controls: [Rect; 5],
    /// Divider between font and page settings
    pub separator: Rect,
    /// Reset button
    pub reset: Rect,
    /// Apply button
    pub apply: Rect,
}

impl PanelLayout {
    /// Computes the layout for `area`.
    ///
    /// The panel docks against the right edge. The toggle sits near the top
    /// right corner while closed and just left of the panel while open; it is
    /// never inside the panel body.
    #[must_use]
    pub fn compute(area: Rect, open: bool) -> Self {
        if !open {
            let toggle = Rect::new(
                area.right().saturating_sub(TOGGLE_WIDTH),
                area.y.saturating_add(1),
                TOGGLE_WIDTH,
                TOGGLE_HEIGHT,
            )
            .intersection(area);
            return Self {
                toggle,
                ..Self::default()
            };
        }

        let width = PANEL_WIDTH.min(area.width.saturating_sub(TOGGLE_WIDTH));
        let root = Rect::new(area.right().saturating_sub(width), area.y, width, area.height);
        let toggle = Rect::new(
            root.x.saturating_sub(TOGGLE_WIDTH),
            area.y.saturating_add(1),
            TOGGLE_WIDTH,
            TOGGLE_HEIGHT,
        )
        .intersection(area);

        let inner = Rect {
            x: root.x.saturating_add(2),
            y: root.y.saturating_add(1),
            width: root.width.saturating_sub(4),
            height: root.height.saturating_sub(2),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(4), // Font
                Constraint::Length(4), // Font size
                Constraint::Length(4), // Font color
                Constraint::Length(1), // Separator
                Constraint::Length(4), // Background color
                Constraint::Length(4), // Content width
                Constraint::Min(0),
                Constraint::Length(3), // Buttons
            ])
            .split(inner);

        let field_chunks = [chunks[1], chunks[2], chunks[3], chunks[5], chunks[6]];
        let mut labels = [Rect::default(); 5];
        let mut controls = [Rect::default(); 5];
        for (i, chunk) in field_chunks.iter().enumerate() {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(3)])
                .split(*chunk);
            labels[i] = parts[0];
            controls[i] = parts[1];
        }

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[8]);

        Self {
            toggle,
            root,
            heading: chunks[0],
            labels,
            controls,
            separator: chunks[4],
            reset: buttons[0],
            apply: buttons[1],
        }
    }

    /// Widget area of one field.
    #[must_use]
    pub const fn control(&self, field: SettingField) -> Rect {
        self.controls[field.index()]
    }

    /// Where an open dropdown list of `height` rows goes for `field`.
    ///
    /// Below the widget if it fits inside the panel, otherwise above it,
    /// otherwise on whichever side has more room, clipped.
    #[must_use]
    pub fn list_area(&self, field: SettingField, height: u16) -> Rect {
        let control = self.control(field);
        let below = self.root.bottom().saturating_sub(control.bottom());
        let above = control.y.saturating_sub(self.root.y);

        if below >= height || below >= above {
            Rect::new(control.x, control.bottom(), control.width, height.min(below))
        } else {
            let height = height.min(above);
            Rect::new(control.x, control.y - height, control.width, height)
        }
    }
}

/// Widget bound to one draft field
#[derive(Debug, Clone)]
enum FieldControl {
    Dropdown(Select),
    Radio(RadioGroup),
}

impl FieldControl {
    const fn for_field(field: SettingField) -> Self {
        match field {
            SettingField::FontSize => Self::Radio(RadioGroup::new(field.title(), field.options())),
            _ => Self::Dropdown(Select::new(field.title(), field.options())),
        }
    }
}

/// The article settings panel.
pub struct SettingsPanel {
    draft: ArticleState,
    is_open: Rc<Cell<bool>>,
    outside_click: OutsideClickClose,
    document: Document,
    focus: PanelFocus,
    controls: [FieldControl; 5],
    viewport: Rect,
    shortcuts: ShortcutRegistry,
}

impl SettingsPanel {
    /// Creates a closed panel whose draft is a copy of `committed`.
    ///
    /// Outside-click listeners are registered on `document` while open.
    #[must_use]
    pub fn new(committed: &ArticleState, document: &Document) -> Self {
        Self {
            draft: *committed,
            is_open: Rc::new(Cell::new(false)),
            outside_click: OutsideClickClose::new(),
            document: document.clone(),
            focus: PanelFocus::Toggle,
            controls: SettingField::ALL.map(FieldControl::for_field),
            viewport: Rect::default(),
            shortcuts: ShortcutRegistry::new(),
        }
    }

    /// Whether the form is showing
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    /// Current draft
    #[must_use]
    pub const fn draft(&self) -> &ArticleState {
        &self.draft
    }

    /// Element with keyboard focus
    #[must_use]
    pub const fn focus(&self) -> PanelFocus {
        self.focus
    }

    /// Layout for the current viewport and visibility.
    #[must_use]
    pub fn layout(&self) -> PanelLayout {
        PanelLayout::compute(self.viewport, self.is_open())
    }

    /// Field whose dropdown list is showing, if any.
    #[must_use]
    pub fn open_dropdown(&self) -> Option<SettingField> {
        SettingField::ALL.into_iter().find(|field| {
            matches!(&self.controls[field.index()], FieldControl::Dropdown(select) if select.is_open())
        })
    }

    /// Sets the area the panel lays itself out in.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.outside_click.set_root(self.layout().root);
    }

    /// Flips visibility.
    pub fn toggle(&mut self) -> SettingsPanelEvent {
        let open = !self.is_open();
        self.is_open.set(open);
        tracing::debug!(open, "settings panel toggled");
        self.sync_subscriptions();

        if open {
            SettingsPanelEvent::Opened
        } else {
            SettingsPanelEvent::Closed
        }
    }

    /// Replaces one draft field.
    ///
    /// Selecting the option already in the draft changes nothing. Options
    /// outside the field's list are ignored.
    pub fn select(&mut self, field: SettingField, option: SettingOption) -> SettingsPanelEvent {
        if !field.options().contains(&option) {
            tracing::warn!(field = field.key(), value = option.value, "option not in list");
            return SettingsPanelEvent::Handled;
        }
        if field.get(&self.draft) == option {
            return SettingsPanelEvent::Handled;
        }
        field.set(&mut self.draft, option);
        tracing::debug!(field = field.key(), value = option.value, "draft edited");
        SettingsPanelEvent::DraftEdited(field)
    }

    /// Commits the draft. Visibility is unchanged.
    pub fn submit(&mut self) -> SettingsPanelEvent {
        tracing::info!(draft = ?self.draft, "settings applied");
        SettingsPanelEvent::Applied(self.draft)
    }

    /// Resets the draft and commits the defaults. Visibility is unchanged.
    pub fn clear(&mut self) -> SettingsPanelEvent {
        self.draft = ArticleState::default();
        tracing::info!("settings reset to defaults");
        SettingsPanelEvent::Reset(self.draft)
    }

    /// Reconciles the outside-click listener and widget state with the open flag.
    ///
    /// Must run after anything that may have changed visibility, including
    /// document dispatch, where the listener itself closes the panel.
    pub fn sync_subscriptions(&mut self) {
        let open = self.is_open();
        if !open {
            self.collapse_dropdowns();
            self.focus = PanelFocus::Toggle;
        }

        self.outside_click.set_root(self.layout().root);
        let flag = Rc::clone(&self.is_open);
        self.outside_click
            .sync(open, &self.document, move |value| flag.set(value));
    }

    fn collapse_dropdowns(&mut self) {
        for control in &mut self.controls {
            if let FieldControl::Dropdown(select) = control {
                select.close();
            }
        }
    }

    fn move_focus(&mut self, forward: bool) -> SettingsPanelEvent {
        self.collapse_dropdowns();
        self.focus = self.focus.step(forward);
        SettingsPanelEvent::Handled
    }

    fn handle_field_key(&mut self, field: SettingField, key: KeyEvent) -> Option<SettingsPanelEvent> {
        let selected = field.get(&self.draft);
        let chosen = match &mut self.controls[field.index()] {
            FieldControl::Dropdown(select) => match select.handle_key(key, selected)? {
                SelectEvent::Selected(option) => option,
                SelectEvent::Opened | SelectEvent::Closed | SelectEvent::Highlighted(_) => {
                    return Some(SettingsPanelEvent::Handled);
                }
            },
            FieldControl::Radio(group) => group.handle_key(key, selected)?,
        };
        Some(self.select(field, chosen))
    }

    /// Click on the list of the open dropdown, if one is showing.
    fn handle_dropdown_click(&mut self, click: &ClickEvent, layout: &PanelLayout) -> Option<SettingsPanelEvent> {
        let field = self.open_dropdown()?;
        let selected = field.get(&self.draft);
        let FieldControl::Dropdown(select) = &mut self.controls[field.index()] else {
            return None;
        };
        let control = layout.control(field);
        let list = layout.list_area(field, select.list_height());

        match select.handle_click(click, control, list, selected)? {
            SelectEvent::Selected(option) => Some(self.select(field, option)),
            // The box and the list's own border just fold the list back up;
            // nothing drawn underneath the list may see the click
            _ if click.is_inside(control) || click.is_inside(list) => {
                Some(SettingsPanelEvent::Handled)
            }
            _ => None,
        }
    }

    fn handle_control_click(&mut self, click: &ClickEvent, layout: &PanelLayout) -> Option<SettingsPanelEvent> {
        for field in SettingField::ALL {
            let area = layout.control(field);
            if !click.is_inside(area) {
                continue;
            }
            self.focus = PanelFocus::Field(field);
            let selected = field.get(&self.draft);

            let chosen = match &mut self.controls[field.index()] {
                FieldControl::Dropdown(select) => {
                    select.open(selected);
                    None
                }
                FieldControl::Radio(group) => group.handle_click(click, area),
            };
            return Some(match chosen {
                Some(option) => self.select(field, option),
                None => SettingsPanelEvent::Handled,
            });
        }
        None
    }
}

impl Component for SettingsPanel {
    type Event = SettingsPanelEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));

        if !self.is_open() {
            // The toggle is the only focusable element while closed
            return activate.then(|| self.toggle());
        }

        match self.shortcuts.lookup(PANEL_CONTEXT, key) {
            Some(Action::TogglePanel) => return Some(self.toggle()),
            Some(Action::FocusNext) => return Some(self.move_focus(true)),
            Some(Action::FocusPrevious) => return Some(self.move_focus(false)),
            // Consumed here so nothing else reacts to the submit key
            Some(Action::Apply) => return Some(self.submit()),
            Some(Action::Quit) | None => {}
        }

        match self.focus {
            PanelFocus::Toggle => activate.then(|| self.toggle()),
            PanelFocus::Field(field) => self.handle_field_key(field, key),
            PanelFocus::Reset => activate.then(|| self.clear()),
            PanelFocus::Apply => activate.then(|| self.submit()),
        }
    }

    fn handle_click(&mut self, click: &mut ClickEvent) -> Option<Self::Event> {
        let layout = self.layout();

        if ArrowButton::handle_click(click, layout.toggle) {
            return Some(self.toggle());
        }
        if !self.is_open() || !click.is_inside(layout.root) {
            return None;
        }
        click.stop_propagation();

        if let Some(event) = self.handle_dropdown_click(click, &layout) {
            return Some(event);
        }
        self.collapse_dropdowns();

        if let Some(event) = self.handle_control_click(click, &layout) {
            return Some(event);
        }
        if click.is_inside(layout.reset) {
            self.focus = PanelFocus::Reset;
            return Some(self.clear());
        }
        if click.is_inside(layout.apply) {
            self.focus = PanelFocus::Apply;
            return Some(self.submit());
        }

        // Heading, labels, separator and padding swallow the click
        Some(SettingsPanelEvent::Handled)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let open = self.is_open();
        let layout = PanelLayout::compute(area, open);

        if open {
            f.render_widget(Clear, layout.root);
            f.render_widget(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
                layout.root,
            );

            Text::new(HEADING).uppercase().bold().render(f, layout.heading, theme);

            for field in SettingField::ALL {
                let index = field.index();
                let focused = self.focus == PanelFocus::Field(field);
                let selected = field.get(&self.draft);

                Text::new(field.title()).muted().render(f, layout.labels[index], theme);
                match &self.controls[index] {
                    FieldControl::Dropdown(select) => {
                        select.render(f, layout.controls[index], selected, focused, theme);
                    }
                    FieldControl::Radio(group) => {
                        group.render(f, layout.controls[index], selected, focused, theme);
                    }
                }
            }

            Separator::render(f, layout.separator, theme);
            RESET_BUTTON.render(f, layout.reset, self.focus == PanelFocus::Reset, theme);
            APPLY_BUTTON.render(f, layout.apply, self.focus == PanelFocus::Apply, theme);

            // Drawn last so it overlays the fields below
            if let Some(field) = self.open_dropdown() {
                if let FieldControl::Dropdown(select) = &self.controls[field.index()] {
                    let list = layout.list_area(field, select.list_height());
                    select.render_list(f, list, field.get(&self.draft), theme);
                }
            }
        }

        ArrowButton::render(f, layout.toggle, open, self.focus == PanelFocus::Toggle, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{BACKGROUND_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    const VIEWPORT: Rect = Rect::new(0, 0, 100, 30);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn make_panel() -> (SettingsPanel, Document) {
        let document = Document::new();
        let mut panel = SettingsPanel::new(&ArticleState::default(), &document);
        panel.set_viewport(VIEWPORT);
        (panel, document)
    }

    fn screen_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn center(area: Rect) -> ClickEvent {
        ClickEvent::new(area.x + area.width / 2, area.y + area.height / 2)
    }

    #[test]
    fn test_layout_closed_has_only_toggle() {
        let layout = PanelLayout::compute(VIEWPORT, false);
        assert_eq!(layout.toggle, Rect::new(95, 1, 5, 3));
        assert_eq!(layout.root, Rect::default());
    }

    #[test]
    fn test_layout_open_docks_right() {
        let layout = PanelLayout::compute(VIEWPORT, true);
        assert_eq!(layout.root, Rect::new(56, 0, 44, 30));
        assert_eq!(layout.toggle, Rect::new(51, 1, 5, 3));
        assert!(layout.toggle.intersection(layout.root).is_empty());

        // Every region lies inside the panel body, top to bottom
        let mut last_y = layout.heading.y;
        for area in layout.controls {
            assert!(layout.root.contains(area.as_position()));
            assert!(area.y > last_y);
            last_y = area.y;
        }
        assert!(layout.separator.y > layout.control(SettingField::FontColor).y);
        assert!(layout.separator.y < layout.control(SettingField::BackgroundColor).y);
        assert!(layout.reset.x < layout.apply.x);
    }

    #[test]
    fn test_list_area_flips_above_near_bottom() {
        let layout = PanelLayout::compute(VIEWPORT, true);

        let family = layout.control(SettingField::FontFamily);
        let list = layout.list_area(SettingField::FontFamily, 7);
        assert_eq!(list.y, family.bottom());
        assert_eq!(list.height, 7);

        let width = layout.control(SettingField::ContentWidth);
        let list = layout.list_area(SettingField::ContentWidth, 20);
        assert_eq!(list.bottom(), width.y);
    }

    #[test]
    fn test_new_panel_is_closed_with_seeded_draft() {
        let document = Document::new();
        let committed = ArticleState::default().with(SettingField::FontSize, FONT_SIZE_OPTIONS[2]);
        let panel = SettingsPanel::new(&committed, &document);

        assert!(!panel.is_open());
        assert_eq!(*panel.draft(), committed);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let (mut panel, document) = make_panel();

        assert_eq!(panel.toggle(), SettingsPanelEvent::Opened);
        assert_eq!(document.listener_count(), 1);

        assert_eq!(panel.toggle(), SettingsPanelEvent::Closed);
        assert!(!panel.is_open());
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_select_edits_only_the_draft_field() {
        let (mut panel, _document) = make_panel();
        let before = *panel.draft();

        let event = panel.select(SettingField::BackgroundColor, BACKGROUND_COLORS[2]);
        assert_eq!(event, SettingsPanelEvent::DraftEdited(SettingField::BackgroundColor));
        assert_eq!(panel.draft().background_color, BACKGROUND_COLORS[2]);
        assert_eq!(panel.draft().font_family, before.font_family);

        // Same option again is a no-op
        let event = panel.select(SettingField::BackgroundColor, BACKGROUND_COLORS[2]);
        assert_eq!(event, SettingsPanelEvent::Handled);
    }

    #[test]
    fn test_select_rejects_foreign_option() {
        let (mut panel, _document) = make_panel();
        let event = panel.select(SettingField::FontSize, FONT_FAMILY_OPTIONS[1]);
        assert_eq!(event, SettingsPanelEvent::Handled);
        assert_eq!(*panel.draft(), ArticleState::default());
    }

    #[test]
    fn test_submit_and_clear_keep_visibility() {
        let (mut panel, _document) = make_panel();
        panel.toggle();
        panel.select(SettingField::FontSize, FONT_SIZE_OPTIONS[1]);

        let applied = panel.submit();
        assert_eq!(
            applied,
            SettingsPanelEvent::Applied(ArticleState::default().with(SettingField::FontSize, FONT_SIZE_OPTIONS[1]))
        );
        assert!(panel.is_open());

        assert_eq!(panel.clear(), SettingsPanelEvent::Reset(ArticleState::default()));
        assert_eq!(*panel.draft(), ArticleState::default());
        assert!(panel.is_open());
    }

    #[test]
    fn test_toggle_click_stops_propagation() {
        let (mut panel, _document) = make_panel();
        let mut click = center(panel.layout().toggle);

        assert_eq!(panel.handle_click(&mut click), Some(SettingsPanelEvent::Opened));
        assert!(click.is_propagation_stopped());
    }

    #[test]
    fn test_click_outside_root_is_not_claimed() {
        let (mut panel, _document) = make_panel();
        panel.toggle();

        let mut click = ClickEvent::new(5, 5);
        assert_eq!(panel.handle_click(&mut click), None);
        assert!(!click.is_propagation_stopped());
    }

    #[test]
    fn test_click_on_separator_is_swallowed() {
        let (mut panel, _document) = make_panel();
        panel.toggle();

        let mut click = center(panel.layout().separator);
        assert_eq!(panel.handle_click(&mut click), Some(SettingsPanelEvent::Handled));
        assert!(click.is_propagation_stopped());
    }

    #[test]
    fn test_click_dropdown_then_option() {
        let (mut panel, _document) = make_panel();
        panel.toggle();
        let layout = panel.layout();

        let mut open_click = center(layout.control(SettingField::FontFamily));
        assert_eq!(panel.handle_click(&mut open_click), Some(SettingsPanelEvent::Handled));
        assert_eq!(panel.open_dropdown(), Some(SettingField::FontFamily));

        // Second row of the list holds the second option
        let list = layout.list_area(SettingField::FontFamily, 7);
        let mut pick = ClickEvent::new(list.x + 3, list.y + 2);
        assert_eq!(
            panel.handle_click(&mut pick),
            Some(SettingsPanelEvent::DraftEdited(SettingField::FontFamily))
        );
        assert_eq!(panel.draft().font_family, FONT_FAMILY_OPTIONS[1]);
        assert_eq!(panel.open_dropdown(), None);
    }

    #[test]
    fn test_click_on_list_border_only_closes_list() {
        let (mut panel, _document) = make_panel();
        panel.toggle();
        let layout = panel.layout();
        let control = layout.control(SettingField::FontFamily);
        let list = layout.list_area(SettingField::FontFamily, 7);
        // The bottom border overlaps the next field's box
        assert!(list.bottom() > layout.control(SettingField::FontSize).y);

        let border_cells = [
            (list.x + 3, list.y),
            (list.x + 3, list.bottom() - 1),
            (list.x, list.y + 2),
            (list.right() - 1, list.y + 2),
        ];
        for (x, y) in border_cells {
            let mut open_click = center(control);
            panel.handle_click(&mut open_click);
            assert_eq!(panel.open_dropdown(), Some(SettingField::FontFamily));

            let mut click = ClickEvent::new(x, y);
            assert_eq!(panel.handle_click(&mut click), Some(SettingsPanelEvent::Handled));
            assert_eq!(panel.open_dropdown(), None, "({x}, {y}) reached a control");
            assert_eq!(panel.focus(), PanelFocus::Field(SettingField::FontFamily));
            assert_eq!(*panel.draft(), ArticleState::default());
        }
    }

    #[test]
    fn test_click_radio_option() {
        let (mut panel, _document) = make_panel();
        panel.toggle();
        let control = panel.layout().control(SettingField::FontSize);

        let group = RadioGroup::new("Font size", FONT_SIZE_OPTIONS);
        let target = group.option_areas(control)[2];
        let mut click = ClickEvent::new(target.x, target.y);

        assert_eq!(
            panel.handle_click(&mut click),
            Some(SettingsPanelEvent::DraftEdited(SettingField::FontSize))
        );
        assert_eq!(panel.draft().font_size, FONT_SIZE_OPTIONS[2]);
        assert_eq!(panel.focus(), PanelFocus::Field(SettingField::FontSize));
    }

    #[test]
    fn test_keyboard_focus_cycle_and_apply() {
        let (mut panel, _document) = make_panel();

        // Enter on the toggle opens the panel
        assert_eq!(panel.handle_input(key(KeyCode::Enter)), Some(SettingsPanelEvent::Opened));

        panel.handle_input(key(KeyCode::Tab));
        panel.handle_input(key(KeyCode::Tab));
        assert_eq!(panel.focus(), PanelFocus::Field(SettingField::FontSize));

        assert_eq!(
            panel.handle_input(key(KeyCode::Right)),
            Some(SettingsPanelEvent::DraftEdited(SettingField::FontSize))
        );

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        match panel.handle_input(ctrl_s) {
            Some(SettingsPanelEvent::Applied(state)) => {
                assert_eq!(state.font_size, FONT_SIZE_OPTIONS[1]);
            }
            other => panic!("expected Applied, got {other:?}"),
        }

        // Back-tab wraps from the toggle to Apply
        panel.focus = PanelFocus::Toggle;
        panel.handle_input(key(KeyCode::BackTab));
        assert_eq!(panel.focus(), PanelFocus::Apply);
    }

    #[test]
    fn test_escape_closes_dropdown_but_not_panel() {
        let (mut panel, _document) = make_panel();
        panel.toggle();
        panel.handle_input(key(KeyCode::Tab));
        panel.handle_input(key(KeyCode::Enter));
        assert_eq!(panel.open_dropdown(), Some(SettingField::FontFamily));

        assert_eq!(panel.handle_input(key(KeyCode::Esc)), Some(SettingsPanelEvent::Handled));
        assert_eq!(panel.open_dropdown(), None);
        assert!(panel.is_open());

        // With no list open Esc is left to the parent
        assert_eq!(panel.handle_input(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_closing_collapses_dropdown_and_resets_focus() {
        let (mut panel, _document) = make_panel();
        panel.toggle();
        panel.handle_input(key(KeyCode::Tab));
        panel.handle_input(key(KeyCode::Enter));

        panel.toggle();
        assert_eq!(panel.open_dropdown(), None);
        assert_eq!(panel.focus(), PanelFocus::Toggle);
    }

    #[test]
    fn test_render_closed_and_open() {
        let (mut panel, _document) = make_panel();
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|f| panel.render(f, f.area(), &theme))
            .unwrap();
        let screen = screen_text(terminal.backend().buffer());
        assert!(screen.contains(ArrowButton::glyph(false)));
        assert!(!screen.contains("SET PARAMETERS"));

        panel.toggle();
        terminal
            .draw(|f| panel.render(f, f.area(), &theme))
            .unwrap();
        let screen = screen_text(terminal.backend().buffer());
        assert!(screen.contains("SET PARAMETERS"));
        assert!(screen.contains("Background color"));
        assert!(screen.contains("Apply"));
        assert!(screen.contains(ArrowButton::glyph(true)));
    }
}
