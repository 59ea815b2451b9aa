//! Component trait pattern for TUI components.
//!
//! This module defines the traits and types used to implement self-contained,
//! testable TUI components that can handle their own input and rendering.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard and mouse input, and emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the key was consumed by the component.
    /// Returns `None` if the key is not relevant and the parent may handle it.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Handle a click.
    ///
    /// Components that own the clicked region call
    /// [`ClickEvent::stop_propagation`] so document-level listeners never see it.
    /// Default implementation ignores clicks.
    fn handle_click(&mut self, _click: &mut ClickEvent) -> Option<Self::Event> {
        None
    }

    /// Render the component.
    ///
    /// The component should render itself within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// A primary-button press at a terminal cell, bubbling from the innermost
/// component outwards to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Column of the clicked cell
    pub column: u16,
    /// Row of the clicked cell
    pub row: u16,
    propagation_stopped: bool,
}

impl ClickEvent {
    /// Creates a click at the given cell.
    #[must_use]
    pub const fn new(column: u16, row: u16) -> Self {
        Self {
            column,
            row,
            propagation_stopped: false,
        }
    }

    /// Converts a terminal mouse event into a click.
    ///
    /// Only left-button presses count as clicks; drags, releases, scrolling
    /// and movement return `None`.
    #[must_use]
    pub const fn from_mouse(event: MouseEvent) -> Option<Self> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::new(event.column, event.row)),
            _ => None,
        }
    }

    /// Stops the click from reaching outer handlers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Returns true once some handler has stopped propagation.
    #[must_use]
    pub const fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Returns true when the clicked cell lies within `area`.
    #[must_use]
    pub const fn is_inside(&self, area: Rect) -> bool {
        self.column >= area.x
            && self.column < area.x.saturating_add(area.width)
            && self.row >= area.y
            && self.row < area.y.saturating_add(area.height)
    }
}
