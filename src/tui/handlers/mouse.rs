//! Mouse click routing.
//!
//! A click bubbles from the innermost target outwards: the settings panel
//! (toggle, then panel body) gets it first, and only clicks nobody stopped
//! reach the document listeners.

use crossterm::event::MouseEvent;

use crate::tui::{AppState, ClickEvent, Component, SettingsPanelEvent};

/// Where a click ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRoute {
    /// Claimed by the settings panel
    Panel(Option<SettingsPanelEvent>),
    /// Reached the document; `notified` listeners saw it
    Document {
        /// Number of listeners notified
        notified: usize,
    },
}

/// Converts a terminal mouse event and routes it if it is a click.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Option<ClickRoute> {
    ClickEvent::from_mouse(mouse).map(|click| handle_click(state, click))
}

/// Routes one click through the panel and then the document.
pub fn handle_click(state: &mut AppState, mut click: ClickEvent) -> ClickRoute {
    let panel_event = state.panel.handle_click(&mut click);
    if let Some(event) = panel_event {
        state.apply_panel_event(event);
    }
    if click.is_propagation_stopped() {
        return ClickRoute::Panel(panel_event);
    }

    let was_open = state.panel.is_open();
    let notified = state.document.dispatch(&click);
    // A listener may have closed the panel; release its subscription now
    state.panel.sync_subscriptions();
    if was_open && !state.panel.is_open() {
        state.apply_panel_event(SettingsPanelEvent::Closed);
    }

    ClickRoute::Document { notified }
}
