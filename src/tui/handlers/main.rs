//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{ShortcutRegistry, MAIN_CONTEXT};
use crate::tui::{AppState, Component};

/// Routes a key press: the settings panel first, then the main shortcuts.
///
/// Returns true when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(panel_event) = state.panel.handle_input(key) {
        state.apply_panel_event(panel_event);
        return Ok(false);
    }

    handle_main_input(state, key)
}

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(MAIN_CONTEXT, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
