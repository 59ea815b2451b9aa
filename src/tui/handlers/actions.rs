//! Action dispatch for shortcuts resolved in the main context.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

/// Runs `action`. Returns true when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    tracing::debug!(action = action.id(), "dispatching action");

    match action {
        Action::TogglePanel => {
            let event = state.panel.toggle();
            state.apply_panel_event(event);
            Ok(false)
        }
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        // Only meaningful inside the panel, which resolves them itself
        Action::FocusNext | Action::FocusPrevious | Action::Apply => Ok(false),
    }
}
