//! Input handlers for keyboard and mouse events.

pub mod actions;
pub mod main;
pub mod mouse;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::{handle_key_event, handle_main_input};
pub use mouse::{handle_click, handle_mouse_event, ClickRoute};
