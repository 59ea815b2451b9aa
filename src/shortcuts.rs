//! Centralized shortcut and action system.
//!
//! Key bindings live in one registry keyed by context, so the status bar hints
//! and the event handlers agree on what each key does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context used while the article view has the keyboard.
pub const MAIN_CONTEXT: &str = "main";
/// Context used while the settings panel is open.
pub const PANEL_CONTEXT: &str = "panel";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open or close the settings panel
    TogglePanel,
    /// Leave the application
    Quit,
    /// Move focus to the next panel control
    FocusNext,
    /// Move focus to the previous panel control
    FocusPrevious,
    /// Commit the draft
    Apply,
}

impl Action {
    /// Stable identifier used in logs and hints
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::TogglePanel => "toggle_panel",
            Self::Quit => "quit",
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::Apply => "apply",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_panel_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        self.register(ctx, K::Char('s'), M::NONE, Action::TogglePanel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_panel_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = PANEL_CONTEXT;

        self.register(ctx, K::Char('s'), M::NONE, Action::TogglePanel);
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        // Terminals disagree on whether BackTab carries SHIFT
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::SHIFT, Action::FocusPrevious);
        self.register(ctx, K::Char('s'), M::CONTROL, Action::Apply);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
