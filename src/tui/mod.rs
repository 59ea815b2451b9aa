//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event routing,
//! and all UI widgets using Ratatui.

pub mod article_view;
pub mod component;
pub mod document;
pub mod handlers;
pub mod outside_click;
pub mod settings_panel;
pub mod status_bar;
pub mod theme;
pub mod toggle_button;
pub mod widgets;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::models::{Article, ArticleState};

// Re-export TUI components
pub use article_view::ArticleView;
pub use component::{ClickEvent, Component};
pub use document::{Document, Subscription};
pub use handlers::ClickRoute;
pub use outside_click::OutsideClickClose;
pub use settings_panel::{PanelFocus, PanelLayout, SettingsPanel, SettingsPanelEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toggle_button::ArrowButton;

/// Height of the status bar, borders included
const STATUS_BAR_HEIGHT: u16 = 4;

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Committed article settings; the preview renders these
    pub committed: ArticleState,
    /// Article shown in the preview
    pub article: Article,

    // UI state
    /// Settings panel with its draft
    pub panel: SettingsPanel,
    /// Document-level click listeners
    pub document: Document,
    /// Current UI theme
    pub theme: Theme,
    /// Status bar message
    pub status_message: String,
    /// Whether the main loop should exit
    pub should_quit: bool,

    // Configuration
    /// Loaded configuration
    pub config: Config,
}

impl AppState {
    /// Creates the application state from configuration.
    ///
    /// The initial committed settings come from the `[article]` section.
    pub fn new(config: Config, article: Article) -> Result<Self> {
        let committed = config
            .initial_state()
            .context("Failed to resolve initial article settings")?;
        let document = Document::new();
        let panel = SettingsPanel::new(&committed, &document);

        let status_message = if config.ui.show_help_on_startup {
            "Press s to open the settings panel".to_string()
        } else {
            String::new()
        };

        Ok(Self {
            committed,
            article,
            panel,
            document,
            theme: Theme::from_mode(config.ui.theme_mode),
            status_message,
            should_quit: false,
            config,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Replaces the committed settings.
    pub fn set_article_state(&mut self, state: ArticleState) {
        tracing::debug!(?state, "committed settings replaced");
        self.committed = state;
    }

    /// Applies an event emitted by the settings panel.
    ///
    /// `Applied` and `Reset` are the only events that touch the committed
    /// settings.
    pub fn apply_panel_event(&mut self, event: SettingsPanelEvent) {
        match event {
            SettingsPanelEvent::Applied(state) => {
                self.set_article_state(state);
                self.set_status("Settings applied");
            }
            SettingsPanelEvent::Reset(state) => {
                self.set_article_state(state);
                self.set_status("Settings reset to defaults");
            }
            SettingsPanelEvent::Opened => self.set_status("Settings open"),
            SettingsPanelEvent::Closed => self.set_status("Settings closed"),
            SettingsPanelEvent::DraftEdited(field) => {
                let option = field.get(self.panel.draft());
                self.set_status(format!("{}: {} (not applied)", field.title(), option.title));
            }
            SettingsPanelEvent::Handled => {}
        }
    }

    /// Lays the panel out for a terminal of the given size.
    pub fn set_viewport(&mut self, area: Rect) {
        let (main, _) = screen_layout(area);
        self.panel.set_viewport(main);
    }
}

/// Splits the screen into the article area and the status bar.
#[must_use]
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.set_viewport(Rect::new(0, 0, size.width, size.height));

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    handlers::handle_mouse_event(state, mouse);
                }
                // Resize and everything else re-render on the next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let (main, status) = screen_layout(f.area());

    ArticleView::render(f, main, &state.article, &state.committed);
    state.panel.render(f, main, &state.theme);
    StatusBar::render(f, status, state, &state.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::FONT_SIZE_OPTIONS;
    use crate::models::SettingField;

    fn make_state() -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        let mut state = AppState::new(config, Article::sample()).unwrap();
        state.set_viewport(Rect::new(0, 0, 100, 34));
        state
    }

    #[test]
    fn test_screen_layout_reserves_status_bar() {
        let (main, status) = screen_layout(Rect::new(0, 0, 100, 34));
        assert_eq!(main, Rect::new(0, 0, 100, 30));
        assert_eq!(status, Rect::new(0, 30, 100, 4));
    }

    #[test]
    fn test_new_uses_configured_state() {
        let mut config = Config::new();
        config.article.font_size = "25px".to_string();
        let state = AppState::new(config, Article::sample()).unwrap();

        assert_eq!(state.committed.font_size, FONT_SIZE_OPTIONS[1]);
        assert_eq!(state.panel.draft().font_size, FONT_SIZE_OPTIONS[1]);
        assert!(!state.panel.is_open());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::new();
        config.article.font_family = "Comic Sans".to_string();
        assert!(AppState::new(config, Article::sample()).is_err());
    }

    #[test]
    fn test_draft_edit_does_not_commit() {
        let mut state = make_state();
        let event = state.panel.select(SettingField::FontSize, FONT_SIZE_OPTIONS[2]);
        state.apply_panel_event(event);

        assert_eq!(state.committed, ArticleState::default());
        assert!(state.status_message.contains("not applied"));
    }

    #[test]
    fn test_applied_event_commits() {
        let mut state = make_state();
        let applied = ArticleState::default().with(SettingField::FontSize, FONT_SIZE_OPTIONS[2]);
        state.apply_panel_event(SettingsPanelEvent::Applied(applied));
        assert_eq!(state.committed, applied);
    }

    #[test]
    fn test_render_full_screen() {
        use ratatui::backend::TestBackend;

        let mut state = make_state();
        state.panel.toggle();
        let mut terminal = Terminal::new(TestBackend::new(100, 34)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("SET PARAMETERS"));
        assert!(text.contains("Status"));
    }
}
