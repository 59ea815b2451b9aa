//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_DATA_DIR;
use crate::models::ArticleState;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Display the key hint message on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Initial article settings, stored as catalog value tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleConfig {
    /// Font family token (e.g. "Open Sans")
    pub font_family: String,
    /// Font size token (e.g. "18px")
    pub font_size: String,
    /// Font color token (e.g. "#000000")
    pub font_color: String,
    /// Background color token (e.g. "#FFFFFF")
    pub background_color: String,
    /// Content width token (e.g. "1394px")
    pub content_width: String,
}

impl ArticleConfig {
    /// Captures the tokens of a settings record.
    #[must_use]
    pub fn from_state(state: &ArticleState) -> Self {
        Self {
            font_family: state.font_family.value.to_string(),
            font_size: state.font_size.value.to_string(),
            font_color: state.font_color.value.to_string(),
            background_color: state.background_color.value.to_string(),
            content_width: state.content_width.value.to_string(),
        }
    }

    /// Resolves the tokens against the option catalog.
    pub fn to_state(&self) -> Result<ArticleState> {
        ArticleState::from_tokens(
            &self.font_family,
            &self.font_size,
            &self.font_color,
            &self.background_color,
            &self.content_width,
        )
    }
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self::from_state(&ArticleState::default())
    }
}

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Write the committed settings back to `[article]` on quit
    pub persist_on_exit: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "article_params=debug"
    pub level: String,
    /// Log file; logging is disabled when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ArticleParams/config.toml`
/// - macOS: `~/Library/Application Support/ArticleParams/config.toml`
/// - Windows: `%APPDATA%\ArticleParams\config.toml`
///
/// # Validation
///
/// Every `[article]` token must name an option in its catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Initial article settings
    pub article: ArticleConfig,
    /// Application behavior
    pub behavior: BehaviorConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ArticleParams/`
    /// - macOS: `~/Library/Application Support/ArticleParams/`
    /// - Windows: `%APPDATA%\ArticleParams\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that every `[article]` token resolves in the option catalog.
    pub fn validate(&self) -> Result<()> {
        self.article.to_state()?;
        Ok(())
    }

    /// Initial committed settings.
    pub fn initial_state(&self) -> Result<ArticleState> {
        self.article.to_state()
    }

    /// Stores `state` as the initial settings for the next run.
    pub fn remember_state(&mut self, state: &ArticleState) {
        self.article = ArticleConfig::from_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{BACKGROUND_COLORS, FONT_SIZE_OPTIONS};
    use crate::models::SettingField;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert!(config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(!config.behavior.persist_on_exit);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
        assert_eq!(config.initial_state().unwrap(), ArticleState::default());
    }

    #[test]
    fn test_config_validate_rejects_unknown_token() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.article.font_size = "14px".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("font_size"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\ntheme_mode = \"Light\"\n\n[article]\nfont_size = \"38px\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert!(config.ui.show_help_on_startup);
        let state = config.initial_state().unwrap();
        assert_eq!(state.font_size, FONT_SIZE_OPTIONS[2]);
        assert_eq!(state.font_family, ArticleState::default().font_family);
    }

    #[test]
    fn test_load_rejects_invalid_token() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[article]\nbackground_color = \"#123456\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("background_color"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.behavior.persist_on_exit = true;
        config.remember_state(
            &ArticleState::default().with(SettingField::BackgroundColor, BACKGROUND_COLORS[2]),
        );
        config.save_to(&path).unwrap();

        // No temp file left behind
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.article.background_color, "#C4C4C4");
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.article.content_width = "800px".to_string();
        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }
}
