//! The five-field article display settings record.

use anyhow::{Context, Result};

use super::catalog::{
    find_option, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS,
};
use super::SettingOption;

/// Article display settings.
///
/// Used both as the committed, application-wide state and as the settings
/// panel's draft. Every field always holds an option from its catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleState {
    /// Font family of the article text
    pub font_family: SettingOption,
    /// Font size of the article text
    pub font_size: SettingOption,
    /// Foreground color of the article text
    pub font_color: SettingOption,
    /// Background color behind the article
    pub background_color: SettingOption,
    /// Width of the article column
    pub content_width: SettingOption,
}

impl Default for ArticleState {
    /// The well-known default settings restored by Reset.
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

impl ArticleState {
    /// Builds settings from five value tokens, resolving each in its catalog list.
    ///
    /// # Errors
    ///
    /// Returns an error naming the field if any token is not in its list.
    pub fn from_tokens(
        font_family: &str,
        font_size: &str,
        font_color: &str,
        background_color: &str,
        content_width: &str,
    ) -> Result<Self> {
        Ok(Self {
            font_family: SettingField::FontFamily.resolve(font_family)?,
            font_size: SettingField::FontSize.resolve(font_size)?,
            font_color: SettingField::FontColor.resolve(font_color)?,
            background_color: SettingField::BackgroundColor.resolve(background_color)?,
            content_width: SettingField::ContentWidth.resolve(content_width)?,
        })
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: SettingField, option: SettingOption) -> Self {
        field.set(&mut self, option);
        self
    }
}

/// Names one field of [`ArticleState`].
///
/// Lets widgets be bound to a field generically instead of through five
/// hand-written change handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    /// Font family
    FontFamily,
    /// Font size
    FontSize,
    /// Font color
    FontColor,
    /// Background color
    BackgroundColor,
    /// Content width
    ContentWidth,
}

impl SettingField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontColor,
        Self::BackgroundColor,
        Self::ContentWidth,
    ];

    /// Position of this field in [`Self::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::FontFamily => 0,
            Self::FontSize => 1,
            Self::FontColor => 2,
            Self::BackgroundColor => 3,
            Self::ContentWidth => 4,
        }
    }

    /// Returns the label shown above the field's widget.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background color",
            Self::ContentWidth => "Content width",
        }
    }

    /// Returns the config key for this field.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::ContentWidth => "content_width",
        }
    }

    /// Returns the catalog list for this field.
    #[must_use]
    pub const fn options(&self) -> &'static [SettingOption] {
        match self {
            Self::FontFamily => FONT_FAMILY_OPTIONS,
            Self::FontSize => FONT_SIZE_OPTIONS,
            Self::FontColor => FONT_COLORS,
            Self::BackgroundColor => BACKGROUND_COLORS,
            Self::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Reads this field from a settings record.
    #[must_use]
    pub const fn get(&self, state: &ArticleState) -> SettingOption {
        match self {
            Self::FontFamily => state.font_family,
            Self::FontSize => state.font_size,
            Self::FontColor => state.font_color,
            Self::BackgroundColor => state.background_color,
            Self::ContentWidth => state.content_width,
        }
    }

    /// Replaces this field in a settings record, leaving the others untouched.
    pub fn set(&self, state: &mut ArticleState, option: SettingOption) {
        let slot = match self {
            Self::FontFamily => &mut state.font_family,
            Self::FontSize => &mut state.font_size,
            Self::FontColor => &mut state.font_color,
            Self::BackgroundColor => &mut state.background_color,
            Self::ContentWidth => &mut state.content_width,
        };
        *slot = option;
    }

    /// Resolves a value token against this field's catalog list.
    pub fn resolve(&self, value: &str) -> Result<SettingOption> {
        find_option(self.options(), value)
            .with_context(|| format!("Unknown {} '{}'", self.key(), value))
    }
}
