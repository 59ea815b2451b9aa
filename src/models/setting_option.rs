//! A single selectable value for one settings dimension.

use std::fmt;

use super::RgbColor;

/// One selectable choice for a settings dimension (a font, a color, a width).
///
/// Options are immutable value objects drawn from the static catalog, so they
/// are `Copy` and compared by their value token only. Two options with the same
/// token but different titles are the same option.
#[derive(Debug, Clone, Copy, Eq)]
pub struct SettingOption {
    /// Human-readable label shown in the panel
    pub title: &'static str,
    /// Underlying value token (e.g. `"18px"`, `"#000000"`, `"Open Sans"`)
    pub value: &'static str,
}

impl SettingOption {
    /// Creates a new option.
    #[must_use]
    pub const fn new(title: &'static str, value: &'static str) -> Self {
        Self { title, value }
    }

    /// Interprets the value token as a hex color.
    ///
    /// Returns `None` for non-color options.
    #[must_use]
    pub fn color(&self) -> Option<RgbColor> {
        if self.value.starts_with('#') {
            RgbColor::from_hex(self.value).ok()
        } else {
            None
        }
    }

    /// Interprets the value token as a pixel length (`"1394px"` → `1394`).
    ///
    /// Returns `None` for non-pixel options.
    #[must_use]
    pub fn pixels(&self) -> Option<u16> {
        self.value.strip_suffix("px")?.parse().ok()
    }
}

impl PartialEq for SettingOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::hash::Hash for SettingOption {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for SettingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title)
    }
}
