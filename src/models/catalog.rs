//! Static option catalog for every article setting.
//!
//! Each list is the full set of choices a widget may offer. The first entry is
//! not necessarily the default; see [`ArticleState::default`](super::ArticleState).

use super::SettingOption;

/// Available font families.
pub const FONT_FAMILY_OPTIONS: &[SettingOption] = &[
    SettingOption::new("Open Sans", "Open Sans"),
    SettingOption::new("Ubuntu", "Ubuntu"),
    SettingOption::new("Cormorant Garamond", "Cormorant Garamond"),
    SettingOption::new("Days One", "Days One"),
    SettingOption::new("Merriweather", "Merriweather"),
];

/// Available font sizes.
pub const FONT_SIZE_OPTIONS: &[SettingOption] = &[
    SettingOption::new("18px", "18px"),
    SettingOption::new("25px", "25px"),
    SettingOption::new("38px", "38px"),
];

/// Available font colors.
pub const FONT_COLORS: &[SettingOption] = &[
    SettingOption::new("Black", "#000000"),
    SettingOption::new("White", "#FFFFFF"),
    SettingOption::new("Grey", "#C4C4C4"),
    SettingOption::new("Pink", "#FEAFE8"),
    SettingOption::new("Hot pink", "#FD24AF"),
    SettingOption::new("Yellow", "#FFC802"),
    SettingOption::new("Green", "#80D994"),
    SettingOption::new("Blue", "#6FC1FD"),
    SettingOption::new("Purple", "#5F00D5"),
];

/// Available background colors.
pub const BACKGROUND_COLORS: &[SettingOption] = &[
    SettingOption::new("White", "#FFFFFF"),
    SettingOption::new("Black", "#000000"),
    SettingOption::new("Grey", "#C4C4C4"),
    SettingOption::new("Pink", "#FEAFE8"),
    SettingOption::new("Hot pink", "#FD24AF"),
    SettingOption::new("Yellow", "#FFC802"),
    SettingOption::new("Green", "#80D994"),
    SettingOption::new("Blue", "#6FC1FD"),
    SettingOption::new("Purple", "#5F00D5"),
];

/// Available content widths.
pub const CONTENT_WIDTH_OPTIONS: &[SettingOption] = &[
    SettingOption::new("Wide", "1394px"),
    SettingOption::new("Narrow", "948px"),
];

/// Finds the option with the given value token in a list.
#[must_use]
pub fn find_option(options: &[SettingOption], value: &str) -> Option<SettingOption> {
    options.iter().find(|option| option.value == value).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option_by_value() {
        let found = find_option(FONT_COLORS, "#FFC802").unwrap();
        assert_eq!(found.title, "Yellow");

        assert!(find_option(FONT_COLORS, "#123456").is_none());
        assert!(find_option(FONT_COLORS, "Yellow").is_none());
    }

    #[test]
    fn test_color_lists_parse_as_colors() {
        for option in FONT_COLORS.iter().chain(BACKGROUND_COLORS) {
            assert!(option.color().is_some(), "{} should be a color", option.value);
        }
    }

    #[test]
    fn test_sizes_and_widths_parse_as_pixels() {
        for option in FONT_SIZE_OPTIONS.iter().chain(CONTENT_WIDTH_OPTIONS) {
            assert!(option.pixels().is_some(), "{} should be pixels", option.value);
        }
    }

    #[test]
    fn test_value_tokens_unique_per_list() {
        for list in [
            FONT_FAMILY_OPTIONS,
            FONT_SIZE_OPTIONS,
            FONT_COLORS,
            BACKGROUND_COLORS,
            CONTENT_WIDTH_OPTIONS,
        ] {
            for (i, a) in list.iter().enumerate() {
                assert!(list[i + 1..].iter().all(|b| a != b));
            }
        }
    }
}
