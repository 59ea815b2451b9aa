//! Generic input widgets used by the settings panel.
//!
//! Selection widgets never own the selected value: the caller passes the
//! current option in and receives the newly chosen option back.

pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;

pub use button::{Button, ButtonKind};
pub use radio_group::RadioGroup;
pub use select::{Select, SelectEvent};
pub use separator::Separator;
pub use text::Text;

use ratatui::{style::Style, text::Span};

use crate::models::SettingOption;

/// Leading color swatch for color options, empty for everything else.
fn swatch(option: &SettingOption) -> Option<Span<'static>> {
    option
        .color()
        .map(|color| Span::styled("██ ", Style::default().fg(color.to_ratatui_color())))
}

/// Steps through `len` items with wrap-around.
fn wrap_step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}
