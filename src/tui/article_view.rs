//! Article preview styled by the committed settings.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::models::{Article, ArticleState, SettingOption};

/// Pixel width that maps to the full preview area
const FULL_WIDTH_PX: u32 = 1394;

/// Renders the article with the committed settings.
pub struct ArticleView;

impl ArticleView {
    /// Columns the text column gets out of `available`.
    #[must_use]
    pub fn column_width(available: u16, content_width: SettingOption) -> u16 {
        let px = content_width.pixels().map_or(FULL_WIDTH_PX, u32::from);
        let scaled = u32::from(available) * px.min(FULL_WIDTH_PX) / FULL_WIDTH_PX;
        u16::try_from(scaled).unwrap_or(available)
    }

    /// Blank lines between paragraphs for a font size.
    #[must_use]
    pub fn paragraph_gap(font_size: SettingOption) -> usize {
        match font_size.pixels() {
            Some(px) if px >= 38 => 2,
            Some(px) if px >= 25 => 1,
            _ => 0,
        }
    }

    /// Text modifiers standing in for a font family.
    #[must_use]
    pub fn family_modifier(font_family: SettingOption) -> Modifier {
        match font_family.value {
            "Cormorant Garamond" => Modifier::ITALIC,
            "Days One" => Modifier::BOLD,
            _ => Modifier::empty(),
        }
    }

    fn color(option: SettingOption, fallback: Color) -> Color {
        option
            .color()
            .map_or(fallback, |rgb| rgb.to_ratatui_color())
    }

    /// Render the preview into `area`.
    pub fn render(f: &mut Frame, area: Rect, article: &Article, state: &ArticleState) {
        let fg = Self::color(state.font_color, Color::Black);
        let bg = Self::color(state.background_color, Color::White);
        let base = Style::default().fg(fg).bg(bg);

        f.render_widget(Block::default().style(base), area);

        let width = Self::column_width(area.width.saturating_sub(4), state.content_width);
        let column = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y.saturating_add(1),
            width,
            height: area.height.saturating_sub(2),
        };

        let body_style = base.add_modifier(Self::family_modifier(state.font_family));
        let mut title_style = body_style;
        if Self::paragraph_gap(state.font_size) > 0 {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }

        let header_fg = match state.background_color.color() {
            Some(rgb) if !rgb.is_light() => Color::Gray,
            _ => Color::DarkGray,
        };

        let mut lines = vec![
            Line::styled(
                format!("{} · {}", state.font_family.title, state.font_size.title),
                base.fg(header_fg),
            )
            .alignment(Alignment::Right),
            Line::default(),
            Line::styled(article.title.clone(), title_style),
            Line::default(),
        ];

        let gap = Self::paragraph_gap(state.font_size);
        for (i, paragraph) in article.paragraphs.iter().enumerate() {
            if i > 0 {
                lines.extend(std::iter::repeat_with(Line::default).take(gap));
            }
            lines.push(Line::styled(paragraph.clone(), body_style));
        }

        f.render_widget(
            Paragraph::new(lines).style(base).wrap(Wrap { trim: true }),
            column,
        );
    }
}
