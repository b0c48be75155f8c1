//! A filled block showing one palette color and its formatted value.

use hueforge_engine::{Color as PaletteColor, ColorFormat, adjust_brightness, format_color_value, is_color_light};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const DARK_TEXT: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
const LIGHT_TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
/// Lightness shift applied to the label strip at the bottom of a swatch.
const LABEL_STRIP_SHIFT: i32 = 8;

/// Terminal color for a palette color.
pub fn terminal_color(color: &PaletteColor) -> Color {
    let rgb = color.rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Text color readable on top of `color`.
pub fn contrast_text(color: &PaletteColor) -> Color {
    if is_color_light(color) { DARK_TEXT } else { LIGHT_TEXT }
}

pub struct Swatch<'a> {
    color: &'a PaletteColor,
    format: ColorFormat,
    selected: bool,
    copied: bool,
}

impl<'a> Swatch<'a> {
    pub fn new(color: &'a PaletteColor, format: ColorFormat) -> Self {
        Self {
            color,
            format,
            selected: false,
            copied: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }
}

impl Widget for Swatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fill = terminal_color(self.color);
        let text = contrast_text(self.color);
        let light = is_color_light(self.color);

        let mut block = Block::default().style(Style::default().bg(fill));
        if self.selected {
            block = block
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(text).bg(fill));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Light colors get a slightly darker strip, dark colors a lighter one.
        let shift = if light { -LABEL_STRIP_SHIFT } else { LABEL_STRIP_SHIFT };
        let strip = terminal_color(&adjust_brightness(self.color, shift));
        let [_, label_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(inner.height.min(3))]).areas(inner);

        let mut lines = vec![Line::from(format_color_value(self.color, self.format))];
        if self.copied {
            lines.push(Line::from("✓ Copied"));
        }
        let label_style = Style::default().fg(text).bg(strip).add_modifier(Modifier::BOLD);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(label_style)
            .render(label_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right()).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn picks_readable_text() {
        assert_eq!(contrast_text(&PaletteColor::from_hex("#ffffff").unwrap()), DARK_TEXT);
        assert_eq!(contrast_text(&PaletteColor::from_hex("#000000").unwrap()), LIGHT_TEXT);
        assert_eq!(
            terminal_color(&PaletteColor::from_hex("#3498db").unwrap()),
            Color::Rgb(52, 152, 219)
        );
    }

    #[test]
    fn renders_value_and_copied_mark() {
        let color = PaletteColor::from_hex("#3498db").unwrap();
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        Swatch::new(&color, ColorFormat::Hex).copied(true).render(area, &mut buf);

        let all: Vec<String> = (0..area.height).map(|y| row_text(&buf, y)).collect();
        assert!(all.iter().any(|row| row.contains("#3498db")));
        assert!(all.iter().any(|row| row.contains("✓ Copied")));
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(52, 152, 219));
        // luma of #3498db is just above the threshold
        assert_eq!(buf[(10, 4)].fg, DARK_TEXT);
    }
}
