use super::backdrop::Backdrop;
use crate::app::state::FullPreviewState;
use crate::domain::models::ColorInt;
use crate::style::{to_color, Styles};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Opaque full-screen wallpaper with a header tinted for legibility.
pub struct FullPreview<'a> {
    pub state: &'a FullPreviewState,
    pub styles: &'a Styles,
}

impl Widget for FullPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let background = self.state.binding.background().map(|bg| &bg.image);
        Backdrop {
            image: background,
            base: ColorInt::BLACK,
        }
        .render(area, buf);

        let header = self.state.header;
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.state.title),
                Style::default()
                    .fg(to_color(header.text))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("■", Style::default().fg(to_color(header.icon))),
            Span::styled(" ■", Style::default().fg(to_color(self.state.accent))),
        ]);
        // Header text keeps the wallpaper behind it
        let header_area = Rect { height: 1, ..area };
        let mut col = header_area.x;
        for span in &line.spans {
            for ch in span.content.chars() {
                if col >= header_area.right() {
                    break;
                }
                if let Some(cell) = buf.cell_mut((col, header_area.y)) {
                    cell.set_char(ch);
                    if let Some(color) = span.style.fg {
                        cell.set_fg(color);
                    }
                }
                col += 1;
            }
        }

        if area.height > 2 {
            let hint = Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            };
            Paragraph::new(Line::from(vec![
                Span::styled(" a ", self.styles.footer_key),
                Span::styled(" apply ", self.styles.footer),
                Span::raw(" "),
                Span::styled(" Esc ", self.styles.footer_key),
                Span::styled(" close ", self.styles.footer),
            ]))
            .alignment(ratatui::layout::Alignment::Center)
            .render(hint, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_uses_tint() {
        let state = FullPreviewState::new(
            1,
            "Ocean".to_string(),
            "{}".to_string(),
            None,
            ColorInt::rgb(0, 0x79, 0x6B),
            ColorInt::rgb(0, 0x79, 0x6B),
        );
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        FullPreview {
            state: &state,
            styles: &Styles::default(),
        }
        .render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "O");
        assert_eq!(buf[(1, 0)].fg, to_color(ColorInt::TEXT_LIGHT));
    }
}
