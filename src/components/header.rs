use crate::style::Styles;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub selected: Option<&'a str>,
    pub applied: Option<&'a str>,
    pub styles: &'a Styles,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.styles.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.styles.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.styles.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" THEMEPICK ", self.styles.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(item_bg)),
            Span::styled(
                format!(" {} ", self.selected.unwrap_or("No selection")),
                self.styles.header_item,
            ),
            Span::styled(SEP_RIGHT, Style::default().fg(item_bg).bg(base_bg)),
        ];
        if let Some(applied) = self.applied {
            spans.push(Span::styled(" applied: ", self.styles.dimmed));
            spans.push(Span::styled(applied, self.styles.header));
        }

        Paragraph::new(Line::from(spans))
            .style(self.styles.header)
            .render(area, buf);
    }
}
