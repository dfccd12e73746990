use crate::app::state::AppMode;
use crate::style::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Placeholder body while the catalog is loading or after it failed.
pub struct Splash<'a> {
    pub mode: AppMode,
    pub last_error: Option<&'a str>,
    pub frame_count: u64,
    pub styles: &'a Styles,
}

impl Widget for Splash<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut lines = vec![Line::from(Span::styled(" THEMEPICK ", self.styles.header_logo))];
        lines.push(Line::from(""));

        if self.mode == AppMode::Error {
            lines.push(Line::from(Span::styled(
                " Could not load themes ",
                self.styles.status_error,
            )));
            if let Some(err) = self.last_error {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(err.to_string(), self.styles.list_item)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Press "),
                Span::styled("q", self.styles.footer_key),
                Span::raw(" to quit"),
            ]));
        } else {
            let frame = SPINNER[(self.frame_count % SPINNER.len() as u64) as usize];
            lines.push(Line::from(vec![
                Span::styled(frame, self.styles.header_logo),
                Span::raw(" Loading themes... "),
            ]));
        }

        let height = (lines.len() as u16 + 2).min(area.height);
        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(height / 2),
            width: area.width,
            height,
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(centered_area, buf);
        }
    }
}
