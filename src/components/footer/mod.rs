mod groups;
mod types;

use crate::app::state::{AppMode, AppState, NoticeKind};
use crate::style::Styles;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub styles: &'a Styles,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let styles = self.styles;
        let state = self.state;

        // Status segment
        let status_span = if let Some(notice) = &state.notice {
            let style = match notice.kind {
                NoticeKind::Info => styles.status_info,
                NoticeKind::Success => styles.status_success,
                NoticeKind::Error => styles.status_error,
            };
            Span::styled(format!("  {}  ", notice.message), style)
        } else {
            let label = match state.mode {
                AppMode::Loading => "  LOADING  ",
                AppMode::Error => "  ERROR  ",
                AppMode::Browse => "  BROWSE  ",
                AppMode::FullPreview => "  PREVIEW  ",
            };
            let style = if state.mode == AppMode::Error {
                styles.status_error
            } else {
                styles.status_info
            };
            Span::styled(label, style)
        };

        let mut spans = vec![status_span, Span::raw("  ")];

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            if group.items.is_empty() {
                continue;
            }

            // Group label only when there is plenty of room
            if area.width > 100 {
                let label = format!("{}: ", group.name);
                if current_width + label.len() < available_width {
                    current_width += label.len();
                    spans.push(Span::styled(label, styles.dimmed));
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.len() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, desc_style) = if item.enabled {
                    (styles.footer_key, styles.footer)
                } else {
                    (styles.dimmed, styles.dimmed)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, desc_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(styles.footer)
            .render(area, buf);
    }
}
