use crate::domain::models::{ThemeOption, ThemeOptionId};
use crate::style::{to_color, Styles};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

/// Selectable theme options with the applied one checkmarked.
pub struct OptionList<'a> {
    pub options: &'a [ThemeOption],
    pub selected: Option<&'a ThemeOption>,
    pub applied: Option<&'a ThemeOptionId>,
    pub dark_mode: bool,
    pub styles: &'a Styles,
}

impl OptionList<'_> {
    fn item(&self, option: &ThemeOption) -> ListItem<'static> {
        let is_selected = self.selected.is_some_and(|s| s.is_same_theme(option));
        let is_applied = self.applied == Some(&option.id);

        let accent = option.preview.resolve_accent_color(self.dark_mode);
        let swatch = if accent.is_defined() {
            Span::styled("● ", Style::default().fg(to_color(accent)))
        } else {
            Span::styled("○ ", self.styles.dimmed)
        };

        let mut spans = vec![
            Span::styled(
                if is_applied { "✓ " } else { "  " },
                self.styles.applied_mark,
            ),
            swatch,
            Span::styled(
                option.title.clone(),
                if is_selected {
                    self.styles.list_selected
                } else {
                    self.styles.list_item
                },
            ),
        ];
        if option.is_undefined_custom() {
            spans.push(Span::styled(" (new)", self.styles.custom_tag));
        } else if option.is_custom() {
            spans.push(Span::styled(" (custom)", self.styles.custom_tag));
        }
        ListItem::new(Line::from(spans))
    }
}

impl StatefulWidget for OptionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items: Vec<ListItem> = self.options.iter().map(|o| self.item(o)).collect();
        let list = List::new(items).highlight_style(self.styles.list_cursor);
        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::test_support::{custom, preset};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_applied_option_is_checkmarked() {
        let options = vec![
            preset("A", "Default", true),
            preset("B", "Ocean", false),
            custom("new", "Another", false),
        ];
        let styles = Styles::default();
        let applied = ThemeOptionId("A".to_string());
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| {
                let mut state = ListState::default().with_selected(Some(1));
                f.render_stateful_widget(
                    OptionList {
                        options: &options,
                        selected: options.get(1),
                        applied: Some(&applied),
                        dark_mode: false,
                        styles: &styles,
                    },
                    f.area(),
                    &mut state,
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).starts_with("✓ ○ Default"));
        assert!(row(1).starts_with("  ○ Ocean"));
        assert!(row(2).contains("Another (new)"));
    }
}
