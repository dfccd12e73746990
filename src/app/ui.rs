use crate::app::state::{AppMode, AppState, LayoutState};
use crate::components::footer::Footer;
use crate::components::full_preview::FullPreview;
use crate::components::header::Header;
use crate::components::option_list::OptionList;
use crate::components::preview_card::PreviewCard;
use crate::components::splash::Splash;
use crate::preview::page::PageKind;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, ListState},
    Frame,
};

pub struct AppLayout {
    pub main: Vec<Rect>,
    pub body: Vec<Rect>,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main[1])
        .to_vec();

    AppLayout { main, body }
}

/// Renders the frame and records the measured surfaces in `app_state.layout`.
pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    if app_state.mode == AppMode::FullPreview {
        draw_full_preview(f, app_state);
        return;
    }
    app_state.layout.full_preview = None;

    let layout = get_layout(f.area());

    // --- Header ---
    let header = Header {
        selected: app_state.selected_option().map(|o| o.title.as_str()),
        applied: app_state
            .selection
            .applied()
            .and_then(|id| app_state.options.iter().find(|o| &o.id == id))
            .map(|o| o.title.as_str()),
        styles: &app_state.styles,
    };
    f.render_widget(header, layout.main[0]);

    // --- Body ---
    match app_state.mode {
        AppMode::Loading | AppMode::Error => {
            app_state.layout.options_area = None;
            let splash = Splash {
                mode: app_state.mode,
                last_error: app_state.last_error.as_deref(),
                frame_count: app_state.frame_count,
                styles: &app_state.styles,
            };
            f.render_widget(splash, layout.main[1]);
        }
        AppMode::Browse | AppMode::FullPreview => {
            draw_options(f, app_state, layout.body[0]);
            draw_preview(f, app_state, layout.body[1]);
        }
    }

    // --- Footer ---
    let footer = Footer {
        state: &*app_state,
        styles: &app_state.styles,
    };
    f.render_widget(footer, layout.main[2]);
}

fn draw_options(f: &mut Frame, app_state: &mut AppState, area: Rect) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("THEMES", app_state.styles.header_item),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(app_state.styles.border_focus);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut list_state = ListState::default()
        .with_selected(Some(app_state.cursor))
        .with_offset(app_state.layout.options_offset);
    let list = OptionList {
        options: &app_state.options,
        selected: app_state.selection.selected(),
        applied: app_state.selection.applied(),
        dark_mode: app_state.composer.dark_mode(),
        styles: &app_state.styles,
    };
    f.render_stateful_widget(list, inner, &mut list_state);

    app_state.layout.options_area = Some(inner);
    app_state.layout.options_offset = list_state.offset();
}

fn draw_preview(f: &mut Frame, app_state: &mut AppState, area: Rect) {
    let styles = &app_state.styles;

    // Page tabs
    let mut tabs = vec![Span::raw(" ")];
    if let Some(set) = app_state.composer.current() {
        for (i, page) in set.pages.iter().enumerate() {
            let style = if i == app_state.page_index {
                styles.page_tab_active
            } else {
                styles.page_tab
            };
            tabs.push(Span::styled(format!(" {} ", page.kind().label()), style));
            tabs.push(Span::raw(" "));
        }
    }

    let action = if app_state.apply_action.visible {
        let style = if app_state.apply_action.enabled {
            styles.action_enabled
        } else {
            styles.action_disabled
        };
        Line::from(vec![Span::styled(" APPLY (a) ", style), Span::raw(" ")]).right_aligned()
    } else {
        Line::from("")
    };

    let title = app_state
        .composer
        .current()
        .map_or_else(String::new, |set| format!(" {} ", set.title));
    let block = Block::default()
        .title(Line::from(Span::styled(title, styles.header_item)))
        .title_bottom(action)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 2 || inner.width == 0 {
        return;
    }
    let [tab_area, page_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    f.render_widget(Line::from(tabs), tab_area);

    // Only the cover carries a wallpaper surface
    let on_cover = app_state
        .current_page()
        .is_some_and(|page| page.kind() == PageKind::Cover);
    if on_cover && page_area.width > 0 && page_area.height > 0 {
        app_state.layout.preview = Some(LayoutState::cells_to_pixels(
            page_area.width,
            page_area.height,
        ));
    }

    if let Some(page) = app_state.current_page() {
        f.render_widget(
            PreviewCard {
                page,
                styles: &app_state.styles,
            },
            page_area,
        );
    }
}

fn draw_full_preview(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    app_state.layout.options_area = None;
    if let Some(preview) = &app_state.full_preview {
        f.render_widget(
            FullPreview {
                state: preview,
                styles: &app_state.styles,
            },
            area,
        );
        app_state.layout.full_preview = Some(LayoutState::cells_to_pixels(area.width, area.height));
    }
}
