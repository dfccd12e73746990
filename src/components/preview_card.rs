use super::backdrop::Backdrop;
use crate::domain::models::ColorInt;
use crate::preview::page::{
    ColorPage, CoverPage, IconPage, PreviewPage, ShapePage, TypographyPage, COVER_ICON_COUNT,
};
use crate::style::{to_color, Styles};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Canvas behind pages that have no wallpaper.
const CARD_BASE: ColorInt = ColorInt::rgb(0x20, 0x21, 0x24);

/// Brackets standing in for an icon mask.
pub fn shape_brackets(shape_path: Option<&str>) -> (&'static str, &'static str) {
    match shape_path {
        Some("circle") => ("(", ")"),
        Some("squircle") => ("{", "}"),
        Some("teardrop") => ("<", ")"),
        _ => ("[", "]"),
    }
}

fn fg(color: ColorInt) -> Style {
    Style::default().fg(to_color(color))
}

/// One preview page drawn in the colors of the previewed theme.
pub struct PreviewCard<'a> {
    pub page: &'a PreviewPage,
    pub styles: &'a Styles,
}

impl Widget for PreviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.page {
            PreviewPage::Cover(page) => render_cover(page, self.styles, area, buf),
            PreviewPage::Typography(page) => render_typography(page, area, buf),
            PreviewPage::Icon(page) => render_icons(page, area, buf),
            PreviewPage::Color(page) => render_color(page, area, buf),
            PreviewPage::Shape(page) => render_shape(page, area, buf),
        }
    }
}

/// Text over an already drawn background: keep its colors, set only fg.
fn overlay_line(line: Line<'_>, area: Rect, buf: &mut Buffer, alignment: Alignment) {
    if area.height == 0 {
        return;
    }
    let width = line.width() as u16;
    let x = match alignment {
        Alignment::Left => area.x,
        Alignment::Center => area.x + area.width.saturating_sub(width) / 2,
        Alignment::Right => area.x + area.width.saturating_sub(width),
    };
    let mut col = x;
    for span in &line.spans {
        for ch in span.content.chars() {
            if col >= area.x + area.width {
                return;
            }
            if let Some(cell) = buf.cell_mut((col, area.y)) {
                cell.set_char(ch);
                if let Some(color) = span.style.fg {
                    cell.set_fg(color);
                }
                cell.modifier.insert(span.style.add_modifier);
            }
            col += 1;
        }
    }
}

fn render_cover(page: &CoverPage, styles: &Styles, area: Rect, buf: &mut Buffer) {
    let background = page.background.as_ref().map(|bg| &bg.image);
    Backdrop {
        image: background,
        base: CARD_BASE,
    }
    .render(area, buf);

    let header = page.header.unwrap_or(crate::preview::binding::HeaderTint {
        text: ColorInt::TEXT_LIGHT,
        icon: page.accent,
    });

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    // Status bar: clock left, icons right
    let clock = page.clock.clone().unwrap_or_else(|| "--:--".to_string());
    overlay_line(
        Line::from(Span::styled(format!(" {clock}"), fg(header.text))),
        rows[0],
        buf,
        Alignment::Left,
    );
    let icons: Vec<&str> = page
        .icons
        .iter()
        .take(COVER_ICON_COUNT)
        .map(String::as_str)
        .collect();
    overlay_line(
        Line::from(Span::styled(format!("{} ", icons.join(" ")), fg(header.icon))),
        rows[0],
        buf,
        Alignment::Right,
    );

    if page.background.is_none() {
        overlay_line(
            Line::from(Span::styled("loading wallpaper…", fg(ColorInt::CONTROL_GREY))),
            Rect {
                y: rows[1].y + rows[1].height / 2,
                height: 1,
                ..rows[1]
            },
            buf,
            Alignment::Center,
        );
    }

    let mut title = vec![Span::styled(
        page.title.clone(),
        fg(header.text).add_modifier(Modifier::BOLD),
    )];
    if let Some(font) = &page.headline_font {
        title.push(Span::styled(format!("  {font}"), fg(header.text)));
    }
    overlay_line(Line::from(title), rows[2], buf, Alignment::Center);

    let (open, close) = shape_brackets(page.shape_path.as_deref());
    let shapes: String = page
        .shape_icons
        .iter()
        .take(COVER_ICON_COUNT)
        .map(|icon| format!("{open}{icon}{close}"))
        .collect::<Vec<_>>()
        .join(" ");
    overlay_line(
        Line::from(Span::styled(shapes, fg(page.accent))),
        rows[3],
        buf,
        Alignment::Center,
    );

    let bar_width = usize::from(area.width / 2).max(1);
    let mut bottom = vec![Span::styled(
        "▬".repeat(bar_width),
        fg(page.accent),
    )];
    if page.on_edit.is_some() {
        bottom.push(Span::raw(" "));
        bottom.push(Span::styled("e", styles.footer_key));
        bottom.push(Span::styled(" edit", fg(header.text)));
    }
    overlay_line(Line::from(bottom), rows[4], buf, Alignment::Center);
}

fn render_typography(page: &TypographyPage, area: Rect, buf: &mut Buffer) {
    Backdrop {
        image: None,
        base: CARD_BASE,
    }
    .render(area, buf);

    let headline = page.headline_font.as_deref().unwrap_or("System");
    let body = page.body_font.as_deref().unwrap_or("System");
    let divider = page.divider.unwrap_or(ColorInt::CONTROL_GREY);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Aa  {headline}"),
            fg(ColorInt::TEXT_LIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(usize::from(area.width.saturating_sub(4))),
            fg(divider),
        )),
        Line::from(Span::styled(
            format!("The quick brown fox jumps over the lazy dog. ({body})"),
            fg(ColorInt::TEXT_LIGHT),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_icons(page: &IconPage, area: Rect, buf: &mut Buffer) {
    Backdrop {
        image: None,
        base: CARD_BASE,
    }
    .render(area, buf);

    let per_row = (page.slots.len() / 2).max(1);
    let mut lines = vec![Line::from("")];
    for chunk in page.slots.chunks(per_row) {
        let spans: Vec<Span> = chunk
            .iter()
            .map(|icon| Span::styled(format!("  {icon}  "), fg(page.accent)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_color(page: &ColorPage, area: Rect, buf: &mut Buffer) {
    Backdrop {
        image: None,
        base: CARD_BASE,
    }
    .render(area, buf);

    let (open, close) = shape_brackets(page.shape_path.as_deref());
    let tiles: Vec<Span> = page
        .tiles
        .iter()
        .flat_map(|tile| {
            let icon = tile.icon.as_deref().unwrap_or(" ");
            [
                Span::styled(
                    format!(" {open}{icon}{close} "),
                    Style::default()
                        .fg(to_color(tile.icon_tint))
                        .bg(to_color(tile.background)),
                ),
                Span::raw("  "),
            ]
        })
        .collect();

    let (on, off) = page
        .control_tint
        .unwrap_or((page.accent, ColorInt::CONTROL_GREY));
    let lines = vec![
        Line::from(""),
        Line::from(tiles),
        Line::from(""),
        Line::from(vec![
            Span::styled("◉ ", fg(on)),
            Span::styled("on   ", fg(ColorInt::TEXT_LIGHT)),
            Span::styled("◯ ", fg(off)),
            Span::styled("off   ", fg(ColorInt::TEXT_LIGHT)),
            Span::styled("☑ ", fg(on)),
            Span::styled("checked", fg(ColorInt::TEXT_LIGHT)),
        ]),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_shape(page: &ShapePage, area: Rect, buf: &mut Buffer) {
    Backdrop {
        image: None,
        base: CARD_BASE,
    }
    .render(area, buf);

    let per_row = (page.slots.len() / 2).max(1);
    let mut lines = vec![Line::from("")];
    for chunk in page.slots.chunks(per_row) {
        let spans: Vec<Span> = chunk
            .iter()
            .map(|icon| {
                Span::styled(
                    format!(" ({icon}) "),
                    Style::default()
                        .fg(to_color(ColorInt::TILE_ICON))
                        .bg(to_color(page.accent)),
                )
            })
            .flat_map(|span| [span, Span::raw("  ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
