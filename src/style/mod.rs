use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod palette;

pub use palette::{dim_color, to_color, Palette};

/// Styles of the application chrome. Preview pages are drawn in the colors of
/// the theme being previewed, not these.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_item: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub list_cursor: Style,
    pub applied_mark: Style,
    pub custom_tag: Style,

    pub page_tab: Style,
    pub page_tab_active: Style,

    pub action_enabled: Style,
    pub action_disabled: Style,

    pub status_info: Style,
    pub status_success: Style,
    pub status_error: Style,

    pub footer_key: Style,
    pub footer: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        match self {
            PaletteType::CatppuccinMocha => &palette::CATPPUCCIN_MOCHA,
            PaletteType::Nord => &palette::NORD,
        }
    }
}

impl Styles {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        Self::from_palette(t.palette())
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            list_cursor: Style::default().bg(p.surface0).add_modifier(Modifier::BOLD),
            applied_mark: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            custom_tag: Style::default().fg(p.mauve).add_modifier(Modifier::ITALIC),

            page_tab: Style::default().fg(p.subtext0),
            page_tab_active: Style::default()
                .fg(p.crust)
                .bg(p.blue)
                .add_modifier(Modifier::BOLD),

            action_enabled: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            action_disabled: Style::default().bg(p.surface1).fg(p.overlay0),

            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_success: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext0),
            dimmed: Style::default()
                .fg(dim_color(p.text, 0.6))
                .add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}
