use chrono::{DateTime, Local, Timelike};

use super::binding::{BoundBackground, HeaderTint, LayerSpec, WallpaperPreviewBinding};
use super::image::Overlay;
use crate::domain::models::{ColorInt, CustomThemeRequest, PreviewInfo};

pub const ICON_SLOT_COUNT: usize = 6;
pub const SHAPE_SLOT_COUNT: usize = 6;
pub const COVER_ICON_COUNT: usize = 4;
/// Icons (by index) drawn inside the three quick-settings tiles.
pub const COLOR_TILE_ICONS: [usize; 3] = [0, 1, 3];
pub const COVER_PAGE_WALLPAPER_ALPHA: u8 = 0x66;
pub const COVER_SCRIM: Overlay = Overlay {
    color: ColorInt::BLACK,
    alpha: 0x73,
};

/// Wall-clock minute delivered to time-sensitive pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTick {
    #[must_use]
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    #[must_use]
    pub fn from_time(time: &DateTime<Local>) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    Typography,
    Icon,
    Color,
    Shape,
}

impl PageKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Cover => "Style",
            PageKind::Typography => "Font",
            PageKind::Icon => "Icons",
            PageKind::Color => "Color",
            PageKind::Shape => "Shape",
        }
    }
}

/// First page: wallpaper, clock, a few icons and the accent.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverPage {
    pub title: String,
    pub accent: ColorInt,
    pub accent_light: ColorInt,
    pub icons: Vec<String>,
    pub headline_font: Option<String>,
    pub corner_radius: u16,
    pub shape_path: Option<String>,
    pub shape_icons: Vec<String>,
    pub on_edit: Option<CustomThemeRequest>,
    pub binding: WallpaperPreviewBinding,
    pub clock: Option<String>,
    // Snapshot taken by the last bind; `None` draws the placeholder
    pub background: Option<BoundBackground>,
    pub header: Option<HeaderTint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypographyPage {
    pub accent: ColorInt,
    pub headline_font: Option<String>,
    pub body_font: Option<String>,
    pub divider: Option<ColorInt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconPage {
    pub accent: ColorInt,
    icons: Vec<String>,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorTile {
    pub background: ColorInt,
    pub icon: Option<String>,
    pub icon_tint: ColorInt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPage {
    pub accent: ColorInt,
    icons: Vec<String>,
    pub shape_path: Option<String>,
    /// Tint for checked/selected controls; disabled controls use grey.
    pub control_tint: Option<(ColorInt, ColorInt)>,
    pub tiles: Vec<ColorTile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapePage {
    pub accent: ColorInt,
    shape_icons: Vec<String>,
    pub slots: Vec<String>,
}

/// One renderable facet of a theme option.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewPage {
    Cover(CoverPage),
    Typography(TypographyPage),
    Icon(IconPage),
    Color(ColorPage),
    Shape(ShapePage),
}

impl PreviewPage {
    #[must_use]
    pub fn cover(
        title: &str,
        info: &PreviewInfo,
        dark_mode: bool,
        scrim: Option<Overlay>,
        on_edit: Option<CustomThemeRequest>,
    ) -> Self {
        PreviewPage::Cover(CoverPage {
            title: title.to_string(),
            accent: info.resolve_accent_color(dark_mode),
            accent_light: info.accent_light,
            icons: info.icons.clone(),
            headline_font: info.headline_font.clone(),
            corner_radius: info.bottom_sheet_corner_radius,
            shape_path: info.shape_path.clone(),
            shape_icons: info.shape_app_icons.clone(),
            on_edit,
            binding: WallpaperPreviewBinding::new(LayerSpec {
                translucency: Some(COVER_PAGE_WALLPAPER_ALPHA),
                scrim,
            }),
            clock: None,
            background: None,
            header: None,
        })
    }

    #[must_use]
    pub fn typography(info: &PreviewInfo, dark_mode: bool) -> Self {
        PreviewPage::Typography(TypographyPage {
            accent: info.resolve_accent_color(dark_mode),
            headline_font: info.headline_font.clone(),
            body_font: info.body_font.clone(),
            divider: None,
        })
    }

    #[must_use]
    pub fn icon(info: &PreviewInfo, dark_mode: bool) -> Self {
        PreviewPage::Icon(IconPage {
            accent: info.resolve_accent_color(dark_mode),
            icons: info.icons.clone(),
            slots: Vec::new(),
        })
    }

    #[must_use]
    pub fn color(info: &PreviewInfo, dark_mode: bool) -> Self {
        PreviewPage::Color(ColorPage {
            accent: info.resolve_accent_color(dark_mode),
            icons: info.icons.clone(),
            shape_path: info.shape_path.clone(),
            control_tint: None,
            tiles: Vec::new(),
        })
    }

    #[must_use]
    pub fn shape(info: &PreviewInfo, dark_mode: bool) -> Self {
        PreviewPage::Shape(ShapePage {
            accent: info.resolve_accent_color(dark_mode),
            shape_icons: info.shape_app_icons.clone(),
            slots: Vec::new(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> PageKind {
        match self {
            PreviewPage::Cover(_) => PageKind::Cover,
            PreviewPage::Typography(_) => PageKind::Typography,
            PreviewPage::Icon(_) => PageKind::Icon,
            PreviewPage::Color(_) => PageKind::Color,
            PreviewPage::Shape(_) => PageKind::Shape,
        }
    }

    #[must_use]
    pub fn accent(&self) -> ColorInt {
        match self {
            PreviewPage::Cover(p) => p.accent,
            PreviewPage::Typography(p) => p.accent,
            PreviewPage::Icon(p) => p.accent,
            PreviewPage::Color(p) => p.accent,
            PreviewPage::Shape(p) => p.accent,
        }
    }

    #[must_use]
    pub fn is_time_sensitive(&self) -> bool {
        matches!(self, PreviewPage::Cover(_))
    }

    #[must_use]
    pub fn has_wallpaper_dependency(&self) -> bool {
        matches!(self, PreviewPage::Cover(_))
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        match self {
            PreviewPage::Cover(p) => p.header.is_some(),
            PreviewPage::Typography(p) => p.divider.is_some(),
            PreviewPage::Icon(p) => !p.slots.is_empty(),
            PreviewPage::Color(p) => p.control_tint.is_some(),
            PreviewPage::Shape(p) => !p.slots.is_empty(),
        }
    }

    pub fn binding_mut(&mut self) -> Option<&mut WallpaperPreviewBinding> {
        match self {
            PreviewPage::Cover(p) => Some(&mut p.binding),
            _ => None,
        }
    }

    /// Applies the page's content. Static content is bound once; `force_rebind`
    /// re-applies it, picking up data that arrived after composition.
    pub fn bind(&mut self, force_rebind: bool) {
        if self.is_bound() && !force_rebind {
            return;
        }
        match self {
            PreviewPage::Cover(p) => {
                p.background = p.binding.background().cloned();
                p.header = Some(
                    p.background
                        .as_ref()
                        .and_then(|bg| bg.contrast)
                        .map_or(
                            HeaderTint {
                                text: ColorInt::TEXT_LIGHT,
                                icon: p.accent,
                            },
                            |hint| HeaderTint::from_contrast(hint, p.accent_light),
                        ),
                );
            }
            PreviewPage::Typography(p) => {
                p.divider = Some(p.accent);
            }
            PreviewPage::Icon(p) => {
                p.slots = p.icons.iter().take(ICON_SLOT_COUNT).cloned().collect();
            }
            PreviewPage::Color(p) => {
                p.control_tint = Some((p.accent, ColorInt::CONTROL_GREY));
                p.tiles = COLOR_TILE_ICONS
                    .iter()
                    .map(|&index| ColorTile {
                        background: p.accent,
                        icon: p.icons.get(index).cloned(),
                        icon_tint: ColorInt::TILE_ICON,
                    })
                    .collect();
            }
            PreviewPage::Shape(p) => {
                p.slots = p
                    .shape_icons
                    .iter()
                    .take(SHAPE_SLOT_COUNT)
                    .cloned()
                    .collect();
            }
        }
    }

    /// Shows `tick` on time-sensitive pages; repeated ticks overwrite, never accumulate.
    pub fn update_time(&mut self, tick: &ClockTick) {
        if let PreviewPage::Cover(p) = self {
            p.clock = Some(tick.label());
        }
    }

    #[must_use]
    pub fn edit_request(&self) -> Option<&CustomThemeRequest> {
        match self {
            PreviewPage::Cover(p) => p.on_edit.as_ref(),
            _ => None,
        }
    }
}
