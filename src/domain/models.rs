use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::preview::image::ImageHandle;

/// Serialized-packages string identifying a theme option.
///
/// Doubles as the persistence token written to the session file, so two
/// options with the same package map always produce the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeOptionId(pub String);

impl ThemeOptionId {
    #[must_use]
    pub fn from_packages(packages: &BTreeMap<String, String>) -> Self {
        // BTreeMap iterates in key order, so the JSON text is stable.
        Self(serde_json::to_string(packages).unwrap_or_default())
    }

    #[must_use]
    pub fn placeholder(custom_id: &str) -> Self {
        Self(format!("custom:{custom_id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ARGB color packed into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorInt(pub u32);

impl ColorInt {
    /// Reserved value meaning "this accent variant is not defined". Fully
    /// transparent, so no parsed or `rgb` color can collide with it.
    pub const UNDEFINED: Self = Self(0);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TEXT_LIGHT: Self = Self::rgb(0xF5, 0xF5, 0xF5);
    pub const TEXT_DARK: Self = Self::rgb(0x20, 0x21, 0x24);
    pub const CONTROL_GREY: Self = Self::rgb(0x80, 0x86, 0x8B);
    pub const TILE_ICON: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        self != Self::UNDEFINED
    }

    #[must_use]
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parses `#RRGGBB`.
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Self(0xFF00_0000 | value))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red(), self.green(), self.blue())
    }
}

/// Everything a preview page needs to know about an option.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewInfo {
    pub accent_light: ColorInt,
    pub accent_dark: ColorInt,
    pub icons: Vec<String>,
    pub headline_font: Option<String>,
    pub body_font: Option<String>,
    pub shape_path: Option<String>,
    pub shape_app_icons: Vec<String>,
    pub bottom_sheet_corner_radius: u16,
}

impl Default for PreviewInfo {
    fn default() -> Self {
        Self {
            accent_light: ColorInt::UNDEFINED,
            accent_dark: ColorInt::UNDEFINED,
            icons: Vec::new(),
            headline_font: None,
            body_font: None,
            shape_path: None,
            shape_app_icons: Vec::new(),
            bottom_sheet_corner_radius: 0,
        }
    }
}

impl PreviewInfo {
    /// Accent for the current night mode, falling back to the other variant.
    #[must_use]
    pub fn resolve_accent_color(&self, dark_mode: bool) -> ColorInt {
        let (preferred, other) = if dark_mode {
            (self.accent_dark, self.accent_light)
        } else {
            (self.accent_light, self.accent_dark)
        };
        if preferred.is_defined() {
            preferred
        } else {
            other
        }
    }

    #[must_use]
    pub fn has_font_family(&self) -> bool {
        self.headline_font.is_some() || self.body_font.is_some()
    }

    #[must_use]
    pub fn has_both_accents(&self) -> bool {
        self.accent_light.is_defined() && self.accent_dark.is_defined()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeKind {
    Preset,
    /// User-authored theme; `defined == false` marks a placeholder with no content yet.
    Custom { id: String, defined: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOption {
    pub id: ThemeOptionId,
    pub title: String,
    pub preview: PreviewInfo,
    pub active: bool,
    pub kind: ThemeKind,
}

impl ThemeOption {
    /// Whether this option is the one currently applied to the environment.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self.kind, ThemeKind::Custom { .. })
    }

    #[must_use]
    pub fn is_undefined_custom(&self) -> bool {
        matches!(self.kind, ThemeKind::Custom { defined: false, .. })
    }

    /// Same option across two catalog snapshots. Custom themes keep their
    /// custom id while their packages (and so their `id`) change on edit.
    #[must_use]
    pub fn is_same_theme(&self, other: &ThemeOption) -> bool {
        match (&self.kind, &other.kind) {
            (ThemeKind::Custom { id: a, .. }, ThemeKind::Custom { id: b, .. }) => a == b,
            _ => self.id == other.id,
        }
    }

    #[must_use]
    pub fn serialized_packages(&self) -> &str {
        self.id.as_str()
    }

    /// Parameters for the custom theme editor, `None` for presets.
    #[must_use]
    pub fn edit_request(&self) -> Option<CustomThemeRequest> {
        match &self.kind {
            ThemeKind::Custom { id, .. } => Some(CustomThemeRequest {
                id: id.clone(),
                title: self.title.clone(),
                serialized: self.serialized_packages().to_string(),
            }),
            ThemeKind::Preset => None,
        }
    }
}

/// Outbound parameters of the "edit custom theme" sub-flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomThemeRequest {
    pub id: String,
    pub title: String,
    pub serialized: String,
}

/// How the "edit custom theme" sub-flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubflowResult {
    Deleted,
    Applied,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperInfo {
    pub title: String,
    pub thumb: ImageHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    Static,
    Rotating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperInfos {
    pub home: WallpaperInfo,
    pub lock: Option<WallpaperInfo>,
    pub presentation_mode: PresentationMode,
}
