use crate::domain::models::{ThemeOption, WallpaperInfo};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Editable content of a custom theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomThemeDraft {
    pub id: String,
    pub title: String,
    pub packages: BTreeMap<String, String>,
    pub accent_light: Option<String>,
    pub accent_dark: Option<String>,
    pub icons: Vec<String>,
    pub headline_font: Option<String>,
    pub body_font: Option<String>,
    pub shape_path: Option<String>,
    pub shape_icons: Vec<String>,
    pub corner_radius: u16,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThemeManager: Send + Sync {
    // Full set of selectable options, `active` filled in against applied state
    async fn fetch_options(&self, force_reload: bool) -> Result<Vec<ThemeOption>>;

    // Commits `option`; `wallpaper` overrides the theme's own wallpaper when set
    async fn apply(&self, option: &ThemeOption, wallpaper: Option<WallpaperInfo>) -> Result<()>;

    async fn load_custom_theme(&self, id: &str) -> Result<Option<CustomThemeDraft>>;
    async fn save_custom_theme(&self, draft: CustomThemeDraft) -> Result<ThemeOption>;
    async fn delete_custom_theme(&self, id: &str) -> Result<()>;
}
