use crate::domain::models::{CustomThemeRequest, ThemeOption, WallpaperInfo};
use crate::preview::binding::BindRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchOptions { force_reload: bool },
    RefreshOptions,
    LoadWallpaper,
    BindBackground(BindRequest),
    Apply {
        option: ThemeOption,
        wallpaper: Option<WallpaperInfo>,
    },
    EditCustomTheme(CustomThemeRequest),
    StartClock,
    StopClock,
    SaveSession(Option<String>),
}
