use crate::domain::catalog::ThemeManager;
use crate::domain::editor::ThemeEditor;
use crate::domain::wallpaper::WallpaperSource;
use std::path::PathBuf;
use std::sync::Arc;

/// Boundaries the runtime talks to.
#[derive(Clone)]
pub struct Services {
    pub themes: Arc<dyn ThemeManager>,
    pub wallpapers: Arc<dyn WallpaperSource>,
    pub editor: Arc<dyn ThemeEditor>,
    pub session_path: PathBuf,
}
