use super::keymap::KeyMap;
use super::selection::SelectionController;
use crate::config::Config;
use crate::domain::models::{ThemeOption, WallpaperInfo, WallpaperInfos};
use crate::preview::composer::PreviewComposer;
use crate::preview::page::PreviewPage;
use crate::style::Styles;
use std::sync::Arc;

pub mod full_preview;
pub mod layout;
pub mod notice;

// Re-exports
pub use full_preview::FullPreviewState;
pub use layout::LayoutState;
pub use notice::{Notice, NoticeKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Loading,     // Catalog fetch in flight, content hidden
    Error,       // Catalog fetch failed, content hidden
    Browse,      // Option list and preview pages
    FullPreview, // Full-screen preview of the selection
}

/// The bottom "Apply" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyActionState {
    pub visible: bool,
    pub enabled: bool,
}

impl Default for ApplyActionState {
    fn default() -> Self {
        Self {
            visible: false,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<String>,
    pub notice: Option<Notice>,

    // --- Catalog & Selection ---
    pub options: Vec<ThemeOption>,
    pub cursor: usize,
    pub selection: SelectionController,
    // Read once on the first catalog load
    pub persisted_selection: Option<String>,

    // --- Preview ---
    pub composer: PreviewComposer,
    pub page_index: usize,
    pub wallpaper: Option<WallpaperInfos>,
    pub full_preview: Option<FullPreviewState>,
    pub full_preview_sessions: u64,

    // --- Controls ---
    pub apply_action: ApplyActionState,

    // --- Lifecycle ---
    pub clock_registered: bool,

    // --- Layout ---
    pub layout: LayoutState,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub styles: Styles,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config, persisted_selection: Option<String>) -> Self {
        Self {
            selection: SelectionController::new(
                config.default_theme_title.clone(),
                config.use_device_wallpaper,
            ),
            composer: PreviewComposer::new(config.dark_mode),
            persisted_selection,
            styles: Styles::from_palette_type(config.palette),
            ..Default::default()
        }
    }

    pub fn selected_option(&self) -> Option<&ThemeOption> {
        self.selection.selected()
    }

    pub fn option_at_cursor(&self) -> Option<&ThemeOption> {
        self.options.get(self.cursor)
    }

    pub fn current_page(&self) -> Option<&PreviewPage> {
        self.composer.current()?.page(self.page_index)
    }

    pub fn page_count(&self) -> usize {
        self.composer.current().map_or(0, |set| set.len())
    }

    /// Home wallpaper handed to the apply workflow when the selection
    /// overrides the theme's own wallpaper.
    pub fn override_wallpaper(&self) -> Option<WallpaperInfo> {
        if !self.selection.state().use_device_wallpaper_override {
            return None;
        }
        self.wallpaper.as_ref().map(|infos| infos.home.clone())
    }

    pub fn set_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice::new(kind, message));
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = Config::default();
        Self {
            should_quit: false,
            mode: AppMode::Loading,
            last_error: None,
            notice: None,
            options: Vec::new(),
            cursor: 0,
            selection: SelectionController::new(
                config.default_theme_title,
                config.use_device_wallpaper,
            ),
            persisted_selection: None,
            composer: PreviewComposer::new(config.dark_mode),
            page_index: 0,
            wallpaper: None,
            full_preview: None,
            full_preview_sessions: 0,
            apply_action: ApplyActionState::default(),
            clock_registered: false,
            layout: LayoutState::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            styles: Styles::default(),
        }
    }
}
