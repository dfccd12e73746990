use crate::domain::error::PickerError;
use crate::style::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_THEME_TITLE: &str = "Default";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperConfig {
    pub home: Option<PathBuf>,
    pub lock: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title of the option selected when nothing is applied or restored.
    pub default_theme_title: String,
    /// Apply every theme with the current wallpaper instead of its own.
    pub use_device_wallpaper: bool,
    pub dark_mode: bool,
    pub palette: PaletteType,
    pub wallpaper: WallpaperConfig,
    pub catalog_path: Option<PathBuf>,
    pub applied_path: Option<PathBuf>,
    pub editor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_theme_title: DEFAULT_THEME_TITLE.to_string(),
            use_device_wallpaper: false,
            dark_mode: false,
            palette: PaletteType::default(),
            wallpaper: WallpaperConfig::default(),
            catalog_path: None,
            applied_path: None,
            editor: None,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("themepick");
        path
    })
}

impl Config {
    /// Reads `~/.config/themepick/config.toml`, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, PickerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PickerError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| PickerError::Config(format!("{}: {e}", path.display())))
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| state_path("custom_themes.toml"))
    }

    pub fn applied_path(&self) -> PathBuf {
        self.applied_path
            .clone()
            .unwrap_or_else(|| state_path("applied.toml"))
    }

    /// Editor command for the custom theme sub-flow.
    pub fn editor_command(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}

pub fn state_path(file: &str) -> PathBuf {
    config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(file)
}
