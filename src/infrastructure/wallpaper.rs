use crate::config::WallpaperConfig;
use crate::domain::models::{PresentationMode, WallpaperInfo, WallpaperInfos};
use crate::domain::wallpaper::WallpaperSource;
use crate::preview::image::ImageHandle;
use anyhow::{bail, Result};
use async_trait::async_trait;
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

const PLACEHOLDER_TITLE: &str = "Built-in gradient";
const PLACEHOLDER_SIZE: (u32, u32) = (96, 160);

/// Wallpapers configured as image files on disk.
pub struct FileWallpaperSource {
    home: Option<PathBuf>,
    lock: Option<PathBuf>,
}

impl FileWallpaperSource {
    pub fn new(config: &WallpaperConfig) -> Self {
        Self {
            home: config.home.clone(),
            lock: config.lock.clone(),
        }
    }

    fn info_for(path: &Path) -> WallpaperInfo {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        WallpaperInfo {
            title,
            thumb: ImageHandle::from_path(path),
        }
    }
}

/// Vertical dusk gradient used when no wallpaper is configured.
fn placeholder_image() -> DynamicImage {
    let (width, height) = PLACEHOLDER_SIZE;
    let image = RgbaImage::from_fn(width, height, |_, y| {
        let t = y as f32 / (height - 1) as f32;
        let lerp = |a: f32, b: f32| (a + (b - a) * t).round() as u8;
        Rgba([lerp(36.0, 240.0), lerp(52.0, 150.0), lerp(110.0, 90.0), 0xFF])
    });
    DynamicImage::ImageRgba8(image)
}

#[async_trait]
impl WallpaperSource for FileWallpaperSource {
    async fn current_wallpaper_infos(&self) -> Result<WallpaperInfos> {
        let home = match &self.home {
            Some(path) => {
                if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                    bail!("wallpaper {} does not exist", path.display());
                }
                Self::info_for(path)
            }
            None => WallpaperInfo {
                title: PLACEHOLDER_TITLE.to_string(),
                thumb: ImageHandle::in_memory(placeholder_image()),
            },
        };
        let lock = match &self.lock {
            Some(path) if tokio::fs::try_exists(path).await.unwrap_or(false) => {
                Some(Self::info_for(path))
            }
            Some(path) => {
                tracing::warn!(path = %path.display(), "lock screen wallpaper missing");
                None
            }
            None => None,
        };
        Ok(WallpaperInfos {
            home,
            lock,
            presentation_mode: PresentationMode::Static,
        })
    }

    fn watch_paths(&self) -> Vec<PathBuf> {
        self.home.iter().chain(self.lock.iter()).cloned().collect()
    }
}
