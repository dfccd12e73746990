use crate::domain::models::WallpaperInfos;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    async fn current_wallpaper_infos(&self) -> Result<WallpaperInfos>;

    // Files whose modification should trigger a wallpaper reload
    fn watch_paths(&self) -> Vec<PathBuf>;
}
