use crate::domain::catalog::{CustomThemeDraft, ThemeManager};
use crate::domain::error::PickerError;
use crate::domain::models::{
    ColorInt, PreviewInfo, ThemeKind, ThemeOption, ThemeOptionId, WallpaperInfo,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use tokio::sync::Mutex;

const NEW_CUSTOM_TITLE: &str = "New custom theme";
const FULL_ICONS: [&str; 6] = ["☎", "✉", "⚙", "♫", "✈", "☀"];

struct Preset {
    title: &'static str,
    packages: &'static [(&'static str, &'static str)],
    accent_light: &'static str,
    accent_dark: Option<&'static str>,
    icons: &'static [&'static str],
    headline_font: Option<&'static str>,
    body_font: Option<&'static str>,
    shape: Option<&'static str>,
    corner_radius: u16,
}

const PRESETS: &[Preset] = &[
    Preset {
        title: "Default",
        packages: &[("color", "default"), ("font", "default"), ("icons", "default"), ("shape", "circle")],
        accent_light: "#1A73E8",
        accent_dark: Some("#8AB4F8"),
        icons: &FULL_ICONS,
        headline_font: Some("Sans"),
        body_font: Some("Sans"),
        shape: Some("circle"),
        corner_radius: 2,
    },
    Preset {
        title: "Ocean",
        packages: &[("color", "ocean"), ("font", "serif"), ("icons", "outline"), ("shape", "squircle")],
        accent_light: "#00796B",
        accent_dark: Some("#4DB6AC"),
        icons: &FULL_ICONS,
        headline_font: Some("Serif"),
        body_font: Some("Sans"),
        shape: Some("squircle"),
        corner_radius: 3,
    },
    Preset {
        title: "Forest",
        packages: &[("color", "forest"), ("font", "mono"), ("icons", "filled"), ("shape", "square")],
        accent_light: "#2E7D32",
        accent_dark: Some("#81C784"),
        icons: &FULL_ICONS,
        headline_font: Some("Mono"),
        body_font: None,
        shape: Some("square"),
        corner_radius: 0,
    },
    Preset {
        title: "Sunset",
        packages: &[("color", "sunset"), ("icons", "minimal")],
        accent_light: "#E65100",
        accent_dark: Some("#FFB74D"),
        icons: &["☎", "✉", "⚙"],
        headline_font: None,
        body_font: None,
        shape: None,
        corner_radius: 1,
    },
    Preset {
        title: "Mono",
        packages: &[("color", "mono"), ("font", "mono"), ("shape", "teardrop")],
        accent_light: "#424242",
        accent_dark: None,
        icons: &FULL_ICONS,
        headline_font: Some("Mono"),
        body_font: Some("Mono"),
        shape: Some("teardrop"),
        corner_radius: 1,
    },
];

impl Preset {
    fn to_option(&self) -> ThemeOption {
        let packages: BTreeMap<String, String> = self
            .packages
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let icons: Vec<String> = self.icons.iter().map(|s| (*s).to_string()).collect();
        ThemeOption {
            id: ThemeOptionId::from_packages(&packages),
            title: self.title.to_string(),
            preview: PreviewInfo {
                accent_light: ColorInt::parse_hex(self.accent_light).unwrap_or(ColorInt::UNDEFINED),
                accent_dark: self
                    .accent_dark
                    .and_then(ColorInt::parse_hex)
                    .unwrap_or(ColorInt::UNDEFINED),
                shape_app_icons: if self.shape.is_some() {
                    icons.clone()
                } else {
                    Vec::new()
                },
                icons,
                headline_font: self.headline_font.map(str::to_string),
                body_font: self.body_font.map(str::to_string),
                shape_path: self.shape.map(str::to_string),
                bottom_sheet_corner_radius: self.corner_radius,
            },
            active: false,
            kind: ThemeKind::Preset,
        }
    }
}

/// On-disk form of a user theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredTheme {
    id: String,
    title: String,
    accent_light: Option<String>,
    accent_dark: Option<String>,
    headline_font: Option<String>,
    body_font: Option<String>,
    shape_path: Option<String>,
    corner_radius: u16,
    icons: Vec<String>,
    shape_icons: Vec<String>,
    packages: BTreeMap<String, String>,
}

impl From<CustomThemeDraft> for StoredTheme {
    fn from(draft: CustomThemeDraft) -> Self {
        Self {
            id: draft.id,
            title: draft.title,
            accent_light: draft.accent_light,
            accent_dark: draft.accent_dark,
            headline_font: draft.headline_font,
            body_font: draft.body_font,
            shape_path: draft.shape_path,
            corner_radius: draft.corner_radius,
            icons: draft.icons,
            shape_icons: draft.shape_icons,
            packages: draft.packages,
        }
    }
}

impl From<StoredTheme> for CustomThemeDraft {
    fn from(stored: StoredTheme) -> Self {
        Self {
            id: stored.id,
            title: stored.title,
            packages: stored.packages,
            accent_light: stored.accent_light,
            accent_dark: stored.accent_dark,
            icons: stored.icons,
            headline_font: stored.headline_font,
            body_font: stored.body_font,
            shape_path: stored.shape_path,
            shape_icons: stored.shape_icons,
            corner_radius: stored.corner_radius,
        }
    }
}

impl StoredTheme {
    fn to_option(&self) -> ThemeOption {
        let defined = !self.packages.is_empty();
        ThemeOption {
            id: if defined {
                ThemeOptionId::from_packages(&self.packages)
            } else {
                ThemeOptionId::placeholder(&self.id)
            },
            title: self.title.clone(),
            preview: PreviewInfo {
                accent_light: parse_accent(self.accent_light.as_deref()),
                accent_dark: parse_accent(self.accent_dark.as_deref()),
                icons: self.icons.clone(),
                headline_font: self.headline_font.clone(),
                body_font: self.body_font.clone(),
                shape_path: self.shape_path.clone(),
                shape_app_icons: self.shape_icons.clone(),
                bottom_sheet_corner_radius: self.corner_radius,
            },
            active: false,
            kind: ThemeKind::Custom {
                id: self.id.clone(),
                defined,
            },
        }
    }
}

fn parse_accent(text: Option<&str>) -> ColorInt {
    text.and_then(ColorInt::parse_hex)
        .unwrap_or(ColorInt::UNDEFINED)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogFile {
    /// Highest `custom-N` ever handed out; deleted numbers are not reused.
    last_custom: u32,
    themes: Vec<StoredTheme>,
}

fn custom_number(id: &str) -> Option<u32> {
    id.strip_prefix("custom-")?.parse().ok()
}

impl CatalogFile {
    fn next_custom_id(&self) -> String {
        let mut n = self
            .themes
            .iter()
            .filter_map(|t| custom_number(&t.id))
            .fold(self.last_custom, u32::max)
            + 1;
        while self.themes.iter().any(|t| t.id == format!("custom-{n}")) {
            n += 1;
        }
        format!("custom-{n}")
    }

    fn upsert(&mut self, stored: StoredTheme) {
        if let Some(n) = custom_number(&stored.id) {
            self.last_custom = self.last_custom.max(n);
        }
        match self.themes.iter_mut().find(|t| t.id == stored.id) {
            Some(existing) => *existing = stored,
            None => self.themes.push(stored),
        }
    }

    /// Title of a preset or other custom theme already using `option`'s id.
    fn conflicting_title(&self, custom_id: &str, option: &ThemeOption) -> Option<String> {
        PRESETS
            .iter()
            .map(Preset::to_option)
            .chain(
                self.themes
                    .iter()
                    .filter(|t| t.id != custom_id)
                    .map(StoredTheme::to_option),
            )
            .find(|o| o.id == option.id)
            .map(|o| o.title)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AppliedFile {
    id: Option<String>,
    wallpaper: Option<String>,
}

/// Preset catalog plus custom themes kept in a TOML file.
pub struct FileThemeManager {
    catalog_path: PathBuf,
    applied_path: PathBuf,
    cache: Mutex<Option<CatalogFile>>,
}

impl FileThemeManager {
    pub fn new(catalog_path: PathBuf, applied_path: PathBuf) -> Self {
        Self {
            catalog_path,
            applied_path,
            cache: Mutex::new(None),
        }
    }

    async fn read_catalog(&self) -> Result<CatalogFile> {
        if !tokio::fs::try_exists(&self.catalog_path).await.unwrap_or(false) {
            return Ok(CatalogFile::default());
        }
        let content = tokio::fs::read_to_string(&self.catalog_path)
            .await
            .with_context(|| format!("failed to read {}", self.catalog_path.display()))?;
        let file: CatalogFile = toml::from_str(&content)
            .map_err(|e| PickerError::CatalogFetch(format!("{}: {e}", self.catalog_path.display())))?;
        Ok(file)
    }

    async fn write_catalog(&self, catalog: &CatalogFile) -> Result<()> {
        if let Some(parent) = self.catalog_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string(catalog)?;
        tokio::fs::write(&self.catalog_path, content)
            .await
            .with_context(|| format!("failed to write {}", self.catalog_path.display()))
    }

    async fn applied_id(&self) -> Option<String> {
        let content = tokio::fs::read_to_string(&self.applied_path).await.ok()?;
        match toml::from_str::<AppliedFile>(&content) {
            Ok(file) => file.id,
            Err(e) => {
                tracing::warn!(path = %self.applied_path.display(), error = %e, "ignoring unreadable applied theme");
                None
            }
        }
    }
}

#[async_trait]
impl ThemeManager for FileThemeManager {
    async fn fetch_options(&self, force_reload: bool) -> Result<Vec<ThemeOption>> {
        let mut cache = self.cache.lock().await;
        if force_reload || cache.is_none() {
            *cache = Some(self.read_catalog().await?);
        }
        let empty = CatalogFile::default();
        let catalog = cache.as_ref().unwrap_or(&empty);

        let mut options: Vec<ThemeOption> = PRESETS.iter().map(Preset::to_option).collect();
        let mut seen: HashSet<ThemeOptionId> = options.iter().map(|o| o.id.clone()).collect();
        for theme in &catalog.themes {
            let option = theme.to_option();
            if !seen.insert(option.id.clone()) {
                tracing::warn!(id = %theme.id, title = %theme.title, "skipping custom theme with duplicate packages");
                continue;
            }
            options.push(option);
        }
        // Trailing placeholder that opens the editor on a fresh theme
        options.push(
            StoredTheme {
                id: catalog.next_custom_id(),
                title: NEW_CUSTOM_TITLE.to_string(),
                ..Default::default()
            }
            .to_option(),
        );

        if let Some(applied) = self.applied_id().await {
            for option in &mut options {
                option.active = option.id.as_str() == applied;
            }
        }
        tracing::debug!(count = options.len(), force_reload, "fetched theme options");
        Ok(options)
    }

    async fn apply(&self, option: &ThemeOption, wallpaper: Option<WallpaperInfo>) -> Result<()> {
        if option.is_undefined_custom() {
            return Err(PickerError::Apply {
                id: option.id.to_string(),
                message: "custom theme has no content".to_string(),
            }
            .into());
        }
        if let Some(parent) = self.applied_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = AppliedFile {
            id: Some(option.id.as_str().to_string()),
            wallpaper: wallpaper.map(|w| w.title),
        };
        tokio::fs::write(&self.applied_path, toml::to_string(&file)?)
            .await
            .with_context(|| format!("failed to write {}", self.applied_path.display()))?;
        Ok(())
    }

    async fn load_custom_theme(&self, id: &str) -> Result<Option<CustomThemeDraft>> {
        let catalog = self.read_catalog().await?;
        Ok(catalog
            .themes
            .into_iter()
            .find(|t| t.id == id)
            .map(CustomThemeDraft::from))
    }

    async fn save_custom_theme(&self, draft: CustomThemeDraft) -> Result<ThemeOption> {
        let mut cache = self.cache.lock().await;
        let mut catalog = self.read_catalog().await?;
        let stored = StoredTheme::from(draft);
        let option = stored.to_option();
        if let Some(existing) = catalog.conflicting_title(&stored.id, &option) {
            return Err(PickerError::DuplicateTheme {
                id: stored.id,
                existing,
            }
            .into());
        }
        tracing::info!(id = %stored.id, "saved custom theme");
        catalog.upsert(stored);
        self.write_catalog(&catalog).await?;
        *cache = Some(catalog);
        Ok(option)
    }

    async fn delete_custom_theme(&self, id: &str) -> Result<()> {
        let mut cache = self.cache.lock().await;
        let mut catalog = self.read_catalog().await?;
        catalog.themes.retain(|t| t.id != id);
        self.write_catalog(&catalog).await?;
        *cache = Some(catalog);
        tracing::info!(id, "deleted custom theme");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> FileThemeManager {
        FileThemeManager::new(
            dir.path().join("custom_themes.toml"),
            dir.path().join("applied.toml"),
        )
    }

    fn draft(id: &str) -> CustomThemeDraft {
        let mut packages = BTreeMap::new();
        packages.insert("color".to_string(), "teal".to_string());
        CustomThemeDraft {
            id: id.to_string(),
            title: "Teal".to_string(),
            packages,
            accent_light: Some("#008080".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_presets_and_trailing_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let options = store(&dir).fetch_options(false).await.unwrap();
        assert_eq!(options.len(), PRESETS.len() + 1);
        assert_eq!(options[0].title, "Default");
        assert!(options.last().unwrap().is_undefined_custom());
        assert!(options.iter().all(|o| !o.is_active()));
        // Mono leaves the dark accent undefined
        let mono = options.iter().find(|o| o.title == "Mono").unwrap();
        assert!(!mono.preview.accent_dark.is_defined());
    }

    #[tokio::test]
    async fn test_apply_marks_active() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let options = store.fetch_options(false).await.unwrap();
        store.apply(&options[1], None).await.unwrap();

        let options = store.fetch_options(false).await.unwrap();
        let active: Vec<_> = options.iter().filter(|o| o.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Ocean");
    }

    #[tokio::test]
    async fn test_placeholder_cannot_be_applied() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let options = store.fetch_options(false).await.unwrap();
        assert!(store.apply(options.last().unwrap(), None).await.is_err());
    }

    #[tokio::test]
    async fn test_custom_theme_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let saved = store.save_custom_theme(draft("custom-1")).await.unwrap();
        assert!(saved.is_custom() && !saved.is_undefined_custom());

        let options = store.fetch_options(false).await.unwrap();
        assert!(options.iter().any(|o| o.is_same_theme(&saved)));
        // The placeholder skips ids already in use
        let placeholder = options.last().unwrap();
        assert_eq!(
            placeholder.edit_request().map(|r| r.id),
            Some("custom-2".to_string())
        );

        let loaded = store.load_custom_theme("custom-1").await.unwrap().unwrap();
        assert_eq!(loaded.accent_light.as_deref(), Some("#008080"));

        store.delete_custom_theme("custom-1").await.unwrap();
        assert!(store.load_custom_theme("custom-1").await.unwrap().is_none());
        let options = store.fetch_options(false).await.unwrap();
        assert!(!options.iter().any(|o| o.is_same_theme(&saved)));
    }

    fn default_packages() -> BTreeMap<String, String> {
        PRESETS[0]
            .packages
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_packages() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let mut copy = draft("custom-1");
        copy.packages = default_packages();
        let err = store.save_custom_theme(copy).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PickerError>(),
            Some(PickerError::DuplicateTheme { existing, .. }) if existing == "Default"
        ));

        store.save_custom_theme(draft("custom-1")).await.unwrap();
        // Re-saving the same theme is fine, a second theme with its packages is not
        store.save_custom_theme(draft("custom-1")).await.unwrap();
        assert!(store.save_custom_theme(draft("custom-2")).await.is_err());
    }

    #[tokio::test]
    async fn test_snapshot_ids_unique_with_one_active() {
        let dir = tempfile::tempdir().unwrap();
        // Hand-edited catalog repeating a preset and another custom theme
        let mut mine = StoredTheme::from(draft("custom-1"));
        mine.packages = default_packages();
        let catalog = CatalogFile {
            last_custom: 3,
            themes: vec![
                mine,
                StoredTheme::from(draft("custom-2")),
                StoredTheme::from(draft("custom-3")),
            ],
        };
        std::fs::write(
            dir.path().join("custom_themes.toml"),
            toml::to_string(&catalog).unwrap(),
        )
        .unwrap();

        let store = store(&dir);
        let options = store.fetch_options(false).await.unwrap();
        let ids: HashSet<_> = options.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids.len(), options.len());
        assert_eq!(options.len(), PRESETS.len() + 2);

        store.apply(&options[0], None).await.unwrap();
        let options = store.fetch_options(true).await.unwrap();
        let active: Vec<_> = options.iter().filter(|o| o.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Default");
    }

    #[tokio::test]
    async fn test_deleted_custom_id_is_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let saved = store.save_custom_theme(draft("custom-1")).await.unwrap();
        store.delete_custom_theme("custom-1").await.unwrap();

        // A fresh instance only sees what was written to disk
        let reopened = FileThemeManager::new(
            dir.path().join("custom_themes.toml"),
            dir.path().join("applied.toml"),
        );
        let options = reopened.fetch_options(false).await.unwrap();
        let placeholder = options.last().unwrap();
        assert_eq!(
            placeholder.edit_request().map(|r| r.id),
            Some("custom-2".to_string())
        );
        assert!(!placeholder.is_same_theme(&saved));
    }

    #[tokio::test]
    async fn test_cache_reused_until_forced() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let before = store.fetch_options(false).await.unwrap().len();

        // Another process writes the catalog behind our back
        let other = FileThemeManager::new(
            dir.path().join("custom_themes.toml"),
            dir.path().join("applied.toml"),
        );
        other.save_custom_theme(draft("custom-9")).await.unwrap();

        assert_eq!(store.fetch_options(false).await.unwrap().len(), before);
        assert_eq!(store.fetch_options(true).await.unwrap().len(), before + 1);
    }

    #[tokio::test]
    async fn test_corrupt_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("custom_themes.toml"), "themes = 3").unwrap();
        assert!(store(&dir).fetch_options(false).await.is_err());
    }
}
