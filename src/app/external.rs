use crate::app::services::Services;
use crate::domain::catalog::CustomThemeDraft;
use crate::domain::models::{CustomThemeRequest, SubflowResult, WallpaperInfo};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const ON_EXIT_SAVE: &str = "save";
const ON_EXIT_APPLY: &str = "apply";
const ON_EXIT_DELETE: &str = "delete";
const ON_EXIT_CANCEL: &str = "cancel";

/// File handed to the editor. Scalars first, the package table last.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct EditorFile {
    /// "save", "apply", "delete" or "cancel"
    on_exit: String,
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

impl EditorFile {
    fn from_draft(draft: CustomThemeDraft) -> Self {
        Self {
            on_exit: ON_EXIT_SAVE.to_string(),
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

    fn into_draft(self, id: &str) -> CustomThemeDraft {
        CustomThemeDraft {
            id: id.to_string(),
            title: self.title,
            packages: self.packages,
            accent_light: self.accent_light,
            accent_dark: self.accent_dark,
            icons: self.icons,
            headline_font: self.headline_font,
            body_font: self.body_font,
            shape_path: self.shape_path,
            shape_icons: self.shape_icons,
            corner_radius: self.corner_radius,
        }
    }
}

/// Starting point for a placeholder that has never been saved.
fn blank_draft(request: &CustomThemeRequest) -> CustomThemeDraft {
    CustomThemeDraft {
        id: request.id.clone(),
        title: request.title.clone(),
        packages: serde_json::from_str(&request.serialized).unwrap_or_default(),
        ..Default::default()
    }
}

fn draft_path(id: &str) -> PathBuf {
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    std::env::temp_dir().join(format!("themepick-{safe}.toml"))
}

/// Runs the "edit custom theme" sub-flow for `request`.
///
/// The editor blocks the caller until it exits. `wallpaper` is used when the
/// user chooses to apply straight from the editor.
pub async fn edit_custom_theme(
    services: &Services,
    request: &CustomThemeRequest,
    wallpaper: Option<WallpaperInfo>,
) -> Result<SubflowResult> {
    let draft = services
        .themes
        .load_custom_theme(&request.id)
        .await?
        .unwrap_or_else(|| blank_draft(request));

    let path = draft_path(&request.id);
    let content = toml::to_string(&EditorFile::from_draft(draft))
        .context("failed to render custom theme")?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let edited = services.editor.edit_file(&path);
    let outcome = match edited {
        Ok(true) => read_outcome(services, request, &path, wallpaper).await,
        Ok(false) => Ok(SubflowResult::Other),
        Err(e) => Err(e),
    };
    let _ = std::fs::remove_file(&path);
    outcome
}

async fn read_outcome(
    services: &Services,
    request: &CustomThemeRequest,
    path: &Path,
    wallpaper: Option<WallpaperInfo>,
) -> Result<SubflowResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if content.trim().is_empty() {
        services.themes.delete_custom_theme(&request.id).await?;
        return Ok(SubflowResult::Deleted);
    }

    let file: EditorFile = toml::from_str(&content).context("invalid custom theme file")?;
    match file.on_exit.as_str() {
        ON_EXIT_DELETE => {
            services.themes.delete_custom_theme(&request.id).await?;
            Ok(SubflowResult::Deleted)
        }
        ON_EXIT_CANCEL => Ok(SubflowResult::Other),
        ON_EXIT_APPLY => {
            let option = services
                .themes
                .save_custom_theme(file.into_draft(&request.id))
                .await?;
            services.themes.apply(&option, wallpaper).await?;
            tracing::info!(target: "themepick::events", event = "theme_applied", id = %option.id, custom = true);
            Ok(SubflowResult::Applied)
        }
        _ => {
            services
                .themes
                .save_custom_theme(file.into_draft(&request.id))
                .await?;
            Ok(SubflowResult::Other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockThemeManager;
    use crate::domain::editor::MockThemeEditor;
    use crate::domain::models::test_support::custom;
    use crate::domain::wallpaper::MockWallpaperSource;
    use std::sync::Arc;

    fn request(id: &str) -> CustomThemeRequest {
        CustomThemeRequest {
            id: id.to_string(),
            title: "Mine".to_string(),
            serialized: r#"{"color":"teal"}"#.to_string(),
        }
    }

    fn services(themes: MockThemeManager, editor: MockThemeEditor) -> Services {
        Services {
            themes: Arc::new(themes),
            wallpapers: Arc::new(MockWallpaperSource::new()),
            editor: Arc::new(editor),
            session_path: std::env::temp_dir().join("themepick-unused-session.toml"),
        }
    }

    /// Editor that replaces `on_exit = "save"` in the draft with `on_exit`.
    fn editor_choosing(on_exit: &'static str) -> MockThemeEditor {
        let mut editor = MockThemeEditor::new();
        editor.expect_edit_file().returning(move |path| {
            let content = std::fs::read_to_string(path)?;
            assert!(content.contains("on_exit = \"save\""));
            std::fs::write(
                path,
                content.replace("on_exit = \"save\"", &format!("on_exit = \"{on_exit}\"")),
            )?;
            Ok(true)
        });
        editor
    }

    #[tokio::test]
    async fn test_delete_outcome() {
        let mut themes = MockThemeManager::new();
        themes.expect_load_custom_theme().returning(|_| Ok(None));
        themes
            .expect_delete_custom_theme()
            .withf(|id| id == "del")
            .times(1)
            .returning(|_| Ok(()));
        let services = services(themes, editor_choosing("delete"));
        let outcome = edit_custom_theme(&services, &request("del"), None).await.unwrap();
        assert_eq!(outcome, SubflowResult::Deleted);
        assert!(!draft_path("del").exists());
    }

    #[tokio::test]
    async fn test_apply_outcome_saves_then_applies() {
        let mut themes = MockThemeManager::new();
        themes.expect_load_custom_theme().returning(|_| Ok(None));
        themes
            .expect_save_custom_theme()
            .withf(|draft| draft.id == "app" && draft.packages.get("color").map(String::as_str) == Some("teal"))
            .times(1)
            .returning(|draft| Ok(custom(&draft.id, &draft.title, true)));
        themes.expect_apply().times(1).returning(|_, _| Ok(()));
        let services = services(themes, editor_choosing("apply"));
        let outcome = edit_custom_theme(&services, &request("app"), None).await.unwrap();
        assert_eq!(outcome, SubflowResult::Applied);
    }

    #[tokio::test]
    async fn test_cancel_leaves_store_untouched() {
        let mut themes = MockThemeManager::new();
        themes.expect_load_custom_theme().returning(|_| Ok(None));
        themes.expect_save_custom_theme().never();
        let services = services(themes, editor_choosing("cancel"));
        let outcome = edit_custom_theme(&services, &request("can"), None).await.unwrap();
        assert_eq!(outcome, SubflowResult::Other);
    }

    #[tokio::test]
    async fn test_plain_save_is_other() {
        let mut themes = MockThemeManager::new();
        themes.expect_load_custom_theme().returning(|id| {
            Ok(Some(CustomThemeDraft {
                id: id.to_string(),
                title: "Saved before".to_string(),
                accent_light: Some("#112233".to_string()),
                ..Default::default()
            }))
        });
        themes
            .expect_save_custom_theme()
            .withf(|draft| draft.accent_light.as_deref() == Some("#112233"))
            .times(1)
            .returning(|draft| Ok(custom(&draft.id, &draft.title, true)));
        let services = services(themes, editor_choosing("save"));
        let outcome = edit_custom_theme(&services, &request("sav"), None).await.unwrap();
        assert_eq!(outcome, SubflowResult::Other);
    }

    #[tokio::test]
    async fn test_failed_editor_is_other() {
        let mut themes = MockThemeManager::new();
        themes.expect_load_custom_theme().returning(|_| Ok(None));
        let mut editor = MockThemeEditor::new();
        editor.expect_edit_file().returning(|_| Ok(false));
        let services = services(themes, editor);
        let outcome = edit_custom_theme(&services, &request("bad"), None).await.unwrap();
        assert_eq!(outcome, SubflowResult::Other);
        assert!(!draft_path("bad").exists());
    }
}
