use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    /// Uncommitted selection to restore on the next start.
    pub selected_theme: Option<String>,
}

pub fn get_session_path() -> PathBuf {
    crate::config::state_path("session.toml")
}

pub fn load_selected_theme(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<Session>(&content) {
        Ok(session) => session.selected_theme.filter(|id| !id.is_empty()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
            None
        }
    }
}

pub fn save_selected_theme(path: &Path, selected_theme: Option<String>) {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let session = Session { selected_theme };
    match toml::to_string(&session) {
        Ok(content) => {
            if let Err(e) = std::fs::write(path, content) {
                tracing::warn!(path = %path.display(), error = %e, "failed to save session");
            }
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");
        assert_eq!(load_selected_theme(&path), None);

        save_selected_theme(&path, Some(r#"{"color":"blue"}"#.to_string()));
        assert_eq!(
            load_selected_theme(&path).as_deref(),
            Some(r#"{"color":"blue"}"#)
        );

        // A committed selection leaves nothing to restore
        save_selected_theme(&path, None);
        assert_eq!(load_selected_theme(&path), None);
    }
}
