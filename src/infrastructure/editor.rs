use crate::domain::editor::ThemeEditor;
use anyhow::{bail, Result};
use std::path::Path;
use std::process::Command;

/// Opens the draft file in the user's `$EDITOR`, suspending the TUI meanwhile.
pub struct ExternalEditor {
    program: String,
    args: Vec<String>,
}

impl ExternalEditor {
    /// `command` may carry arguments, e.g. `"code --wait"`.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| "vi".to_string());
        Self {
            program,
            args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ThemeEditor for ExternalEditor {
    fn edit_file(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            bail!("draft {} does not exist", path.display());
        }

        // 1. Suspend TUI
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        // 2. Run editor
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .spawn()
            .and_then(|mut child| child.wait());

        // 3. Resume TUI, even when the editor failed to start
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        )?;

        match status {
            Ok(status) => Ok(status.success()),
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "failed to launch editor");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_with_arguments() {
        let editor = ExternalEditor::new("code --wait  -n");
        assert_eq!(editor.program(), "code");
        assert_eq!(editor.args, vec!["--wait".to_string(), "-n".to_string()]);
    }

    #[test]
    fn test_empty_command_falls_back_to_vi() {
        assert_eq!(ExternalEditor::new("  ").program(), "vi");
    }

    #[test]
    fn test_missing_draft_is_an_error() {
        let editor = ExternalEditor::new("true");
        assert!(editor
            .edit_file(Path::new("/nonexistent/themepick-draft.toml"))
            .is_err());
    }
}
