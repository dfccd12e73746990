use anyhow::Result;
use std::path::Path;

/// Interactive editor used by the custom theme sub-flow.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeEditor: Send + Sync {
    /// Blocks until the user closes the editor. `Ok(false)` means the editor
    /// exited unsuccessfully and the file should be treated as untouched.
    fn edit_file(&self, path: &Path) -> Result<bool>;
}
