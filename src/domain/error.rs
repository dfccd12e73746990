use crate::preview::image::ImagePipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("failed to fetch theme options: {0}")]
    CatalogFetch(String),
    #[error("failed to apply theme {id}: {message}")]
    Apply { id: String, message: String },
    #[error("custom theme {id} has the same packages as {existing:?}")]
    DuplicateTheme { id: String, existing: String },
    #[error("no active, restored or default theme option (looked for {default_title:?})")]
    MissingDefaultOption { default_title: String },
    #[error(transparent)]
    ImagePipeline(#[from] ImagePipelineError),
    #[error("invalid configuration: {0}")]
    Config(String),
}
