// score-core/src/error.rs
//! Error taxonomy of the scoring core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// An empty word set reached the engine
    #[error("query contains no words")]
    InvalidQuery,

    #[error("directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("directory {} cannot be read: {}", .path.display(), .reason)]
    DirectoryUnreadable { path: PathBuf, reason: String },

    /// Bad walker settings, e.g. an invalid ignore pattern
    #[error("invalid walker configuration: {0}")]
    InvalidConfig(String),
}

impl ScoreError {
    /// Whether the error concerns the directory to index
    pub fn is_directory_error(&self) -> bool {
        matches!(
            self,
            ScoreError::DirectoryNotFound(_) | ScoreError::DirectoryUnreadable { .. }
        )
    }
}
