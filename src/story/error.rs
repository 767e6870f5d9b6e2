//! Story loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading or parsing stories.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("Failed to read story feed {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid story JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown media type '{0}' (expected image, video or text)")]
    UnknownMediaType(String),

    #[error("Story feed must be a list of groups or an object with a 'results' list")]
    UnexpectedShape,
}
