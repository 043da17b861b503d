//! Label resolution error types.

use thiserror::Error;

/// Errors that can occur while loading or resolving labels.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Failed to read the label definitions file.
    #[error("Failed to read label definitions '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the label definitions file.
    #[error("Failed to parse label definitions '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to read the labels of the remote repository.
    #[error(transparent)]
    Tracker(#[from] crate::issues::IssueError),
}
