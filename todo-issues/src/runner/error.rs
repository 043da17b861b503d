//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Failed to read or delete the todo file.
    #[error("Failed to access todo file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Label loading and resolution errors.
    #[error(transparent)]
    Labels(#[from] crate::labels::LabelError),

    /// Issue tracker initialization errors.
    #[error(transparent)]
    Issue(#[from] crate::issues::IssueError),

    /// Action input and output errors.
    #[error(transparent)]
    Action(#[from] crate::action::ActionError),
}
