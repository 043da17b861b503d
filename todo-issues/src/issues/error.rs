//! Issue creation error types.

use thiserror::Error;

/// Errors that can occur during issue operations.
#[derive(Debug, Error)]
pub enum IssueError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Repository string is not in `owner/name` form.
    #[error("Invalid repository '{value}': expected owner/name")]
    InvalidRepository { value: String },

    /// The tracker refused the request.
    #[error("Issue tracker rejected the request: {message}")]
    Rejected { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(error: &IssueError) -> &'static str {
        match error {
            IssueError::GitHubError(_) => "github",
            IssueError::InvalidRepository { .. } => "repository",
            IssueError::Rejected { .. } => "rejected",
        }
    }

    #[test]
    fn formats_tracker_errors() {
        let invalid = IssueError::InvalidRepository {
            value: "octo".to_string(),
        };
        let rejected = IssueError::Rejected {
            message: "validation failed".to_string(),
        };

        assert_eq!(describe(&invalid), "repository");
        assert_eq!(
            invalid.to_string(),
            "Invalid repository 'octo': expected owner/name"
        );
        assert_eq!(describe(&rejected), "rejected");
        assert_eq!(
            rejected.to_string(),
            "Issue tracker rejected the request: validation failed"
        );
    }
}
