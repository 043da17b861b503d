//! Processing result types.

use crate::issues::CreatedIssue;

/// Result of processing a single issue record.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// The issue was created.
    Created(CreatedIssue),

    /// Rendering or creating the issue failed.
    Failed {
        /// Rendered issue title.
        title: String,
        /// Error message.
        error: String,
    },
}
