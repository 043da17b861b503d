//! Created issue information.

use serde::Serialize;

/// An issue created on the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedIssue {
    /// Issue number.
    pub number: u64,

    /// Browser URL of the issue.
    pub url: String,

    /// Rendered issue title.
    pub title: String,
}
