//! Run summary types.

use super::result::ProcessingResult;
use crate::issues::CreatedIssue;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of issue records parsed from the todo file.
    pub issues_found: usize,

    /// Issues successfully created, in creation order.
    pub created: Vec<CreatedIssue>,

    /// Number of issues that failed to create.
    pub issues_failed: usize,

    /// Whether the todo file was deleted after the run.
    pub todo_deleted: bool,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        match result {
            ProcessingResult::Created(issue) => self.created.push(issue),
            ProcessingResult::Failed { .. } => self.issues_failed += 1,
        }
    }

    /// Number of issues successfully created.
    #[must_use]
    pub fn issues_created(&self) -> usize {
        self.created.len()
    }

    /// URLs of the created issues, in creation order.
    #[must_use]
    pub fn issue_urls(&self) -> Vec<&str> {
        self.created.iter().map(|issue| issue.url.as_str()).collect()
    }

    /// URLs of the created issues as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn issue_urls_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.issue_urls())
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.issues_failed == 0
    }
}
