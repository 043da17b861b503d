//! Action outputs written to the workflow's `GITHUB_OUTPUT` file.

use super::ActionError;
use crate::summary::RunSummary;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the outputs file.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Output holding the number of created issues.
pub const ISSUES_CREATED_OUTPUT: &str = "issues-created";

/// Output holding the JSON array of created issue URLs.
pub const ISSUE_URLS_OUTPUT: &str = "issue-urls";

const MULTILINE_DELIMITER: &str = "ghadelimiter_todo_issues";

/// Sink for action outputs.
///
/// Without an outputs file the values are only logged.
#[derive(Debug, Clone, Default)]
pub struct ActionOutputs {
    path: Option<PathBuf>,
}

impl ActionOutputs {
    /// Creates a sink writing to `path`, or logging only when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Creates a sink for the file named by `GITHUB_OUTPUT`.
    pub fn from_env() -> Self {
        let path = std::env::var_os(OUTPUT_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(path)
    }

    /// Returns the outputs file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saves one output value.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IoError`] if the outputs file cannot be written.
    pub fn save(&self, name: &str, value: impl Display) -> Result<(), ActionError> {
        let value = value.to_string();
        info!(name, value = %value, "Saving output");

        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_error = |e: std::io::Error| ActionError::IoError {
            path: path.display().to_string(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_error)?;
        file.write_all(format_output(name, &value).as_bytes())
            .map_err(io_error)
    }

    /// Saves the created issue count and URL list of a run.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if encoding or writing fails.
    pub fn record_summary(&self, summary: &RunSummary) -> Result<(), ActionError> {
        self.save(ISSUES_CREATED_OUTPUT, summary.issues_created())?;
        self.save(ISSUE_URLS_OUTPUT, summary.issue_urls_json()?)
    }
}

/// Formats one entry of the outputs file.
fn format_output(name: &str, value: &str) -> String {
    if value.contains('\n') {
        format!("{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n")
    } else {
        format!("{name}={value}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::CreatedIssue;
    use crate::summary::ProcessingResult;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn formats_single_and_multiline_values() {
        assert_eq!(format_output("count", "3"), "count=3\n");
        assert_eq!(
            format_output("text", "a\nb"),
            "text<<ghadelimiter_todo_issues\na\nb\nghadelimiter_todo_issues\n"
        );
    }

    #[test]
    fn records_empty_summary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        let outputs = ActionOutputs::new(Some(path.clone()));

        outputs.record_summary(&RunSummary::new(false)).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "issues-created=0\nissue-urls=[]\n"
        );
    }

    #[test]
    fn records_created_issue_urls() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        let outputs = ActionOutputs::new(Some(path.clone()));

        let mut summary = RunSummary::new(false);
        summary.record_result(ProcessingResult::Created(CreatedIssue {
            number: 1,
            url: "https://github.com/o/r/issues/1".to_string(),
            title: "[v0.0.0] One".to_string(),
        }));
        outputs.record_summary(&summary).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "issues-created=1\nissue-urls=[\"https://github.com/o/r/issues/1\"]\n"
        );
    }

    #[test]
    fn reads_path_from_env() {
        temp_env::with_var(OUTPUT_FILE_ENV, Some("/tmp/out"), || {
            assert_eq!(ActionOutputs::from_env().path(), Some(Path::new("/tmp/out")));
        });
        temp_env::with_var_unset(OUTPUT_FILE_ENV, || {
            assert!(ActionOutputs::from_env().path().is_none());
            assert!(ActionOutputs::from_env().save("name", "value").is_ok());
        });
    }
}
