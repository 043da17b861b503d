//! Runner configuration.

use crate::action::ActionInputs;
use crate::labels::DEFAULT_LABELS_PATH;
use std::path::{Path, PathBuf};

/// Configuration for converting a todo file into issues.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the todo file.
    todo_file_path: PathBuf,
    /// Comma separated labels requested for every issue.
    labels: String,
    /// Whether to delete the todo file once issues were created.
    delete_todo_after: bool,
    /// Path to the label definitions file.
    labels_path: PathBuf,
    /// Whether to preview issues without creating them.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        todo_file_path: PathBuf,
        labels: String,
        delete_todo_after: bool,
        dry_run: bool,
    ) -> Self {
        Self {
            todo_file_path,
            labels,
            delete_todo_after,
            labels_path: PathBuf::from(DEFAULT_LABELS_PATH),
            dry_run,
        }
    }

    /// Creates a configuration from action inputs.
    pub fn from_inputs(inputs: &ActionInputs, dry_run: bool) -> Self {
        Self::new(
            inputs.todo_file_path.clone(),
            inputs.labels.clone(),
            inputs.delete_todo_after,
            dry_run,
        )
    }

    /// Sets a custom label definitions path.
    pub fn with_labels_path(mut self, labels_path: PathBuf) -> Self {
        self.labels_path = labels_path;
        self
    }

    /// Returns the todo file path.
    pub fn todo_file_path(&self) -> &Path {
        &self.todo_file_path
    }

    /// Returns the raw requested labels.
    pub fn labels(&self) -> &str {
        &self.labels
    }

    /// Returns whether the todo file is deleted after a successful run.
    pub fn delete_todo_after(&self) -> bool {
        self.delete_todo_after
    }

    /// Returns the label definitions path.
    pub fn labels_path(&self) -> &Path {
        &self.labels_path
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
