//! Orchestrates converting a todo file into issues.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::issues::IssueTracker;
use crate::labels::{resolve_labels, split_labels};
use crate::parser::{parse, IssueRecord};
use crate::summary::{ProcessingResult, RunSummary};
use crate::templates::{format_title, IssueBodyRenderer};
use std::path::Path;
use tracing::{error, info, info_span, Instrument};

/// Lines of each body shown in a dry-run preview.
const PREVIEW_LINES: usize = 10;

/// Converts a todo file into issues on an [`IssueTracker`].
pub struct Runner<T> {
    config: RunnerConfig,
    tracker: T,
    renderer: IssueBodyRenderer,
}

impl<T: IssueTracker> Runner<T> {
    /// Builds a runner from the provided configuration and tracker.
    pub fn new(config: RunnerConfig, tracker: T) -> Self {
        Self {
            config,
            tracker,
            renderer: IssueBodyRenderer::new(),
        }
    }

    /// Returns the issue tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Executes the full conversion flow.
    ///
    /// A missing todo file, or one without issues, yields an empty summary.
    /// Issues are created one at a time; a failure is recorded in the
    /// summary and the remaining issues are still attempted.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the todo file cannot be read or deleted,
    /// or label resolution fails. The error is logged before returning.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        info!("Starting todo file to GitHub issue conversion");

        let result = self.execute().await;
        match &result {
            Ok(_) => info!("Finished todo file to GitHub issue conversion"),
            Err(e) => error!(error = %e, "Fatal error"),
        }
        result
    }

    async fn execute(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let todo_path = self.config.todo_file_path();

        if !todo_path.exists() {
            info!(path = %todo_path.display(), "File not found");
            return Ok(summary);
        }

        info!(path = %todo_path.display(), "Reading file");
        let content = std::fs::read_to_string(todo_path).map_err(|e| RunnerError::IoError {
            path: todo_path.display().to_string(),
            source: e,
        })?;

        let records = parse(&content.replace("\r\n", "\n"));
        if records.is_empty() {
            info!("No issues found in todo file");
            return Ok(summary);
        }

        info!(count = records.len(), "Found issues to create");
        summary.issues_found = records.len();

        if self.config.dry_run() {
            print_dry_run_preview(&records, &self.renderer);
            return Ok(summary);
        }

        info!("Resolving labels");
        let requested = split_labels(self.config.labels());
        let labels =
            resolve_labels(&self.tracker, self.config.labels_path(), &requested).await?;
        info!(labels = %labels.join(", "), "Resolved labels");

        for record in &records {
            let result = self.process_record(record, &labels).await;
            summary.record_result(result);
        }

        info!(count = summary.issues_created(), "Created issues");

        if self.config.delete_todo_after() && summary.issues_created() > 0 {
            delete_todo_file(todo_path)?;
            summary.todo_deleted = true;
        }

        Ok(summary)
    }

    async fn process_record(&self, record: &IssueRecord, labels: &[String]) -> ProcessingResult {
        let title = format_title(record, None);
        let span = info_span!("create_issue", title = %title);

        async {
            let body = match self.renderer.render(record) {
                Ok(body) => body,
                Err(e) => {
                    error!(error = %e, "Failed to render issue body");
                    return ProcessingResult::Failed {
                        title: title.clone(),
                        error: e.to_string(),
                    };
                }
            };

            info!("Creating issue");
            match self.tracker.create_issue(&title, &body, labels).await {
                Ok(issue) => {
                    info!(issue_number = issue.number, url = %issue.url, "Issue created");
                    ProcessingResult::Created(issue)
                }
                Err(e) => {
                    error!(error = %e, "Failed to create issue");
                    ProcessingResult::Failed {
                        title: title.clone(),
                        error: e.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn delete_todo_file(path: &Path) -> Result<(), RunnerError> {
    info!(path = %path.display(), "Deleting todo file");
    std::fs::remove_file(path).map_err(|e| RunnerError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Todo file deleted");
    Ok(())
}

fn print_dry_run_preview(records: &[IssueRecord], renderer: &IssueBodyRenderer) {
    println!("\n[DRY RUN] Found {} issues:\n", records.len());

    for (i, record) in records.iter().enumerate() {
        println!(
            "  [{}/{}] Would create issue: \"{}\"",
            i + 1,
            records.len(),
            format_title(record, None)
        );

        if let Ok(body) = renderer.render(record) {
            for line in body.lines().take(PREVIEW_LINES) {
                println!("    {line}");
            }
            if body.lines().count() > PREVIEW_LINES {
                println!("    ...");
            }
        }
        println!();
    }
}
