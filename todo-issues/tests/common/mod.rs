#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use todo_issues::{CreatedIssue, IssueError, IssueTracker, LabelDefinition};

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// An issue passed to [`MockTracker::create_issue`].
#[derive(Debug, Clone)]
pub struct SubmittedIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// In-memory tracker recording every call.
#[derive(Default)]
pub struct MockTracker {
    pub remote_labels: Vec<String>,
    pub failing_titles: Vec<String>,
    pub fail_label_creation: bool,
    pub fail_label_listing: bool,
    pub issues: Mutex<Vec<SubmittedIssue>>,
    pub created_labels: Mutex<Vec<LabelDefinition>>,
    pub label_listings: Mutex<usize>,
}

impl MockTracker {
    pub fn with_remote_labels(labels: &[&str]) -> Self {
        Self {
            remote_labels: labels.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing_on(titles: &[&str]) -> Self {
        Self {
            failing_titles: titles.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn issues(&self) -> Vec<SubmittedIssue> {
        self.issues.lock().unwrap().clone()
    }

    pub fn created_label_names(&self) -> Vec<String> {
        self.created_labels
            .lock()
            .unwrap()
            .iter()
            .map(|label| label.name.clone())
            .collect()
    }

    pub fn label_listings(&self) -> usize {
        *self.label_listings.lock().unwrap()
    }

    pub fn call_count(&self) -> usize {
        self.issues().len() + self.created_label_names().len() + self.label_listings()
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<CreatedIssue, IssueError> {
        let mut issues = self.issues.lock().unwrap();
        issues.push(SubmittedIssue {
            title: title.to_string(),
            body: body.to_string(),
            labels: labels.to_vec(),
        });

        if self.failing_titles.iter().any(|t| t == title) {
            return Err(IssueError::Rejected {
                message: "validation failed".to_string(),
            });
        }

        let number = issues.len() as u64;
        Ok(CreatedIssue {
            number,
            url: format!("https://github.com/octo/repo/issues/{number}"),
            title: title.to_string(),
        })
    }

    async fn list_label_names(&self) -> Result<Vec<String>, IssueError> {
        *self.label_listings.lock().unwrap() += 1;
        if self.fail_label_listing {
            return Err(IssueError::Rejected {
                message: "labels unavailable".to_string(),
            });
        }
        Ok(self.remote_labels.clone())
    }

    async fn create_label(&self, label: &LabelDefinition) -> Result<(), IssueError> {
        if self.fail_label_creation {
            return Err(IssueError::Rejected {
                message: "label exists".to_string(),
            });
        }
        self.created_labels.lock().unwrap().push(label.clone());
        Ok(())
    }
}
