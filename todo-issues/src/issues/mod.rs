//! GitHub issue creation.
//!
//! The runner talks to the issue tracker only through [`IssueTracker`], so
//! the GitHub client can be swapped out in tests.

mod created_issue;
mod error;
mod repository;

pub use created_issue::CreatedIssue;
pub use error::IssueError;
pub use repository::Repository;

use crate::labels::LabelDefinition;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// Labels requested per page when listing repository labels.
const LABELS_PER_PAGE: u8 = 100;

/// Operations the runner needs from an issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Creates an issue and returns its number and URL.
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<CreatedIssue, IssueError>;

    /// Lists the names of every label defined on the repository.
    async fn list_label_names(&self) -> Result<Vec<String>, IssueError>;

    /// Creates a label on the repository.
    async fn create_label(&self, label: &LabelDefinition) -> Result<(), IssueError>;
}

/// [`IssueTracker`] backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubTracker {
    octocrab: Octocrab,
    repository: Repository,
}

impl GitHubTracker {
    /// Wraps an existing client for the given repository.
    pub fn new(octocrab: Octocrab, repository: Repository) -> Self {
        Self {
            octocrab,
            repository,
        }
    }

    /// Builds a client authenticated with a personal or workflow token.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError`] if the client cannot be built.
    pub fn from_token(token: impl Into<String>, repository: Repository) -> Result<Self, IssueError> {
        let octocrab = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(octocrab, repository))
    }

    /// Builds an unauthenticated client, enough for read-only previews.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError`] if the client cannot be built.
    pub fn anonymous(repository: Repository) -> Result<Self, IssueError> {
        let octocrab = Octocrab::builder().build()?;
        Ok(Self::new(octocrab, repository))
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<CreatedIssue, IssueError> {
        let issue = self
            .octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .create(title)
            .body(body)
            .labels(labels.to_vec())
            .send()
            .await?;

        Ok(CreatedIssue {
            number: issue.number,
            url: issue.html_url.to_string(),
            title: title.to_string(),
        })
    }

    async fn list_label_names(&self) -> Result<Vec<String>, IssueError> {
        let first_page = self
            .octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .list_labels_for_repo()
            .per_page(LABELS_PER_PAGE)
            .send()
            .await?;

        let labels = self.octocrab.all_pages(first_page).await?;
        debug!(count = labels.len(), repo = %self.repository, "Fetched repository labels");
        Ok(labels.into_iter().map(|label| label.name).collect())
    }

    async fn create_label(&self, label: &LabelDefinition) -> Result<(), IssueError> {
        self.octocrab
            .issues(&self.repository.owner, &self.repository.name)
            .create_label(&label.name, &label.color, &label.description)
            .await?;
        Ok(())
    }
}
