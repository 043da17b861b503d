//! Target repository information.

use super::IssueError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The repository issues are created in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl Repository {
    /// Creates a repository reference.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

/// Formats as "owner/name".
impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = IssueError;

    /// Parses the `owner/name` form used by `GITHUB_REPOSITORY`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || IssueError::InvalidRepository {
            value: value.to_string(),
        };
        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self::new(owner, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_name() {
        let repo: Repository = "octo/hello-world".parse().unwrap();
        assert_eq!(repo, Repository::new("octo", "hello-world"));
        assert_eq!(repo.to_string(), "octo/hello-world");
    }

    #[test]
    fn rejects_malformed_names() {
        for value in ["", "octo", "/repo", "octo/", "a/b/c"] {
            assert!(
                matches!(
                    value.parse::<Repository>(),
                    Err(IssueError::InvalidRepository { .. })
                ),
                "value: {value}"
            );
        }
    }
}
