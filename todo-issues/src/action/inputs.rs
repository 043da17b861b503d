//! Action inputs read from the workflow environment.

use super::ActionError;
use std::path::PathBuf;

/// Todo file read when no path is configured.
pub const DEFAULT_TODO_FILE_PATH: &str = "todo.md";

/// Labels applied when none are configured.
pub const DEFAULT_LABELS: &str = "automated,agente666";

/// Inputs declared by the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    /// Token for the GitHub API (`github-token`).
    pub github_token: Option<String>,

    /// Todo file to convert (`todo-file-path`).
    pub todo_file_path: PathBuf,

    /// Comma separated labels for every issue (`labels`).
    pub labels: String,

    /// Whether to delete the todo file after creating issues (`delete-todo-after`).
    pub delete_todo_after: bool,
}

impl Default for ActionInputs {
    fn default() -> Self {
        Self {
            github_token: None,
            todo_file_path: PathBuf::from(DEFAULT_TODO_FILE_PATH),
            labels: DEFAULT_LABELS.to_string(),
            delete_todo_after: false,
        }
    }
}

impl ActionInputs {
    /// Reads every input from `INPUT_*` environment variables, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidBoolean`] if `delete-todo-after` is not a boolean.
    pub fn from_env() -> Result<Self, ActionError> {
        let defaults = Self::default();
        Ok(Self {
            github_token: get_input("github-token"),
            todo_file_path: get_input("todo-file-path")
                .map_or(defaults.todo_file_path, PathBuf::from),
            labels: get_input("labels").unwrap_or(defaults.labels),
            delete_todo_after: get_boolean_input("delete-todo-after")?,
        })
    }

    /// Returns the GitHub token.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] if no token was supplied.
    pub fn require_token(&self) -> Result<&str, ActionError> {
        self.github_token
            .as_deref()
            .ok_or_else(|| ActionError::MissingInput {
                name: "github-token".to_string(),
            })
    }

    /// Returns the token a run needs, if any.
    ///
    /// A dry run, or a run whose todo file does not exist, never reaches the
    /// GitHub API, so the token is optional there.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] if issues will be created and no
    /// token was supplied.
    pub fn token_for_run(&self, dry_run: bool) -> Result<Option<&str>, ActionError> {
        if dry_run || !self.todo_file_path.exists() {
            return Ok(self.github_token.as_deref());
        }
        self.require_token().map(Some)
    }
}

/// Environment variable that carries an input, e.g. `INPUT_TODO-FILE-PATH`.
#[must_use]
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Reads an input, treating unset and blank values as absent.
#[must_use]
pub fn get_input(name: &str) -> Option<String> {
    std::env::var(input_env_name(name))
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads a boolean input. Unset and blank values are `false`.
///
/// # Errors
///
/// Returns [`ActionError::InvalidBoolean`] for values outside the YAML 1.2
/// core boolean spellings.
pub fn get_boolean_input(name: &str) -> Result<bool, ActionError> {
    let Some(value) = get_input(name) else {
        return Ok(false);
    };
    match value.as_str() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ActionError::InvalidBoolean {
            name: name.to_string(),
            value,
        }),
    }
}
