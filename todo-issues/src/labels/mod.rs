//! Label loading and resolution.
//!
//! Requested labels are matched against an optional YAML definitions file
//! (by default `.github/labels.yml`):
//!
//! ```yaml
//! - name: "🐛 Bug"
//!   description: Something isn't working
//!   color: d73a4a
//! - name: automated
//! ```
//!
//! Without a definitions file the requested labels are used as given.

mod definition;
mod error;

pub use definition::{normalize_label_name, LabelDefinition, DEFAULT_LABEL_COLOR};
pub use error::LabelError;

use crate::issues::IssueTracker;
use definition::LabelEntry;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Default location of the label definitions file.
pub const DEFAULT_LABELS_PATH: &str = ".github/labels.yml";

/// Label definitions keyed by [`normalize_label_name`].
pub type LabelDefinitions = IndexMap<String, LabelDefinition>;

/// Splits a comma separated label list, dropping blank entries.
#[must_use]
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads label definitions from a YAML file.
///
/// Returns `Ok(None)` when the file does not exist or its root is not a list.
///
/// # Errors
///
/// Returns [`LabelError`] if the file cannot be read or an entry is malformed.
pub fn load_label_definitions(path: &Path) -> Result<Option<LabelDefinitions>, LabelError> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path).map_err(|e| LabelError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let yaml_error = |e: serde_yaml::Error| LabelError::YamlError {
        path: path.display().to_string(),
        source: e,
    };

    let document: serde_yaml::Value = serde_yaml::from_str(&raw).map_err(yaml_error)?;
    if !document.is_sequence() {
        debug!(path = %path.display(), "Label definitions are not a list");
        return Ok(None);
    }

    let entries: Vec<LabelEntry> = serde_yaml::from_value(document).map_err(yaml_error)?;
    let mut definitions = LabelDefinitions::new();
    for entry in entries {
        let key = normalize_label_name(&entry.name);
        definitions.insert(key, entry.into());
    }

    Ok(Some(definitions))
}

/// Maps requested labels to their canonical names and creates missing ones.
///
/// Each requested label is matched case-insensitively against the
/// definitions file; unmatched labels are dropped with a warning. Every
/// defined label absent from the repository is then created, with creation
/// failures logged and skipped. When nothing resolves, or no definitions
/// file exists, the requested labels are returned unchanged.
///
/// # Errors
///
/// Returns [`LabelError`] if the definitions cannot be loaded or the
/// repository labels cannot be listed.
pub async fn resolve_labels<T: IssueTracker + ?Sized>(
    tracker: &T,
    definitions_path: &Path,
    requested: &[String],
) -> Result<Vec<String>, LabelError> {
    let Some(definitions) = load_label_definitions(definitions_path)? else {
        warn!(
            path = %definitions_path.display(),
            "No label definitions found, using provided labels directly"
        );
        return Ok(requested.to_vec());
    };

    let mut resolved = Vec::new();
    for label in requested {
        match definitions.get(&label.trim().to_lowercase()) {
            Some(definition) => resolved.push(definition.name.clone()),
            None => warn!(label = %label, "Label not found in label definitions"),
        }
    }

    create_missing_labels(tracker, &definitions).await?;

    if resolved.is_empty() {
        return Ok(requested.to_vec());
    }
    Ok(resolved)
}

/// Creates every defined label that the repository does not have yet.
async fn create_missing_labels<T: IssueTracker + ?Sized>(
    tracker: &T,
    definitions: &LabelDefinitions,
) -> Result<(), LabelError> {
    let existing: HashSet<String> = tracker
        .list_label_names()
        .await?
        .into_iter()
        .map(|name| name.to_lowercase())
        .collect();

    let missing = definitions
        .values()
        .filter(|label| !existing.contains(&label.name.to_lowercase()));

    for label in missing {
        match tracker.create_label(label).await {
            Ok(()) => info!(label = %label.name, "Created missing label"),
            Err(e) => error!(label = %label.name, error = %e, "Failed to create label"),
        }
    }

    Ok(())
}
