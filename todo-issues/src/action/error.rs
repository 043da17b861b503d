//! Action input and output error types.

use thiserror::Error;

/// Errors that can occur while reading inputs or writing outputs.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A required input was not supplied.
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },

    /// A boolean input holds something other than a YAML 1.2 core boolean.
    #[error("Input does not meet YAML 1.2 \"Core Schema\" specification: {name} (got '{value}'). Support boolean input list: `true | True | TRUE | false | False | FALSE`")]
    InvalidBoolean { name: String, value: String },

    /// Failed to write the outputs file.
    #[error("Failed to write outputs file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode an output value.
    #[error("Failed to encode output: {0}")]
    JsonError(#[from] serde_json::Error),
}
