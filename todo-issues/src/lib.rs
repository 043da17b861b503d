#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod action;
pub mod issues;
pub mod labels;
pub mod parser;
pub mod runner;
pub mod summary;
pub mod templates;

pub use action::{ActionError, ActionInputs, ActionOutputs};
pub use issues::{CreatedIssue, GitHubTracker, IssueError, IssueTracker, Repository};
pub use labels::{
    load_label_definitions, resolve_labels, split_labels, LabelDefinition, LabelError,
};
pub use parser::{parse, IssueRecord, DEFAULT_VERSION};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{
    create_handlebars_registry, format_body, format_title, normalize_tasks, IssueBodyRenderer,
    TemplateError,
};
