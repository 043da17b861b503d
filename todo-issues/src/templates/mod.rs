//! Issue title and body formatting.
//!
//! Bodies are rendered with Handlebars from a fixed markdown layout; section
//! content is injected verbatim apart from checkbox normalization.

mod error;
mod renderer;
mod tasks;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, IssueBodyRenderer};
pub use tasks::normalize_tasks;

use crate::parser::IssueRecord;

/// Generates the issue title for a record.
///
/// Format: "[{version}] {title}", followed by " #{number}" when a number is given.
#[must_use]
pub fn format_title(record: &IssueRecord, issue_number: Option<u64>) -> String {
    let title = format!("[{}] {}", record.version, record.title);
    match issue_number {
        Some(number) => format!("{title} #{number}"),
        None => title,
    }
}

/// Renders the issue body for a record with a fresh renderer.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn format_body(record: &IssueRecord) -> Result<String, TemplateError> {
    IssueBodyRenderer::new().render(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DEFAULT_VERSION;

    #[test]
    fn test_format_title() {
        let record = IssueRecord::new("v1.0.0", "Add login");
        assert_eq!(format_title(&record, None), "[v1.0.0] Add login");
    }

    #[test]
    fn test_format_title_with_number() {
        let record = IssueRecord::new(DEFAULT_VERSION, "Add login");
        assert_eq!(format_title(&record, Some(42)), "[v0.0.0] Add login #42");
    }

    #[test]
    fn test_format_title_keeps_prefix() {
        let record = IssueRecord::new("beta", "");
        let title = format_title(&record, Some(7));
        assert!(title.starts_with("[beta] "));
    }

    #[test]
    fn test_format_body_matches_renderer() {
        let record = IssueRecord::new("v1", "Task").with_section("Setup", "- x");
        let body = format_body(&record).unwrap();
        assert_eq!(body, IssueBodyRenderer::default().render(&record).unwrap());
    }
}
