//! Issue body renderer.

use super::tasks::normalize_tasks;
use super::TemplateError;
use crate::parser::IssueRecord;
use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use serde_json::json;

/// Fixed issue body layout. Its headings are scraped by downstream tooling.
const ISSUE_BODY_TEMPLATE: &str = include_str!("issue-body.md.hbs");

const OBJECTIVE_KEYS: [&str; 2] = ["Objective", "objective"];
const TIME_KEYS: [&str; 2] = ["Time", "time"];

const DEFAULT_OBJECTIVE: &str = "Implement according to specification";
const DEFAULT_TIME: &str = "4-8h";
const DEFAULT_KEY_POINT: &str = "Implementation";
const DEFAULT_TASK: &str = "- [ ] Complete implementation";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs
}

/// One `###` block under Key Points.
#[derive(Debug, Serialize)]
struct KeyPoint<'a> {
    name: &'a str,
    content: String,
}

/// Renders issue records into the fixed issue body layout.
pub struct IssueBodyRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for IssueBodyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueBodyRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the issue body for a parsed record.
    ///
    /// Missing Objective and Time sections fall back to defaults. Every other
    /// section becomes a Key Points entry, in heading order, with its bullets
    /// normalized into checkboxes.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, record: &IssueRecord) -> Result<String, TemplateError> {
        let data = json!({
            "objective": record.probe_section(&OBJECTIVE_KEYS).unwrap_or(DEFAULT_OBJECTIVE),
            "key_points": key_points(record),
            "time": record.probe_section(&TIME_KEYS).unwrap_or(DEFAULT_TIME),
        });

        Ok(self.handlebars.render_template(ISSUE_BODY_TEMPLATE, &data)?)
    }
}

fn key_points(record: &IssueRecord) -> Vec<KeyPoint<'_>> {
    let points: Vec<_> = record
        .sections
        .iter()
        .filter(|(name, _)| !is_excluded(name))
        .map(|(name, content)| KeyPoint {
            name,
            content: normalize_tasks(content),
        })
        .collect();

    if points.is_empty() {
        return vec![KeyPoint {
            name: DEFAULT_KEY_POINT,
            content: DEFAULT_TASK.to_string(),
        }];
    }
    points
}

fn is_excluded(name: &str) -> bool {
    OBJECTIVE_KEYS.contains(&name) || TIME_KEYS.contains(&name)
}
