//! Parsed issue record.

use indexmap::IndexMap;
use serde::Serialize;

/// Version used when a title line carries no `[version]` prefix.
pub const DEFAULT_VERSION: &str = "v0.0.0";

/// One `#`-titled block of a todo file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    /// Version from the title bracket, or [`DEFAULT_VERSION`].
    pub version: String,

    /// Title text following the optional version bracket.
    pub title: String,

    /// Section bodies keyed by their `##` heading, in heading order.
    pub sections: IndexMap<String, String>,
}

impl IssueRecord {
    /// Creates a record with no sections.
    #[must_use]
    pub fn new(version: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: title.into(),
            sections: IndexMap::new(),
        }
    }

    /// Adds a section, replacing the body of an existing heading in place.
    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.sections.insert(name.into(), content.into());
        self
    }

    /// Returns the body of the first of `names` present with non-empty content.
    #[must_use]
    pub fn probe_section(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .filter_map(|name| self.sections.get(*name))
            .map(String::as_str)
            .find(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_prefers_first_name() {
        let record = IssueRecord::new(DEFAULT_VERSION, "Task")
            .with_section("objective", "lower")
            .with_section("Objective", "upper");

        assert_eq!(record.probe_section(&["Objective", "objective"]), Some("upper"));
    }

    #[test]
    fn probe_skips_empty_content() {
        let record = IssueRecord::new(DEFAULT_VERSION, "Task")
            .with_section("Time", "")
            .with_section("time", "2h");

        assert_eq!(record.probe_section(&["Time", "time"]), Some("2h"));
        assert_eq!(record.probe_section(&["Objective", "objective"]), None);
    }

    #[test]
    fn repeated_section_keeps_position() {
        let record = IssueRecord::new(DEFAULT_VERSION, "Task")
            .with_section("Setup", "first")
            .with_section("Build", "build")
            .with_section("Setup", "second");

        let entries: Vec<_> = record
            .sections
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(entries, vec![("Setup", "second"), ("Build", "build")]);
    }
}
