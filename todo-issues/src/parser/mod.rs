//! Todo file parsing.
//!
//! A todo file is a loose markdown document where every `# ` line opens a new
//! issue and every `## ` line opens a section inside it:
//!
//! ```text
//! # [v1.2.0] Title of the issue
//! ## Objective
//! Explanation of the objective
//! ## Time
//! 4-8h
//! ## Section of the body
//! - Task of the issue
//!   - Information of the task
//! - Another task of the issue
//! ```
//!
//! Lines before the first title, and lines between a title and its first
//! section, are dropped.

mod record;

pub use record::{IssueRecord, DEFAULT_VERSION};

use regex::Regex;
use std::sync::LazyLock;

const TITLE_MARKER: &str = "# ";
const SECTION_MARKER: &str = "## ";

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*(?:\[([^\]]+)\])?\s*(.+)$").expect("title pattern is valid")
});

/// Parses a todo document into one [`IssueRecord`] per `# ` line.
///
/// Lines are split on `\n` only; callers normalize other line endings first.
#[must_use]
pub fn parse(content: &str) -> Vec<IssueRecord> {
    let mut state = ParseState::default();

    for line in content.split('\n') {
        if line.starts_with(TITLE_MARKER) {
            state.finish_record();
            state.record = Some(parse_title(line));
        } else if line.starts_with(SECTION_MARKER) {
            state.flush_section();
            state.section = Some(line.trim_start_matches('#').trim().to_string());
        } else if state.record.is_some() && state.section.is_some() {
            state.buffer.push(line);
        }
    }

    state.finish_record();
    state.records
}

/// Splits a title line into its version and title text.
fn parse_title(line: &str) -> IssueRecord {
    match TITLE_PATTERN.captures(line) {
        Some(caps) => {
            let version = caps
                .get(1)
                .map_or(DEFAULT_VERSION, |m| m.as_str().trim());
            let title = caps.get(2).map_or("", |m| m.as_str().trim());
            IssueRecord::new(version, title)
        }
        None => IssueRecord::new(DEFAULT_VERSION, line[TITLE_MARKER.len()..].trim()),
    }
}

/// Accumulator for the record and section currently being read.
#[derive(Default)]
struct ParseState<'a> {
    records: Vec<IssueRecord>,
    record: Option<IssueRecord>,
    section: Option<String>,
    buffer: Vec<&'a str>,
}

impl ParseState<'_> {
    /// Moves the buffered lines into the open section of the active record.
    ///
    /// Without an active record the section name is kept and the buffer is
    /// left empty, since no lines are collected in that state.
    fn flush_section(&mut self) {
        let Some(record) = self.record.as_mut() else {
            return;
        };
        if let Some(name) = self.section.take() {
            let content = self.buffer.join("\n").trim().to_string();
            record.sections.insert(name, content);
        }
        self.buffer.clear();
    }

    /// Flushes the open section and emits the active record, if any.
    fn finish_record(&mut self) {
        self.flush_section();
        if let Some(record) = self.record.take() {
            self.records.push(record);
        }
        self.section = None;
        self.buffer.clear();
    }
}
