//! Checkbox normalization for section content.

const BULLET: &str = "- ";
const CHECKBOX: &str = "- [ ]";

/// Rewrites plain `- ` bullets into `- [ ] ` task items.
///
/// Indentation is kept. Lines that are already `- [ ]` items, and every
/// non-bullet line, pass through untouched, so the rewrite is idempotent.
#[must_use]
pub fn normalize_tasks(content: &str) -> String {
    content
        .split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    if !trimmed.starts_with(BULLET) || trimmed.starts_with(CHECKBOX) {
        return line.to_string();
    }

    let indentation = &line[..line.len() - line.trim_start().len()];
    format!("{indentation}{CHECKBOX} {}", &trimmed[BULLET.len()..])
}
