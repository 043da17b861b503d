//! Label definitions loaded from a YAML file.

use serde::Deserialize;

/// Color used for labels defined without one.
pub const DEFAULT_LABEL_COLOR: &str = "cccccc";

/// A label as declared in the label definitions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDefinition {
    /// Canonical label name, possibly with emoji.
    pub name: String,

    /// Label description (empty when not declared).
    pub description: String,

    /// Hex color without the leading `#`.
    pub color: String,
}

/// Raw YAML entry of the label definitions file.
#[derive(Debug, Deserialize)]
pub(crate) struct LabelEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<serde_yaml::Value>,
    #[serde(default)]
    pub color: Option<serde_yaml::Value>,
}

/// Renders a YAML scalar as text. Unquoted colors such as `123456` or
/// `5319e7` arrive as numbers. Null, lists and mappings give `None`.
fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(text) => Some(text),
        serde_yaml::Value::Number(number) => Some(number.to_string()),
        serde_yaml::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl From<LabelEntry> for LabelDefinition {
    fn from(entry: LabelEntry) -> Self {
        let color = entry
            .color
            .and_then(scalar_to_string)
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| DEFAULT_LABEL_COLOR.to_string());
        Self {
            name: entry.name,
            description: entry
                .description
                .and_then(scalar_to_string)
                .unwrap_or_default(),
            color,
        }
    }
}

/// Reduces a label name to its lookup key.
///
/// Everything except ASCII word characters and whitespace is removed, so
/// `"🐛 Bug"` and `"bug"` share the key `"bug"`.
#[must_use]
pub fn normalize_label_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoji_and_punctuation() {
        assert_eq!(normalize_label_name("🐛 Bug"), "bug");
        assert_eq!(normalize_label_name("✨ New-Feature!"), "newfeature");
        assert_eq!(normalize_label_name("good first_issue"), "good first_issue");
    }

    #[test]
    fn fills_defaults() {
        let label = LabelDefinition::from(LabelEntry {
            name: "docs".to_string(),
            description: None,
            color: Some(serde_yaml::Value::String(String::new())),
        });

        assert_eq!(label.description, "");
        assert_eq!(label.color, DEFAULT_LABEL_COLOR);
    }

    #[test]
    fn stringifies_numeric_scalars() {
        let label = LabelDefinition::from(LabelEntry {
            name: "release".to_string(),
            description: Some(serde_yaml::Value::Number(2024.into())),
            color: Some(serde_yaml::Value::Number(123456.into())),
        });

        assert_eq!(label.description, "2024");
        assert_eq!(label.color, "123456");
    }

    #[test]
    fn non_scalar_color_uses_default() {
        let label = LabelDefinition::from(LabelEntry {
            name: "docs".to_string(),
            description: None,
            color: Some(serde_yaml::Value::Sequence(Vec::new())),
        });

        assert_eq!(label.color, DEFAULT_LABEL_COLOR);
    }
}
