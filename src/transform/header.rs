//! Comment header prepended to compiled workflows

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Splits on a real newline or on the two-character `\n` escape a shell passes through
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|\\n").expect("line break pattern is valid"));

const COMMENT_MARKER: &str = "#";

/// Comment header for compiled workflows
///
/// In `package.json` the header may be written either way:
///
/// ```json
/// { "gha-workflows": { "comments": "Generated file\nDo not edit" } }
/// { "gha-workflows": { "comments": ["Generated file", "Do not edit"] } }
/// ```
///
/// # Example
/// ```
/// use gha_workflows::transform::Header;
///
/// let header = Header::from("Generated file\\nDo not edit");
/// assert_eq!(header.render(), "# Generated file\n# Do not edit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Header {
    /// Free text, split into lines on newlines
    Text(String),
    /// One entry per line
    Lines(Vec<String>),
}

impl Header {
    /// The header's individual lines
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Header::Text(text) => LINE_BREAK.split(text).collect(),
            Header::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// True when the header would contribute nothing to the output
    pub fn is_empty(&self) -> bool {
        match self {
            Header::Text(text) => text.is_empty(),
            Header::Lines(lines) => lines.is_empty(),
        }
    }

    /// Render as a comment block, one `# ` line per header line, no trailing newline
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        self.lines()
            .iter()
            .map(|line| format!("{} {}", COMMENT_MARKER, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&str> for Header {
    fn from(text: &str) -> Self {
        Header::Text(text.to_string())
    }
}

impl From<String> for Header {
    fn from(text: String) -> Self {
        Header::Text(text)
    }
}

impl From<Vec<String>> for Header {
    fn from(lines: Vec<String>) -> Self {
        Header::Lines(lines)
    }
}
