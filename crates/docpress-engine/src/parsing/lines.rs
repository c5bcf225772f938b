use std::sync::OnceLock;

use regex::Regex;

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading1,
    Heading2,
    Heading3,
    Bullet,
    Paragraph,
}

/// Matches `- `, `* `, and `1. ` style list markers at line start.
///
/// Numbered markers classify as plain bullets; the numbering is discarded.
fn list_marker() -> &'static Regex {
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    LIST_MARKER
        .get_or_init(|| Regex::new(r"^(?:[-*]|\d+\.)\s+").expect("invalid list marker regex"))
}

/// Splits a line into its classification and literal content.
///
/// Prefix rules are tried in order and the first match wins. Heading prefixes
/// require the trailing space, so a bare `#` run falls through to paragraph.
pub fn classify(line: &str) -> (LineKind, &str) {
    if let Some(rest) = line.strip_prefix("# ") {
        return (LineKind::Heading1, rest);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return (LineKind::Heading2, rest);
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return (LineKind::Heading3, rest);
    }
    if let Some(m) = list_marker().find(line) {
        return (LineKind::Bullet, &line[m.end()..]);
    }
    (LineKind::Paragraph, line)
}
