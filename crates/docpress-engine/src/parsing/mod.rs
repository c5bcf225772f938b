//! Markdown subset parsing.
//!
//! Two phases, both local: [`lines`] classifies each physical line by strict
//! prefix match, [`inline`] splits a line's content into emphasis runs.
//! Blank lines produce no line of their own; any run of them collapses into
//! one synthetic empty paragraph spacer before the next parsed line.

pub mod inline;
pub mod lines;

pub use inline::{Emphasis, TextSpan};
pub use lines::{LineKind, classify};

/// One parsed line: its classification plus the emphasis runs covering its
/// literal content. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub kind: LineKind,
    pub spans: Vec<TextSpan>,
}

impl ParsedLine {
    fn new(kind: LineKind, content: &str) -> Self {
        Self {
            kind,
            spans: inline::parse_spans(content),
        }
    }

    /// Synthetic spacer standing in for a blank-line separator.
    fn spacer() -> Self {
        Self {
            kind: LineKind::Paragraph,
            spans: Vec::new(),
        }
    }

    /// The literal text of this line: every run concatenated, markers already
    /// stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Parses full source text into its ordered line sequence, spacers included.
///
/// Splits on `\n` and strips a trailing `\r` per line, so CRLF input parses
/// the same as LF input. Classification runs exactly once per physical line;
/// a line's content is never re-examined for prefixes.
pub fn parse_markdown(source: &str) -> Vec<ParsedLine> {
    let mut out = Vec::new();
    let mut pending_separator = false;

    for raw in source.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            pending_separator = true;
            continue;
        }
        if pending_separator && !out.is_empty() {
            out.push(ParsedLine::spacer());
        }
        pending_separator = false;

        let (kind, content) = lines::classify(line);
        out.push(ParsedLine::new(kind, content));
    }

    out
}
