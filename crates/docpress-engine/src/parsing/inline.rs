use std::sync::OnceLock;

use regex::Regex;

/// Emphasis carried by a single text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Bold,
    Italic,
}

/// A run of literal text with one emphasis value.
///
/// Marker characters are never part of `text`; a line decomposes into an
/// ordered run sequence that reconstructs its content exactly when
/// concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub emphasis: Emphasis,
}

impl TextSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasis: Emphasis::None,
        }
    }
}

/// Bold is tried before italic at every candidate position so `**x**` never
/// reads as two adjacent italic matches. Both bodies are non-greedy and
/// non-empty, so an unterminated marker matches nothing and stays literal.
fn emphasis_marker() -> &'static Regex {
    static EMPHASIS_MARKER: OnceLock<Regex> = OnceLock::new();
    EMPHASIS_MARKER
        .get_or_init(|| Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*").expect("invalid emphasis regex"))
}

/// Splits a line's content into its ordered emphasis runs.
///
/// Text between matches becomes plain runs; zero-length gaps are omitted
/// rather than emitted as empty runs. Empty content yields no runs at all.
pub fn parse_spans(content: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for caps in emphasis_marker().captures_iter(content) {
        let whole = caps.get(0).expect("group 0 is the whole match");
        if whole.start() > last_end {
            spans.push(TextSpan::plain(&content[last_end..whole.start()]));
        }
        let span = match (caps.get(1), caps.get(2)) {
            (Some(bold), _) => TextSpan {
                text: bold.as_str().to_string(),
                emphasis: Emphasis::Bold,
            },
            (None, Some(italic)) => TextSpan {
                text: italic.as_str().to_string(),
                emphasis: Emphasis::Italic,
            },
            // One alternative always captures; keep the match literal if not.
            (None, None) => TextSpan::plain(whole.as_str()),
        };
        spans.push(span);
        last_end = whole.end();
    }

    if last_end < content.len() {
        spans.push(TextSpan::plain(&content[last_end..]));
    }

    spans
}
