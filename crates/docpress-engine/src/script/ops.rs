use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First addressable character position of a document body. The remote
/// editing convention is 1-based: offset 1 is the first insertable position.
pub const ORIGIN_OFFSET: usize = 1;

/// A 1-based, end-exclusive character range into the inserted body.
///
/// Offsets count Unicode scalar values, not bytes. Paragraph-level ranges
/// include the line's trailing newline; emphasis ranges exclude it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl OffsetRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, other: OffsetRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: OffsetRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Heading depth carried by a paragraph-style operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// One formatting operation addressed into the inserted body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatOp {
    Heading { range: OffsetRange, level: HeadingLevel },
    Bullet { range: OffsetRange },
    Bold { range: OffsetRange },
    Italic { range: OffsetRange },
}

impl FormatOp {
    pub fn range(&self) -> OffsetRange {
        match *self {
            FormatOp::Heading { range, .. }
            | FormatOp::Bullet { range }
            | FormatOp::Bold { range }
            | FormatOp::Italic { range } => range,
        }
    }

    /// True for paragraph-level operations, whose ranges include the line's
    /// trailing newline.
    pub fn is_paragraph_level(&self) -> bool {
        matches!(self, FormatOp::Heading { .. } | FormatOp::Bullet { .. })
    }
}

/// A script inconsistency found by [`EditScript::validate`].
///
/// A script produced by the compiler never triggers these; they guard
/// hand-built or deserialized scripts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("operation range {start}..{end} outside body bounds 1..={max}")]
    OpOutOfBounds { start: usize, end: usize, max: usize },

    #[error("operation range {start}..{end} is empty")]
    EmptyRange { start: usize, end: usize },

    #[error("emphasis range {start}..{end} crosses a line break")]
    EmphasisCrossesLine { start: usize, end: usize },

    #[error("paragraph range {start}..{end} is not aligned to line boundaries")]
    MisalignedParagraphRange { start: usize, end: usize },
}

/// The complete compiler output: one bulk body insert plus the formatting
/// operations addressed into it.
///
/// Stateless; handed to a collaborator as one atomic batch in which the
/// insert precedes every formatting command. All ranges are computed from
/// the body alone, so the formatting operations commute with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    pub insert_text: String,
    pub ops: Vec<FormatOp>,
}

impl EditScript {
    /// Checks every operation range against the body: in bounds, non-empty,
    /// emphasis ranges within a single line, paragraph ranges spanning whole
    /// lines (newline included).
    pub fn validate(&self) -> Result<(), ScriptError> {
        let chars: Vec<char> = self.insert_text.chars().collect();
        let max = chars.len() + ORIGIN_OFFSET;

        for op in &self.ops {
            let OffsetRange { start, end } = op.range();
            if end <= start {
                return Err(ScriptError::EmptyRange { start, end });
            }
            if start < ORIGIN_OFFSET || end > max {
                return Err(ScriptError::OpOutOfBounds { start, end, max });
            }

            // offset N addresses chars[N - 1]
            let covered = &chars[start - ORIGIN_OFFSET..end - ORIGIN_OFFSET];
            if op.is_paragraph_level() {
                let starts_line = start == ORIGIN_OFFSET || chars[start - ORIGIN_OFFSET - 1] == '\n';
                let ends_line = covered.last() == Some(&'\n');
                if !starts_line || !ends_line {
                    return Err(ScriptError::MisalignedParagraphRange { start, end });
                }
            } else if covered.contains(&'\n') {
                return Err(ScriptError::EmphasisCrossesLine { start, end });
            }
        }

        Ok(())
    }
}
