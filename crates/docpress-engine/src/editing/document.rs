use thiserror::Error;

use crate::script::{ORIGIN_OFFSET, OffsetRange};

use super::commands::{EditCommand, ParagraphStyle};

/// Offset errors raised when replaying commands against a local document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("insert offset {at} outside document bounds 1..={max}")]
    InsertOutOfBounds { at: usize, max: usize },

    #[error("range {start}..{end} outside document bounds 1..={max}")]
    RangeOutOfBounds { start: usize, end: usize, max: usize },

    #[error("range {start}..{end} is empty")]
    EmptyRange { start: usize, end: usize },
}

/// Local implementation of the editing contract: an offset-addressed text
/// body plus the styling applied to it so far.
///
/// Stands in for the remote document service in tests and previews. Commands
/// replay in batch order against 1-based character offsets; styling ranges
/// are kept as given, so inserts are expected before styling, as every
/// compiled batch guarantees.
#[derive(Debug, Clone, Default)]
pub struct RichDocument {
    body: Vec<char>,
    paragraph_styles: Vec<(OffsetRange, ParagraphStyle)>,
    bullets: Vec<OffsetRange>,
    emphasis: Vec<(OffsetRange, bool, bool)>,
}

impl RichDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character count of the body.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The unstyled body text.
    pub fn text(&self) -> String {
        self.body.iter().collect()
    }

    /// Replays one command, validating its offsets against the current body.
    pub fn apply(&mut self, cmd: &EditCommand) -> Result<(), ApplyError> {
        match cmd {
            EditCommand::InsertText { at, text } => self.insert_text(*at, text),
            EditCommand::SetParagraphStyle { range, style } => {
                self.check_range(*range)?;
                self.paragraph_styles.push((*range, *style));
                Ok(())
            }
            EditCommand::SetListBullet { range, .. } => {
                self.check_range(*range)?;
                self.bullets.push(*range);
                Ok(())
            }
            EditCommand::SetTextEmphasis {
                range,
                bold,
                italic,
            } => {
                self.check_range(*range)?;
                self.emphasis.push((*range, *bold, *italic));
                Ok(())
            }
        }
    }

    /// Replays a whole batch in order, stopping at the first invalid command.
    pub fn apply_batch(&mut self, commands: &[EditCommand]) -> Result<(), ApplyError> {
        for cmd in commands {
            self.apply(cmd)?;
        }
        Ok(())
    }

    fn insert_text(&mut self, at: usize, text: &str) -> Result<(), ApplyError> {
        let max = self.body.len() + ORIGIN_OFFSET;
        if at < ORIGIN_OFFSET || at > max {
            return Err(ApplyError::InsertOutOfBounds { at, max });
        }
        let idx = at - ORIGIN_OFFSET;
        self.body.splice(idx..idx, text.chars());
        Ok(())
    }

    fn check_range(&self, range: OffsetRange) -> Result<(), ApplyError> {
        if range.end <= range.start {
            return Err(ApplyError::EmptyRange {
                start: range.start,
                end: range.end,
            });
        }
        let max = self.body.len() + ORIGIN_OFFSET;
        if range.start < ORIGIN_OFFSET || range.end > max {
            return Err(ApplyError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                max,
            });
        }
        Ok(())
    }

    /// Renders the styled body back as markdown.
    ///
    /// Numbered-list flattening is irreversible, so every bullet renders as
    /// `- `. Emphasis markers are re-inserted around their exact ranges.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        let mut line_start = ORIGIN_OFFSET;
        let body = self.text();

        for line in body.split_inclusive('\n') {
            let line_len = line.chars().count();
            let line_range = OffsetRange::new(line_start, line_start + line_len);
            out.push_str(self.line_prefix(line_range));
            self.render_line(&mut out, line_start, line);
            line_start += line_len;
        }

        out
    }

    fn line_prefix(&self, line_range: OffsetRange) -> &'static str {
        for (range, style) in &self.paragraph_styles {
            if range.overlaps(line_range) {
                return match style {
                    ParagraphStyle::Heading1 => "# ",
                    ParagraphStyle::Heading2 => "## ",
                    ParagraphStyle::Heading3 => "### ",
                };
            }
        }
        if self.bullets.iter().any(|r| r.overlaps(line_range)) {
            return "- ";
        }
        ""
    }

    fn render_line(&self, out: &mut String, line_start: usize, line: &str) {
        let mut pos = line_start;
        for ch in line.chars() {
            if let Some(marker) = self.marker_at(pos, |r| r.start) {
                out.push_str(marker);
            }
            out.push(ch);
            if let Some(marker) = self.marker_at(pos + 1, |r| r.end) {
                out.push_str(marker);
            }
            pos += 1;
        }
    }

    /// Marker for the emphasis range whose boundary (selected by `edge`)
    /// sits at `offset`, if any. Ranges from a compiled batch are disjoint,
    /// so the first hit is the only hit.
    fn marker_at(&self, offset: usize, edge: impl Fn(&OffsetRange) -> usize) -> Option<&'static str> {
        self.emphasis.iter().find_map(|&(range, bold, italic)| {
            if edge(&range) != offset {
                return None;
            }
            Some(match (bold, italic) {
                (true, true) => "***",
                (true, false) => "**",
                (false, _) => "*",
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::commands::{BatchOptions, compile_batch};
    use crate::{EditScript, compile};
    use pretty_assertions::assert_eq;

    fn replay(markdown: &str) -> RichDocument {
        let batch = compile_batch(&compile(markdown), &BatchOptions::default());
        let mut doc = RichDocument::new();
        doc.apply_batch(&batch).expect("compiled batch must replay");
        doc
    }

    #[test]
    fn replayed_body_matches_script_text() {
        let markdown = "# Title\n\nHello **world**";
        let doc = replay(markdown);
        assert_eq!(doc.text(), compile(markdown).insert_text);
    }

    #[test]
    fn empty_batch_leaves_document_empty() {
        let doc = replay("");
        assert!(doc.is_empty());
        assert_eq!(doc.render_markdown(), "");
    }

    #[test]
    fn render_restores_heading_and_emphasis_markers() {
        let doc = replay("# Title\n\nHello **world**");
        assert_eq!(doc.render_markdown(), "# Title\n\nHello **world**\n");
    }

    #[test]
    fn render_flattens_numbered_lists_to_bullets() {
        let doc = replay("1. one\n2. two");
        assert_eq!(doc.render_markdown(), "- one\n- two\n");
    }

    #[test]
    fn render_keeps_adjacent_emphasis_runs_apart() {
        let doc = replay("**a***b*");
        assert_eq!(doc.render_markdown(), "**a***b*\n");
    }

    #[test]
    fn render_covers_all_heading_levels() {
        let doc = replay("# a\n## b\n### c\n\n- d *e*");
        assert_eq!(doc.render_markdown(), "# a\n## b\n### c\n\n- d *e*\n");
    }

    #[test]
    fn insert_outside_bounds_is_rejected() {
        let mut doc = RichDocument::new();
        let err = doc
            .apply(&EditCommand::InsertText {
                at: 2,
                text: "late".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, ApplyError::InsertOutOfBounds { at: 2, max: 1 });
    }

    #[test]
    fn insert_at_zero_is_rejected() {
        let mut doc = RichDocument::new();
        let err = doc
            .apply(&EditCommand::InsertText {
                at: 0,
                text: "x".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, ApplyError::InsertOutOfBounds { at: 0, max: 1 });
    }

    #[test]
    fn mid_document_insert_splices() {
        let mut doc = RichDocument::new();
        doc.apply(&EditCommand::InsertText {
            at: 1,
            text: "ad".to_string(),
        })
        .unwrap();
        doc.apply(&EditCommand::InsertText {
            at: 2,
            text: "bc".to_string(),
        })
        .unwrap();
        assert_eq!(doc.text(), "abcd");
    }

    #[test]
    fn styling_outside_body_is_rejected() {
        let mut doc = RichDocument::new();
        doc.apply(&EditCommand::InsertText {
            at: 1,
            text: "ab\n".to_string(),
        })
        .unwrap();
        let err = doc
            .apply(&EditCommand::SetTextEmphasis {
                range: OffsetRange::new(2, 6),
                bold: true,
                italic: false,
            })
            .unwrap_err();
        assert_eq!(
            err,
            ApplyError::RangeOutOfBounds {
                start: 2,
                end: 6,
                max: 4
            }
        );
    }

    #[test]
    fn empty_styling_range_is_rejected() {
        let mut doc = RichDocument::new();
        doc.apply(&EditCommand::InsertText {
            at: 1,
            text: "ab\n".to_string(),
        })
        .unwrap();
        let err = doc
            .apply(&EditCommand::SetListBullet {
                range: OffsetRange::new(2, 2),
                preset: "BULLET_ARROW".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, ApplyError::EmptyRange { start: 2, end: 2 });
    }

    #[test]
    fn hand_built_script_replays_like_compiled_one() {
        // same script content, one compiled and one assembled by hand
        let compiled = compile("## Note");
        let hand_built = EditScript {
            insert_text: "Note\n".to_string(),
            ops: compiled.ops.clone(),
        };
        let batch = compile_batch(&hand_built, &BatchOptions::default());
        let mut doc = RichDocument::new();
        doc.apply_batch(&batch).unwrap();
        assert_eq!(doc.render_markdown(), "## Note\n");
    }
}
