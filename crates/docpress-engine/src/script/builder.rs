use crate::parsing::{Emphasis, LineKind, ParsedLine};

use super::ops::{EditScript, FormatOp, HeadingLevel, ORIGIN_OFFSET, OffsetRange};

/// Builds the edit script for an ordered line sequence, spacers included.
///
/// Two passes. The first concatenates every line plus its newline into the
/// body and records each line's absolute start offset. The second emits
/// paragraph-level and emphasis operations from those precomputed offsets,
/// so no operation depends on an earlier one having been applied; only the
/// bulk insert itself must precede them all.
pub fn build_script(lines: &[ParsedLine]) -> EditScript {
    let mut insert_text = String::new();
    let mut starts = Vec::with_capacity(lines.len());
    let mut offset = ORIGIN_OFFSET;

    for line in lines {
        starts.push(offset);
        let text = line.text();
        offset += text.chars().count() + 1;
        insert_text.push_str(&text);
        insert_text.push('\n');
    }

    let mut ops = Vec::new();
    for (line, &start) in lines.iter().zip(&starts) {
        // paragraph range: content plus the trailing newline
        let line_len = line.text().chars().count();
        let range = OffsetRange::new(start, start + line_len + 1);
        match line.kind {
            LineKind::Heading1 => ops.push(FormatOp::Heading { range, level: HeadingLevel::H1 }),
            LineKind::Heading2 => ops.push(FormatOp::Heading { range, level: HeadingLevel::H2 }),
            LineKind::Heading3 => ops.push(FormatOp::Heading { range, level: HeadingLevel::H3 }),
            LineKind::Bullet => ops.push(FormatOp::Bullet { range }),
            LineKind::Paragraph => {}
        }

        // emphasis ranges: content only, newline excluded
        let mut cursor = start;
        for span in &line.spans {
            let span_end = cursor + span.text.chars().count();
            if span_end > cursor {
                let range = OffsetRange::new(cursor, span_end);
                match span.emphasis {
                    Emphasis::Bold => ops.push(FormatOp::Bold { range }),
                    Emphasis::Italic => ops.push(FormatOp::Italic { range }),
                    Emphasis::None => {}
                }
            }
            cursor = span_end;
        }
    }

    EditScript { insert_text, ops }
}
