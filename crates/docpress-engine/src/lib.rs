//! Compiler core for docpress.
//!
//! Turns a small Markdown subset (`#`/`##`/`###` headings, `-`/`*`/numbered
//! bullets, `**bold**`, `*italic*`, blank-line paragraph breaks) into a batch
//! edit script for rich-text document APIs that address text by absolute
//! 1-based character offsets: one bulk body insert followed by formatting
//! commands over precomputed offset ranges.
//!
//! - [`parsing`]: line classification and emphasis-run splitting
//! - [`script`]: offset accounting and the [`EditScript`] itself
//! - [`editing`]: the wire command model and a local replay document

pub mod editing;
pub mod parsing;
pub mod script;

pub use editing::{
    ApplyError, BatchOptions, DEFAULT_BULLET_PRESET, EditCommand, ParagraphStyle, RichDocument,
    compile_batch,
};
pub use parsing::{Emphasis, LineKind, ParsedLine, TextSpan, parse_markdown};
pub use script::{EditScript, FormatOp, HeadingLevel, ORIGIN_OFFSET, OffsetRange, build_script};

/// Parses markdown source and builds its edit script in one call.
///
/// Never fails: malformed emphasis markers degrade to literal text and an
/// empty input produces an empty (no-op) script.
pub fn compile(markdown: &str) -> EditScript {
    script::build_script(&parsing::parse_markdown(markdown))
}
