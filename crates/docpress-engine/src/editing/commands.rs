use serde::{Deserialize, Serialize};

use crate::script::{EditScript, FormatOp, HeadingLevel, ORIGIN_OFFSET, OffsetRange};

/// Preset id sent with `setListBullet` when nothing else is configured.
pub const DEFAULT_BULLET_PRESET: &str = "BULLET_DISC_CIRCLE_SQUARE";

/// Paragraph style ids understood by the remote editing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParagraphStyle {
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
}

impl From<HeadingLevel> for ParagraphStyle {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => ParagraphStyle::Heading1,
            HeadingLevel::H2 => ParagraphStyle::Heading2,
            HeadingLevel::H3 => ParagraphStyle::Heading3,
        }
    }
}

/// One command of the editing contract, shaped for a JSON batch body.
///
/// A batch is applied atomically in list order; formatting commands address
/// offsets that exist only once the insert ran, so the insert always comes
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditCommand {
    InsertText {
        at: usize,
        text: String,
    },
    SetParagraphStyle {
        range: OffsetRange,
        style: ParagraphStyle,
    },
    SetListBullet {
        range: OffsetRange,
        preset: String,
    },
    SetTextEmphasis {
        range: OffsetRange,
        bold: bool,
        italic: bool,
    },
}

/// Knobs threaded through batch compilation. Passed explicitly by callers;
/// never read from process-wide state.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Preset id for `setListBullet` commands.
    pub bullet_preset: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            bullet_preset: DEFAULT_BULLET_PRESET.to_string(),
        }
    }
}

/// Compiles a script into its ordered command batch: the bulk insert at the
/// document origin, then one command per formatting operation in script
/// order.
///
/// An empty body emits no insert at all (the remote service rejects
/// zero-length inserts), so an empty script compiles to an empty batch.
pub fn compile_batch(script: &EditScript, opts: &BatchOptions) -> Vec<EditCommand> {
    let mut commands = Vec::with_capacity(script.ops.len() + 1);

    if !script.insert_text.is_empty() {
        commands.push(EditCommand::InsertText {
            at: ORIGIN_OFFSET,
            text: script.insert_text.clone(),
        });
    }

    for op in &script.ops {
        commands.push(match *op {
            FormatOp::Heading { range, level } => EditCommand::SetParagraphStyle {
                range,
                style: level.into(),
            },
            FormatOp::Bullet { range } => EditCommand::SetListBullet {
                range,
                preset: opts.bullet_preset.clone(),
            },
            FormatOp::Bold { range } => EditCommand::SetTextEmphasis {
                range,
                bold: true,
                italic: false,
            },
            FormatOp::Italic { range } => EditCommand::SetTextEmphasis {
                range,
                bold: false,
                italic: true,
            },
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_comes_first_then_ops_in_script_order() {
        let script = compile("# Title\n\n- item");
        let batch = compile_batch(&script, &BatchOptions::default());

        assert_eq!(batch.len(), 3);
        assert_eq!(
            batch[0],
            EditCommand::InsertText {
                at: 1,
                text: "Title\n\nitem\n".to_string(),
            }
        );
        assert_eq!(
            batch[1],
            EditCommand::SetParagraphStyle {
                range: OffsetRange::new(1, 7),
                style: ParagraphStyle::Heading1,
            }
        );
        assert_eq!(
            batch[2],
            EditCommand::SetListBullet {
                range: OffsetRange::new(8, 13),
                preset: DEFAULT_BULLET_PRESET.to_string(),
            }
        );
    }

    #[test]
    fn empty_script_compiles_to_empty_batch() {
        let batch = compile_batch(&EditScript::default(), &BatchOptions::default());
        assert!(batch.is_empty());
    }

    #[test]
    fn bullet_preset_is_threaded_through() {
        let script = compile("- item");
        let opts = BatchOptions {
            bullet_preset: "BULLET_ARROW".to_string(),
        };
        let batch = compile_batch(&script, &opts);
        assert_eq!(
            batch[1],
            EditCommand::SetListBullet {
                range: OffsetRange::new(1, 6),
                preset: "BULLET_ARROW".to_string(),
            }
        );
    }

    #[test]
    fn wire_shape_matches_the_batch_contract() {
        let insert = EditCommand::InsertText {
            at: 1,
            text: "one\n".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&insert).unwrap(),
            r#"{"insertText":{"at":1,"text":"one\n"}}"#
        );

        let style = EditCommand::SetParagraphStyle {
            range: OffsetRange::new(1, 5),
            style: ParagraphStyle::Heading2,
        };
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            r#"{"setParagraphStyle":{"range":{"start":1,"end":5},"style":"HEADING_2"}}"#
        );

        let emphasis = EditCommand::SetTextEmphasis {
            range: OffsetRange::new(3, 8),
            bold: true,
            italic: false,
        };
        assert_eq!(
            serde_json::to_string(&emphasis).unwrap(),
            r#"{"setTextEmphasis":{"range":{"start":3,"end":8},"bold":true,"italic":false}}"#
        );
    }

    #[test]
    fn wire_shape_round_trips() {
        let batch = compile_batch(&compile("## H\n\n**b** *i*"), &BatchOptions::default());
        let json = serde_json::to_string(&batch).unwrap();
        let back: Vec<EditCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
    }
}
