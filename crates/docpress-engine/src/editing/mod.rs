//! Replay side of the compiler output.
//!
//! [`commands`] turns an [`EditScript`](crate::script::EditScript) into the
//! wire command batch the remote editing service consumes; [`document`] is a
//! local stand-in for that service, replaying batches against an in-memory
//! body for tests and previews.

pub mod commands;
pub mod document;

pub use commands::{
    BatchOptions, DEFAULT_BULLET_PRESET, EditCommand, ParagraphStyle, compile_batch,
};
pub use document::{ApplyError, RichDocument};
