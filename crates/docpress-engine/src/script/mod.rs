//! Offset accounting and the edit script itself.
//!
//! Offsets are 1-based character positions into the body assembled by
//! [`build_script`]; they are all computed before any operation is emitted,
//! so the resulting operations commute and only the bulk insert is
//! order-sensitive.

pub mod builder;
pub mod ops;

pub use builder::build_script;
pub use ops::{EditScript, FormatOp, HeadingLevel, ORIGIN_OFFSET, OffsetRange, ScriptError};
