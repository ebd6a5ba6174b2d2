//! Error taxonomy.
//!
//! Configuration is the only fallible surface; driving an animation never fails.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors produced by the ticker engine.
pub enum TickerError {
    #[error("character sets have not been configured; call set_character_sets first")]
    /// `set_text` was invoked before any character set was supplied.
    NotConfigured,

    #[error("the empty sentinel glyph cannot appear in a character set")]
    /// A caller-supplied character set contained [`EMPTY_GLYPH`](crate::EMPTY_GLYPH).
    SentinelInCharacterSet,
}
