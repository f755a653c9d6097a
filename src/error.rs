//! Typed errors for the pattern store.
//!
//! Two failure classes exist: a caller naming an unknown wildcard kind, and
//! persistence going wrong while saving or restoring the store blob. A
//! pattern that matches nothing is *not* an error; queries report it
//! through `None` or an empty string.

use thiserror::Error;

/// Error for an unrecognized wildcard-kind name.
///
/// Produced by [`WildcardKind::from_str`](crate::WildcardKind); the typed
/// enum makes the bad value unrepresentable past the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wildcard kind '{kind}'")]
pub struct ParseWildcardKindError {
    /// The rejected input.
    pub kind: String,
}

impl ParseWildcardKindError {
    /// Get help text for this error.
    pub fn help(&self) -> &'static str {
        "Legal kinds are 'caret', 'star', 'thatstar' and 'topicstar'."
    }
}

/// Errors raised while saving or restoring a pattern store blob.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the blob failed.
    #[error("pattern store I/O failed")]
    Io(#[from] std::io::Error),

    /// The blob could not be encoded or decoded.
    #[error("pattern store blob is malformed")]
    Codec(#[from] postcard::Error),
}
