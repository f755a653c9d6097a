#![warn(unreachable_pub)]
#![warn(dead_code)]

//! AIML-style pattern matching.
//!
//! A [`PatternStore`] holds conversational patterns in a trie keyed by
//! normalized words and wildcard sentinels. Given a user utterance, the
//! bot's previous response ("that") and the current topic, it selects the
//! single best-matching pattern and returns its template. Wildcards come
//! in three kinds with distinct priorities: `_` (one-or-more words, matched
//! before anything else), `*` (one-or-more, matched last) and `^`
//! (zero-or-more). A `BOT_NAME` placeholder matches the configured bot name.
//!
//! The portion of the input a wildcard swallowed can be recovered afterwards
//! with [`PatternStore::wildcard`], preserving the original casing and
//! punctuation of the user's text.
//!
//! ```
//! use aiml_match::{PatternStore, WildcardKind};
//!
//! let mut store = PatternStore::new();
//! store.add("I LIKE *", "", "", "nice-things");
//! assert_eq!(store.best_match("I like cats", "", ""), Some(&"nice-things"));
//! assert_eq!(store.wildcard(WildcardKind::Star, "I like cats", "", "", 1), "cats");
//! ```

pub mod error;
mod locator;
mod matcher;
pub mod normalize;
pub mod store;
pub mod types;

// Re-export common types
pub use error::{ParseWildcardKindError, PersistError};
pub use normalize::normalize;
pub use store::PatternStore;
pub use types::WildcardKind;
