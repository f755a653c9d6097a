//! Domain types for the pattern trie.
//!
//! This module provides the tagged trie key and the wildcard-kind selector:
//! - [`Key`] labels one edge of the trie (a word, a wildcard, a section)
//! - [`WildcardKind`] names which wildcard a capture query refers to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseWildcardKindError;

/// A single edge label in the pattern trie.
///
/// The classic AIML matching algorithm overloads single ASCII digits as
/// dictionary keys to keep wildcards and section markers distinct from
/// pattern words. A tagged enum removes that trick entirely: a `Word` can
/// never collide with a sentinel, no matter what the normalizer emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum Key {
    /// A normalized pattern word (uppercase alphanumerics).
    Word(String),
    /// `_`: one-or-more words, matched before anything else.
    Underscore,
    /// `*`: one-or-more words, matched after everything else.
    Star,
    /// `^`: zero-or-more words.
    Caret,
    /// Placeholder matching the configured bot name.
    BotName,
    /// Section edge introducing the "that" subpattern.
    That,
    /// Section edge introducing the "topic" subpattern.
    Topic,
}

impl Key {
    /// Whether this key consumes exactly the given input word during a
    /// lockstep path walk. Wildcards and section edges never match here.
    pub(crate) fn matches_word(&self, word: &str, bot_name: &str) -> bool {
        match self {
            Self::Word(w) => w == word,
            Self::BotName => word == bot_name,
            _ => false,
        }
    }

    /// `_` and `*` both consume at least one word; they differ only in
    /// match priority and share a capture counter.
    pub(crate) fn is_one_or_more(&self) -> bool {
        matches!(self, Self::Underscore | Self::Star)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => f.write_str(w),
            Self::Underscore => f.write_str("_"),
            Self::Star => f.write_str("*"),
            Self::Caret => f.write_str("^"),
            Self::BotName => f.write_str("BOT_NAME"),
            Self::That => f.write_str("<that>"),
            Self::Topic => f.write_str("<topic>"),
        }
    }
}

/// Selects which wildcard a capture query refers to.
///
/// Capture indices are 1-based and counted per kind within their section:
/// `Caret` counts `^` occurrences in the main pattern, `Star` counts `*`
/// and `_` in the main pattern, `ThatStar` and `TopicStar` count `*` and
/// `_` in their respective subpatterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildcardKind {
    /// A `^` in the main pattern.
    Caret,
    /// A `*` or `_` in the main pattern.
    Star,
    /// A `*` or `_` in the "that" subpattern.
    ThatStar,
    /// A `*` or `_` in the "topic" subpattern.
    TopicStar,
}

impl WildcardKind {
    /// The lowercase name used by AIML template tags.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caret => "caret",
            Self::Star => "star",
            Self::ThatStar => "thatstar",
            Self::TopicStar => "topicstar",
        }
    }
}

impl fmt::Display for WildcardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WildcardKind {
    type Err = ParseWildcardKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "caret" => Ok(Self::Caret),
            "star" => Ok(Self::Star),
            "thatstar" => Ok(Self::ThatStar),
            "topicstar" => Ok(Self::TopicStar),
            other => Err(ParseWildcardKindError {
                kind: other.to_string(),
            }),
        }
    }
}
