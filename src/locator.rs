//! Recovers the input substring a wildcard captured in a prior match.
//!
//! The matcher's winning path records every key it chose, including the
//! section edges, so re-walking that path against the normalized input
//! pins down exactly which words each wildcard swallowed. The final
//! extraction indexes into the *raw* input instead, preserving the user's
//! casing and punctuation.

use std::ops::Range;

use crate::normalize::normalize;
use crate::types::{Key, WildcardKind};

/// Extract the span captured by the `index`-th wildcard of `kind` from the
/// matched `path`. Returns an empty string when the index is out of range.
///
/// `that` and `topic` must be the effective section inputs the match ran
/// with (dummy-substituted when the caller passed nothing).
pub(crate) fn capture(
    kind: WildcardKind,
    index: u32,
    path: &[Key],
    utterance: &str,
    that: &str,
    topic: &str,
    bot_name: &str,
) -> String {
    let (slice, raw) = match kind {
        WildcardKind::Caret | WildcardKind::Star => (main_slice(path), utterance),
        WildcardKind::ThatStar => (that_slice(path), that),
        WildcardKind::TopicStar => (topic_slice(path), topic),
    };
    let words = normalize(raw);
    let Some(span) = locate(kind, index, slice, &words, bot_name) else {
        return String::new();
    };

    // Word indices transfer from the normalized view onto the raw input.
    // Punctuation stripping can change the word count, so the end is
    // clamped rather than trusted.
    let raw_words: Vec<&str> = raw.split_whitespace().collect();
    let end = span.end.min(raw_words.len());
    if span.start >= end {
        return String::new();
    }
    raw_words[span.start..end].join(" ")
}

/// Path keys before the first section edge.
fn main_slice(path: &[Key]) -> &[Key] {
    let end = path
        .iter()
        .position(|key| matches!(key, Key::That | Key::Topic))
        .unwrap_or(path.len());
    &path[..end]
}

/// Path keys between the `That` edge and the `Topic` edge, if any.
fn that_slice(path: &[Key]) -> &[Key] {
    let Some(start) = path.iter().position(|key| *key == Key::That) else {
        return &[];
    };
    let rest = &path[start + 1..];
    let end = rest
        .iter()
        .position(|key| *key == Key::Topic)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Path keys after the `Topic` edge, if any.
fn topic_slice(path: &[Key]) -> &[Key] {
    match path.iter().position(|key| *key == Key::Topic) {
        Some(start) => &path[start + 1..],
        None => &[],
    }
}

/// Walk the pattern slice and the normalized words in lockstep, returning
/// the word span the requested wildcard captured.
///
/// Cursor `i` tracks the next input word, `j` the next path key. Literal
/// and bot-name keys consume one word each. A wildcard's span runs until
/// the next path key lines up with the input again, or to the end of the
/// input for a trailing wildcard.
fn locate(
    kind: WildcardKind,
    index: u32,
    path: &[Key],
    words: &[String],
    bot_name: &str,
) -> Option<Range<usize>> {
    let want_caret = kind == WildcardKind::Caret;
    let mut stars = 0u32;
    let mut carets = 0u32;
    let mut i = 0usize;
    let mut j = 0usize;

    while j < path.len() {
        let key = &path[j];
        if key.is_one_or_more() || *key == Key::Caret {
            let target = if *key == Key::Caret {
                carets += 1;
                want_caret && carets == index
            } else {
                stars += 1;
                !want_caret && stars == index
            };

            let end = if j + 1 == path.len() {
                words.len()
            } else {
                let next = &path[j + 1];
                (i..words.len())
                    .find(|&at| next.matches_word(&words[at], bot_name))
                    .unwrap_or(words.len())
            };

            if target {
                return Some(i..end);
            }
            // A zero-length `^` leaves `i` in place, so the following
            // literal lines up against the same word.
            i = end;
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    None
}
