//! Input normalization shared by the matcher and the trie builder.
//!
//! AIML matching is case-, punctuation- and whitespace-insensitive: every
//! input is uppercased, the fixed punctuation set is blanked out, and runs
//! of whitespace collapse into word boundaries before splitting. Patterns
//! go through the same rules, except that the wildcard tokens (`_`, `*`,
//! `^`) and the `BOT_NAME` placeholder are lifted into trie sentinels
//! before the punctuation pass would eat them.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Key;

/// The exact punctuation set blanked out of matcher input.
pub(crate) const PUNCTUATION: &str = r#"`~!@#$%^&*()-_=+[{]}\|;:'",<.>/?"#;

static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]", regex::escape(PUNCTUATION))).unwrap()
});

/// Normalize free text into the engine's canonical word list.
///
/// Uppercases, replaces each punctuation character with a space and splits
/// on whitespace. The result contains only non-empty uppercase
/// alphanumeric words, so it can never collide with a trie sentinel.
///
/// ```
/// assert_eq!(aiml_match::normalize("  Hello,   world! "), vec!["HELLO", "WORLD"]);
/// assert_eq!(aiml_match::normalize("?!"), Vec::<String>::new());
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    PUNCT_RE
        .replace_all(&upper, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Collapse internal whitespace runs to single spaces, trimming the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize a main pattern into trie keys.
///
/// `_`, `*`, `^` and `BOT_NAME` become their sentinels; everything else is
/// normalized word by word (a sloppy token like `can't` splits into the
/// words it would match as input).
pub(crate) fn pattern_keys(text: &str) -> Vec<Key> {
    keys_with(text, true)
}

/// Tokenize a "that" or "topic" subpattern into trie keys.
///
/// Only `_` and `*` act as wildcards here. `^` and `BOT_NAME` are kept as
/// literal words, which no normalized input can ever produce.
pub(crate) fn subpattern_keys(text: &str) -> Vec<Key> {
    keys_with(text, false)
}

fn keys_with(text: &str, extended: bool) -> Vec<Key> {
    let mut keys = Vec::new();
    for token in text.split_whitespace() {
        match token {
            "_" => keys.push(Key::Underscore),
            "*" => keys.push(Key::Star),
            "^" if extended => keys.push(Key::Caret),
            "^" => keys.push(Key::Word("^".to_string())),
            "BOT_NAME" if extended => keys.push(Key::BotName),
            "BOT_NAME" => keys.push(Key::Word("BOT_NAME".to_string())),
            other => keys.extend(normalize(other).into_iter().map(Key::Word)),
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("hello", vec!["HELLO"])]
    #[case("Hello, World!", vec!["HELLO", "WORLD"])]
    #[case("what's   up?", vec!["WHAT", "S", "UP"])]
    #[case("a-b_c", vec!["A", "B", "C"])]
    #[case("42nd street", vec!["42ND", "STREET"])]
    fn test_normalize(#[case] input: &str, #[case] expected: Vec<&str>) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("?!.,;")]
    #[case("\t\n")]
    fn test_normalize_empty(#[case] input: &str) {
        check!(normalize(input).is_empty());
    }

    #[test]
    fn test_every_punctuation_char_is_stripped() {
        for ch in PUNCTUATION.chars() {
            let input = format!("A{}B", ch);
            check!(
                normalize(&input) == vec!["A", "B"],
                "'{}' should split the token",
                ch
            );
        }
    }

    #[test]
    fn test_collapse_whitespace() {
        check!(collapse_whitespace("  Alice   Bot\t") == "Alice Bot");
        check!(collapse_whitespace("Alice") == "Alice");
        check!(collapse_whitespace("   ") == "");
    }

    #[test]
    fn test_pattern_keys_sentinels() {
        let keys = pattern_keys("_ HELLO * ^ BOT_NAME");
        check!(
            keys == vec![
                Key::Underscore,
                Key::Word("HELLO".to_string()),
                Key::Star,
                Key::Caret,
                Key::BotName,
            ]
        );
    }

    #[test]
    fn test_pattern_keys_normalizes_words() {
        // Case and stray punctuation in a pattern word fold to the same
        // form its matching input would take.
        let keys = pattern_keys("Hello, world");
        check!(
            keys == vec![
                Key::Word("HELLO".to_string()),
                Key::Word("WORLD".to_string()),
            ]
        );
    }

    #[test]
    fn test_subpattern_keys_reduced_vocabulary() {
        // `^` and `BOT_NAME` stay literal in that/topic sections. Neither
        // can ever equal a normalized input word.
        let keys = subpattern_keys("_ YES * ^ BOT_NAME");
        check!(
            keys == vec![
                Key::Underscore,
                Key::Word("YES".to_string()),
                Key::Star,
                Key::Word("^".to_string()),
                Key::Word("BOT_NAME".to_string()),
            ]
        );
    }
}
