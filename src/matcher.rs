//! Recursive, priority-ordered backtracking search over the trie.
//!
//! At every level the matcher tries children in a strict order (`_`,
//! literal word, bot name, `^`, `*`) and returns on the first success,
//! so the first complete descent found is the best match by construction.
//! One-or-more wildcards try every possible split of the remaining words
//! (shortest capture first), which makes them lazy: `_ WORLD` against
//! "hello brave world" swallows exactly "hello brave".

use crate::store::Node;
use crate::types::Key;

/// A successful descent: the keys chosen at each level, root first, and
/// the template at the final node.
#[derive(Debug)]
pub(crate) struct Match<'t, T> {
    pub(crate) path: Vec<Key>,
    pub(crate) template: &'t T,
}

/// Run the full search from the trie root.
///
/// `that` and `topic` are pending sections, consumed when a descent
/// crosses their edge; each carries at least one word (a dummy sentinel
/// if the caller had nothing), so a trailing wildcard can never capture a
/// vacuous section.
pub(crate) fn best_path<'t, T>(
    root: &'t Node<T>,
    words: &[String],
    that: &[String],
    topic: &[String],
    bot_name: &str,
) -> Option<Match<'t, T>> {
    let mut path = Vec::new();
    let template = descend(root, words, that, topic, bot_name, &mut path)?;
    // Keys are pushed on unwind, deepest first.
    path.reverse();
    Some(Match { path, template })
}

fn descend<'t, T>(
    node: &'t Node<T>,
    words: &[String],
    that: &[String],
    topic: &[String],
    bot: &str,
    path: &mut Vec<Key>,
) -> Option<&'t T> {
    if words.is_empty() {
        return close_section(node, that, topic, bot, path);
    }

    let first = &words[0];
    let suffix = &words[1..];

    // `_` outranks everything, including an exact literal.
    if let Some(child) = node.children.get(&Key::Underscore) {
        // The empty split lets a trailing wildcard swallow the rest.
        for at in 0..=suffix.len() {
            if let Some(template) = descend(child, &suffix[at..], that, topic, bot, path) {
                path.push(Key::Underscore);
                return Some(template);
            }
        }
    }

    let literal = Key::Word(first.clone());
    if let Some(child) = node.children.get(&literal) {
        if let Some(template) = descend(child, suffix, that, topic, bot, path) {
            path.push(literal);
            return Some(template);
        }
    }

    if first == bot {
        if let Some(child) = node.children.get(&Key::BotName) {
            if let Some(template) = descend(child, suffix, that, topic, bot, path) {
                path.push(Key::BotName);
                return Some(template);
            }
        }
    }

    // `^` may match zero words, so its splits start at the current word.
    if let Some(child) = node.children.get(&Key::Caret) {
        for at in 0..=words.len() {
            if let Some(template) = descend(child, &words[at..], that, topic, bot, path) {
                path.push(Key::Caret);
                return Some(template);
            }
        }
    }

    if let Some(child) = node.children.get(&Key::Star) {
        for at in 0..=suffix.len() {
            if let Some(template) = descend(child, &suffix[at..], that, topic, bot, path) {
                path.push(Key::Star);
                return Some(template);
            }
        }
    }

    None
}

/// End of the current section's words.
///
/// Tries, in order: a trailing `^` child (zero-length match), the pending
/// `that` section, the pending `topic` section. Whatever happens in those
/// branches, a node holding a template still terminates the pattern here;
/// that fallback is what lets a plain `HELLO` match an utterance that
/// arrives with a non-empty "that". Only the first applicable branch is
/// attempted, mirroring the priority chain of the word step.
fn close_section<'t, T>(
    node: &'t Node<T>,
    that: &[String],
    topic: &[String],
    bot: &str,
    path: &mut Vec<Key>,
) -> Option<&'t T> {
    if let Some(child) = node.children.get(&Key::Caret) {
        if let Some(template) = descend(child, &[], that, topic, bot, path) {
            path.push(Key::Caret);
            return Some(template);
        }
    } else if !that.is_empty() && node.children.contains_key(&Key::That) {
        let child = &node.children[&Key::That];
        if let Some(template) = descend(child, that, &[], topic, bot, path) {
            path.push(Key::That);
            return Some(template);
        }
    } else if !topic.is_empty() && node.children.contains_key(&Key::Topic) {
        let child = &node.children[&Key::Topic];
        if let Some(template) = descend(child, topic, &[], &[], bot, path) {
            path.push(Key::Topic);
            return Some(template);
        }
    }
    node.template.as_ref()
}
