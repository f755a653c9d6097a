//! The pattern store: a trie over normalized words and wildcard sentinels.
//!
//! [`PatternStore`] owns the trie, the template count and the bot name.
//! `add` is the only trie mutator; queries borrow the store immutably, so
//! Rust's borrow rules give the reader-writer discipline for free. The
//! whole state round-trips through an opaque postcard blob via
//! [`PatternStore::save`] and [`PatternStore::restore`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Write};

use crate::error::PersistError;
use crate::locator;
use crate::matcher::{self, Match};
use crate::normalize::{self, normalize};
use crate::types::{Key, WildcardKind};

/// Injected in place of an empty "that" input so the matcher always has a
/// word to consume in that section. Stored patterns must not match it.
pub(crate) const DUMMY_THAT: &str = "ULTRABOGUSDUMMYTHAT";

/// Likewise for an empty "topic" input.
pub(crate) const DUMMY_TOPIC: &str = "ULTRABOGUSDUMMYTOPIC";

/// One trie node: children keyed by word or sentinel, plus the template
/// slot that marks the end of a stored pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Node<T> {
    pub(crate) children: HashMap<Key, Node<T>>,
    pub(crate) template: Option<T>,
}

// Derived Default would needlessly require T: Default.
impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            template: None,
        }
    }
}

/// An AIML-style pattern store.
///
/// Patterns are added as `(pattern, that, topic)` triples with an opaque
/// template payload, and queried with [`best_match`](Self::best_match) and
/// [`wildcard`](Self::wildcard). Matching is case-, punctuation- and
/// whitespace-insensitive; ties between wildcards and literals resolve by
/// the fixed priority order `_` > literal > bot name > `^` > `*`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternStore<T> {
    root: Node<T>,
    template_count: u64,
    bot_name: String,
}

impl<T> Default for PatternStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PatternStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            template_count: 0,
            bot_name: "NAMELESS".to_string(),
        }
    }

    /// Number of distinct `(pattern, that, topic)` triples stored.
    #[inline]
    pub fn num_templates(&self) -> u64 {
        self.template_count
    }

    /// True if no pattern has been stored yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.template_count == 0
    }

    /// The stored bot name, whitespace-collapsed and uppercased.
    #[inline]
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Set the name the `BOT_NAME` pattern placeholder matches.
    ///
    /// The name is collapsed to single spaces and uppercased to line up
    /// with normalized input. Matching compares whole words, so a name
    /// that stays multi-word after collapsing can never match.
    pub fn set_bot_name(&mut self, name: &str) {
        self.bot_name = normalize::collapse_whitespace(name).to_uppercase();
        tracing::debug!(bot_name = %self.bot_name, "bot name updated");
    }

    /// Store a pattern triple and its template.
    ///
    /// An empty `that` or `topic` omits that section. Re-adding an existing
    /// triple overwrites its template without changing the count.
    pub fn add(&mut self, pattern: &str, that: &str, topic: &str, template: T) {
        let mut node = &mut self.root;
        for key in normalize::pattern_keys(pattern) {
            node = node.children.entry(key).or_default();
        }

        let that_keys = normalize::subpattern_keys(that);
        if !that_keys.is_empty() {
            node = node.children.entry(Key::That).or_default();
            for key in that_keys {
                node = node.children.entry(key).or_default();
            }
        }

        let topic_keys = normalize::subpattern_keys(topic);
        if !topic_keys.is_empty() {
            node = node.children.entry(Key::Topic).or_default();
            for key in topic_keys {
                node = node.children.entry(key).or_default();
            }
        }

        if node.template.is_none() {
            self.template_count += 1;
        }
        node.template = Some(template);
        tracing::trace!(total = self.template_count, "pattern stored");
    }

    /// Return the template of the best-matching pattern, if any.
    ///
    /// `that` is the bot's previous response and `topic` the current
    /// conversation topic; pass `""` for either when it does not apply.
    pub fn best_match(&self, utterance: &str, that: &str, topic: &str) -> Option<&T> {
        self.match_internal(utterance, that, topic)
            .map(|found| found.template)
    }

    /// Recover the input substring captured by the `index`-th wildcard of
    /// `kind` (1-based, counted within the kind's section).
    ///
    /// The result comes from the original, pre-normalization input, so the
    /// user's casing and punctuation survive. Returns an empty string when
    /// nothing matches or the index is out of range.
    pub fn wildcard(
        &self,
        kind: WildcardKind,
        utterance: &str,
        that: &str,
        topic: &str,
        index: u32,
    ) -> String {
        let Some(found) = self.match_internal(utterance, that, topic) else {
            return String::new();
        };
        locator::capture(
            kind,
            index,
            &found.path,
            utterance,
            effective(that, DUMMY_THAT),
            effective(topic, DUMMY_TOPIC),
            &self.bot_name,
        )
    }

    /// Shared matching entry point; the path stays crate-internal.
    pub(crate) fn match_internal(
        &self,
        utterance: &str,
        that: &str,
        topic: &str,
    ) -> Option<Match<'_, T>> {
        let words = normalize(utterance);
        let that_words = normalize(effective(that, DUMMY_THAT));
        let topic_words = normalize(effective(topic, DUMMY_TOPIC));
        matcher::best_path(&self.root, &words, &that_words, &topic_words, &self.bot_name)
    }
}

impl<T: Serialize> PatternStore<T> {
    /// Serialize the whole store into an opaque blob.
    ///
    /// The format round-trips any state this crate produced but is not
    /// stable across versions.
    pub fn save<W: Write>(&self, sink: W) -> Result<(), PersistError> {
        postcard::to_io(self, sink)?;
        tracing::debug!(templates = self.template_count, "pattern store saved");
        Ok(())
    }

    /// Render the trie as pretty JSON for debugging.
    pub fn dump(&self) -> String {
        serde_json::to_string_pretty(&node_value(&self.root)).unwrap_or_default()
    }
}

impl<T: DeserializeOwned> PatternStore<T> {
    /// Replace this store's entire state with a previously saved blob.
    ///
    /// On error the current state is left untouched; the decode completes
    /// in memory before anything is swapped in.
    pub fn restore<R: Read>(&mut self, mut source: R) -> Result<(), PersistError> {
        let mut blob = Vec::new();
        source.read_to_end(&mut blob)?;
        let restored: Self = postcard::from_bytes(&blob)?;
        tracing::info!(
            templates = restored.template_count,
            bot_name = %restored.bot_name,
            "pattern store restored"
        );
        *self = restored;
        Ok(())
    }
}

/// Substitute the dummy sentinel for an empty section input.
fn effective<'a>(text: &'a str, dummy: &'static str) -> &'a str {
    if text.trim().is_empty() { dummy } else { text }
}

/// JSON rendering of one node, keys in display form, sorted for
/// deterministic output.
fn node_value<T: Serialize>(node: &Node<T>) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    if let Some(template) = &node.template {
        let rendered = serde_json::to_value(template).unwrap_or(serde_json::Value::Null);
        map.insert("<template>".to_string(), rendered);
    }
    let mut keys: Vec<&Key> = node.children.keys().collect();
    keys.sort_by_key(|key| key.to_string());
    for key in keys {
        map.insert(key.to_string(), node_value(&node.children[key]));
    }
    serde_json::Value::Object(map)
}
