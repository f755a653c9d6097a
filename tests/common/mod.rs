//! Shared fixtures for integration tests.
//!
//! `sample_store` is a small conversational rule set covering every
//! wildcard kind, the bot-name placeholder and both subpattern sections.
//! Tests that need owned templates (persistence) build their own stores.

use aiml_match::PatternStore;
use rstest::fixture;

/// A store pre-loaded with one pattern per matching feature.
#[fixture]
pub fn sample_store() -> PatternStore<&'static str> {
    let mut store = PatternStore::new();
    store.set_bot_name("Alice");
    store.add("HELLO", "", "", "greeting");
    store.add("HELLO", "HOW ARE YOU", "", "that-greeting");
    store.add("HELLO WORLD", "", "", "exact-world");
    store.add("_ WORLD", "", "", "wild-world");
    store.add("I LIKE *", "", "", "likes");
    store.add("^ CATS", "", "", "cats");
    store.add("BOT_NAME ROCKS", "", "", "fan");
    store.add("YES", "DO YOU LIKE *", "MOVIES", "movie-yes");
    store.add("*", "", "TRAVEL *", "travel");
    store
}
