use aiml_match::{PatternStore, WildcardKind};
use assert2::{check, let_assert};

/// A store with owned templates, suitable for restore.
fn owned_store() -> PatternStore<String> {
    let mut store = PatternStore::new();
    store.set_bot_name("Alice");
    store.add("HELLO", "", "", "greeting".to_string());
    store.add("I LIKE *", "", "", "likes".to_string());
    store.add("HELLO", "HOW ARE YOU", "", "that-greeting".to_string());
    store.add("YES", "DO YOU LIKE *", "MOVIES", "movie-yes".to_string());
    store
}

/// Saving to a buffer and restoring into a fresh store preserves every
/// observable behavior.
#[test]
fn round_trip_through_memory() {
    let store = owned_store();
    let mut blob = Vec::new();
    store.save(&mut blob).unwrap();
    check!(!blob.is_empty());

    let mut restored = PatternStore::<String>::new();
    restored.restore(blob.as_slice()).unwrap();

    check!(restored.num_templates() == store.num_templates());
    check!(restored.bot_name() == "ALICE");
    check!(restored.best_match("hello!", "", "") == Some(&"greeting".to_string()));
    check!(
        restored.best_match("hello", "How are you?", "")
            == Some(&"that-greeting".to_string())
    );
    check!(restored.wildcard(WildcardKind::Star, "I like warm rain", "", "", 1) == "warm rain");
    check!(restored.best_match("unknown input", "", "").is_none());
}

/// The blob also round-trips through a real file.
#[test]
fn round_trip_through_file() {
    let store = owned_store();
    let file = tempfile::NamedTempFile::new().unwrap();
    store.save(file.as_file()).unwrap();

    let mut restored = PatternStore::<String>::new();
    let source = std::fs::File::open(file.path()).unwrap();
    restored.restore(source).unwrap();

    check!(restored.num_templates() == store.num_templates());
    check!(restored.best_match("I like cats", "", "") == Some(&"likes".to_string()));
}

/// Restoring replaces the previous state wholesale.
#[test]
fn restore_replaces_existing_state() {
    let mut blob = Vec::new();
    owned_store().save(&mut blob).unwrap();

    let mut other = PatternStore::new();
    other.add("GOODBYE", "", "", "bye".to_string());
    other.restore(blob.as_slice()).unwrap();

    check!(other.best_match("goodbye", "", "").is_none());
    check!(other.best_match("hello", "", "") == Some(&"greeting".to_string()));
    check!(other.num_templates() == 4);
}

/// A malformed blob surfaces a codec error and leaves the store as it
/// was.
#[test]
fn restore_rejects_garbage() {
    let mut store = PatternStore::new();
    store.add("HELLO", "", "", "greeting".to_string());

    let garbage = b"this is not a pattern store blob";
    let_assert!(Err(err) = store.restore(&garbage[..]));
    check!(matches!(err, aiml_match::PersistError::Codec(_)));

    // Prior state survives the failed restore.
    check!(store.best_match("hello", "", "") == Some(&"greeting".to_string()));
    check!(store.num_templates() == 1);
}

/// An empty store round-trips too.
#[test]
fn round_trip_empty_store() {
    let store = PatternStore::<String>::new();
    let mut blob = Vec::new();
    store.save(&mut blob).unwrap();

    let mut restored = PatternStore::<String>::new();
    restored.add("TEMP", "", "", "gone".to_string());
    restored.restore(blob.as_slice()).unwrap();

    check!(restored.is_empty());
    check!(restored.bot_name() == "NAMELESS");
}
