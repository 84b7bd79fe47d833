use std::collections::BTreeSet;
use yt_announcer::{State, StateError};

#[test]
fn test_state_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = State::default();
    state.mark_posted("b");
    state.mark_posted("a");
    state.save(&path).unwrap();

    let loaded = State::load(&path).unwrap();
    let expected: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(loaded.posted, expected);
    assert!(loaded.is_posted("a"));
    assert!(!loaded.is_posted("c"));
}

#[test]
fn test_state_file_is_indented_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = State::default();
    state.mark_posted("abc12345678");
    state.save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "posted": ["abc12345678"] }));
    assert!(raw.contains("\n  \"posted\""));
}

#[test]
fn test_missing_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(State::load(&path), Err(StateError::Missing)));
    assert_eq!(State::load_or_default(&path), State::default());
}

#[test]
fn test_corrupt_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(State::load(&path), Err(StateError::Corrupt(_))));
    assert!(State::load_or_default(&path).posted.is_empty());
}

#[test]
fn test_state_keeps_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"posted": ["a", "a", "b"], "note": "hand edited"}"#).unwrap();

    let mut state = State::load(&path).unwrap();
    assert_eq!(state.posted.len(), 2);

    state.mark_posted("c");
    state.save(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "posted": ["a", "b", "c"], "note": "hand edited" })
    );

    std::fs::write(&path, "{}").unwrap();
    assert!(State::load(&path).unwrap().posted.is_empty());
}
