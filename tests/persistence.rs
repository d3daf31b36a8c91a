//! Integration Tests for File-Backed Persistence
//!
//! Exercises the full lifecycle over a real file store in a temp directory:
//! open, mutate, close, reopen.

use serde_json::Value;
use simple_cache::{Cache, CacheError, FileCache, ManualClock, TextFile};
use std::fs;
use tempfile::TempDir;

// == Helper Functions ==

fn temp_file(dir: &TempDir) -> TextFile {
    TextFile::new(dir.path().join("cache.json"))
}

// == Lifecycle Tests ==

#[test]
fn test_fresh_store_starts_empty() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    let cache: FileCache<String, _, _> =
        FileCache::open_with_clock(temp_file(&dir), clock).unwrap();

    assert!(cache.is_empty());
    cache.close().unwrap();
}

#[test]
fn test_close_writes_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    let mut cache = FileCache::open_with_clock(temp_file(&dir), clock).unwrap();
    cache.set("greeting", "hello".to_string(), 0);
    cache.close().unwrap();

    assert!(dir.path().join("cache.json").exists());
}

#[test]
fn test_round_trip_reproduces_entry_set() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    let mut cache = FileCache::open_with_clock(temp_file(&dir), clock.clone()).unwrap();
    cache.set("alpha", "1".to_string(), 0);
    cache.set("beta", "2".to_string(), 3600);
    cache.set("gamma", "3".to_string(), 0);
    cache.delete("gamma");
    cache.close().unwrap();

    let mut reopened = FileCache::open_with_clock(temp_file(&dir), clock).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get("alpha"), Some("1".to_string()));
    assert_eq!(reopened.get("beta"), Some("2".to_string()));
    assert_eq!(reopened.get("gamma"), None);
    reopened.close().unwrap();
}

#[test]
fn test_snapshot_preserves_created_at_to_the_second() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(1_700_000_000);

    let mut cache = FileCache::open_with_clock(temp_file(&dir), clock.clone()).unwrap();
    cache.set("a", "1".to_string(), 60);
    cache.close().unwrap();

    let raw = fs::read_to_string(dir.path().join("cache.json")).unwrap();
    let snapshot: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot["a"]["value"], "1");
    assert_eq!(snapshot["a"]["ttl"], 60);
    assert_eq!(snapshot["a"]["created_at"], 1_700_000_000u64);
}

#[test]
fn test_ttl_spans_restarts() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    let mut cache = FileCache::open_with_clock(temp_file(&dir), clock.clone()).unwrap();
    cache.set("short", "1".to_string(), 10);
    cache.set("forever", "2".to_string(), 0);
    cache.close().unwrap();

    // Reopen after the short TTL has elapsed
    clock.set(150);
    let mut reopened = FileCache::open_with_clock(temp_file(&dir), clock).unwrap();
    assert_eq!(reopened.get("short"), None);
    assert_eq!(reopened.get("forever"), Some("2".to_string()));
    reopened.close().unwrap();
}

#[test]
fn test_corrupt_snapshot_fails_construction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");
    fs::write(&path, "]]] definitely not json").unwrap();

    let result: Result<FileCache<String, _, _>, _> =
        FileCache::open_with_clock(TextFile::new(&path), ManualClock::new(100));

    assert!(matches!(result, Err(CacheError::Corrupt(_))));

    // The malformed file is left in place for inspection
    assert_eq!(fs::read_to_string(&path).unwrap(), "]]] definitely not json");
}

#[test]
fn test_unwritable_target_fails_close() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    // The snapshot target sits in a directory that no longer exists by the
    // time close() runs
    let doomed = dir.path().join("sub");
    fs::create_dir(&doomed).unwrap();
    let store = TextFile::new(doomed.join("cache.json"));

    let mut cache = FileCache::open_with_clock(store, clock).unwrap();
    cache.set("a", "1".to_string(), 0);
    fs::remove_dir(&doomed).unwrap();

    let result = cache.close();
    assert!(matches!(result, Err(CacheError::Storage { .. })));
}

#[test]
fn test_last_close_wins_across_instances() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    let mut first = FileCache::open_with_clock(temp_file(&dir), clock.clone()).unwrap();
    let mut second = FileCache::open_with_clock(temp_file(&dir), clock.clone()).unwrap();

    first.set("owner", "first".to_string(), 0);
    second.set("owner", "second".to_string(), 0);

    first.close().unwrap();
    second.close().unwrap();

    let mut reopened: FileCache<String, _, _> =
        FileCache::open_with_clock(temp_file(&dir), clock).unwrap();
    assert_eq!(reopened.get("owner"), Some("second".to_string()));
    reopened.close().unwrap();
}

#[test]
fn test_mixed_value_snapshot_with_json_values() {
    let dir = TempDir::new().unwrap();
    let clock = ManualClock::new(100);

    let mut cache: FileCache<Value, _, _> =
        FileCache::open_with_clock(temp_file(&dir), clock.clone()).unwrap();
    cache.set("flag", Value::Bool(true), 0);
    cache.set("count", Value::from(42), 0);
    cache.set("name", Value::from("ada"), 0);
    cache.close().unwrap();

    let mut reopened: FileCache<Value, _, _> =
        FileCache::open_with_clock(temp_file(&dir), clock).unwrap();
    assert_eq!(reopened.get("flag"), Some(Value::Bool(true)));
    assert_eq!(reopened.get("count"), Some(Value::from(42)));
    assert_eq!(reopened.get("name"), Some(Value::from("ada")));
    reopened.close().unwrap();
}
