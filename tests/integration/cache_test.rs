// MemoryCache integration tests
use pip_components::{Cache, ComponentError, ConfigParams, Configurable, MemoryCache};
use serde_json::json;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// ============================================================================
// Expiration
// ============================================================================

#[test]
fn test_entry_expires_after_timeout() {
    let cache = MemoryCache::new();
    cache.store(None, "k", json!("v"), 100).unwrap();

    assert_eq!(cache.retrieve(None, "k").unwrap(), Some(json!("v")));

    thread::sleep(Duration::from_millis(200));
    assert_eq!(cache.retrieve(None, "k").unwrap(), None);
}

#[test]
fn test_zero_timeout_uses_configured_default() {
    let cache = MemoryCache::new();
    cache.configure(&ConfigParams::from_tuples(&[("options.timeout", "100")]));
    cache.store(None, "k", json!(1), 0).unwrap();

    thread::sleep(Duration::from_millis(200));
    assert_eq!(cache.retrieve(None, "k").unwrap(), None);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_storing_null_removes() {
    let cache = MemoryCache::new();
    cache.store(None, "k", json!({"a": 1}), 1000).unwrap();

    assert_eq!(cache.store(None, "k", json!(null), 1000).unwrap(), None);
    assert_eq!(cache.retrieve(None, "k").unwrap(), None);
    assert!(cache.is_empty());
}

#[test]
fn test_empty_key_is_rejected() {
    let cache = MemoryCache::new();
    assert!(matches!(cache.store(None, "", json!(1), 0), Err(ComponentError::InvalidArgument(_))));
    assert!(matches!(cache.retrieve(None, ""), Err(ComponentError::InvalidArgument(_))));
    assert!(matches!(cache.remove(None, ""), Err(ComponentError::InvalidArgument(_))));
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_eviction_keeps_size_bounded() {
    let cache = MemoryCache::with_options(60_000, 3);

    for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
        cache.store(None, key, json!(i), 10_000 + i as u64 * 1_000).unwrap();
    }

    assert_eq!(cache.len(), 3);
    // "a" expires first, so it is the one evicted
    assert_eq!(cache.retrieve(None, "a").unwrap(), None);
    assert_eq!(cache.retrieve(None, "d").unwrap(), Some(json!(3)));
}

#[test]
fn test_shared_between_threads() {
    let cache = Arc::new(MemoryCache::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                cache.store(None, &format!("key{}", i), json!(i), 0).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 4);
    assert_eq!(cache.retrieve(None, "key2").unwrap(), Some(json!(2)));
}
