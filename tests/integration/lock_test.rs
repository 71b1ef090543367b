// MemoryLock integration tests
use pip_components::{ComponentError, Lock, MemoryLock};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_mutual_exclusion() {
    let lock = MemoryLock::new();

    assert!(lock.try_acquire_lock(None, "k", 1000).unwrap());
    assert!(!lock.try_acquire_lock(None, "k", 1000).unwrap());

    lock.release_lock(None, "k").unwrap();
    assert!(lock.try_acquire_lock(None, "k", 1000).unwrap());
}

#[test]
fn test_acquire_times_out() {
    let lock = MemoryLock::with_retry_timeout(10);
    lock.try_acquire_lock(None, "k", 10_000).unwrap();

    let started = Instant::now();
    let err = lock.acquire_lock(Some("123"), "k", 1000, 50).unwrap_err();

    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(err, ComponentError::lock_timeout(Some("123"), "k"));
}

#[test]
fn test_acquire_waits_for_release() {
    let lock = Arc::new(MemoryLock::with_retry_timeout(10));
    lock.try_acquire_lock(None, "k", 10_000).unwrap();

    let holder = Arc::clone(&lock);
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        holder.release_lock(None, "k").unwrap();
    });

    lock.acquire_lock(None, "k", 1000, 2000).unwrap();
    handle.join().unwrap();
    assert!(lock.is_locked("k"));
}

#[test]
fn test_only_one_thread_wins() {
    let lock = Arc::new(MemoryLock::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let lock = Arc::clone(&lock);
            thread::spawn(move || lock.try_acquire_lock(None, "shared", 10_000).unwrap())
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|acquired| *acquired)
        .count();
    assert_eq!(winners, 1);
}
