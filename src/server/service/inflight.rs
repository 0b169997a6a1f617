//! Per-corporation in-flight locks for cache misses.
//!
//! Concurrent misses for the same corporation ID queue on one lock so only the first caller
//! fetches from ESI, the others re-check the cache once it is released.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Default)]
pub struct InflightLocks {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl InflightLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the lock of `id`.
    ///
    /// The lock is released when the returned guard is dropped. The map entry is removed by
    /// the last holder or waiter, including a waiter whose future is dropped before it got
    /// the lock, so the map only grows with IDs currently being fetched.
    pub async fn acquire(&self, id: i64) -> InflightGuard {
        let lock = self.locks.entry(id).or_default().clone();
        let entry = EntryCleanup {
            id,
            locks: Arc::clone(&self.locks),
        };

        let held = lock.lock_owned().await;

        InflightGuard {
            _held: held,
            _entry: entry,
        }
    }

    /// Number of IDs with a pending or held lock.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Holds the lock of one ID until dropped.
pub struct InflightGuard {
    // Fields drop in order: the lock is released before the entry is cleaned up
    _held: OwnedMutexGuard<()>,
    _entry: EntryCleanup,
}

/// Removes the map entry of `id` once nothing holds or waits for its lock.
struct EntryCleanup {
    id: i64,
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl Drop for EntryCleanup {
    fn drop(&mut self) {
        // Only the map still references the lock: nobody holds or waits for it
        self.locks
            .remove_if(&self.id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
