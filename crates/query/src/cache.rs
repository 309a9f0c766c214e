//! Bounded LRU memoization cache
//!
//! This module provides the explicit cache component backing the query
//! normalizer's memoization contract:
//! - fixed capacity, least-recently-used eviction
//! - thread-safe (mutex held only for O(log n) table operations)
//! - hit/miss instrumentation for monitoring and tests
//!
//! Eviction is silent and invisible to correctness: a cache miss recomputes
//! the value. Capacity zero disables storage entirely.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of cache usage counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a cached value
    pub hits: u64,
    /// Lookups that missed
    pub misses: u64,
    /// Entries currently stored
    pub len: usize,
    /// Maximum entries before eviction
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in [0.0, 1.0]; 0.0 when no lookups happened yet
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct Entry<V> {
    value: V,
    tick: u64,
}

struct LruState<K, V> {
    entries: FxHashMap<K, Entry<V>>,
    /// Recency order: tick → key, oldest first. Ticks are unique.
    order: BTreeMap<u64, K>,
    next_tick: u64,
}

/// Thread-safe bounded cache with least-recently-used eviction
///
/// # Thread Safety
///
/// All operations lock a single `parking_lot::Mutex` for the duration of a
/// map update only; values are cloned out, so the lock is never held across
/// caller code.
pub struct LruCache<K, V> {
    state: Mutex<LruState<K, V>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        LruCache {
            state: Mutex::new(LruState {
                entries: FxHashMap::default(),
                order: BTreeMap::new(),
                next_tick: 0,
            }),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a value, refreshing its recency on hit
    pub fn get(&self, key: &K) -> Option<V> {
        let mut state = self.state.lock();
        let tick = state.next_tick;
        state.next_tick += 1;

        let found = state.entries.get_mut(key).map(|entry| {
            let old_tick = entry.tick;
            entry.tick = tick;
            (entry.value.clone(), old_tick)
        });

        match found {
            Some((value, old_tick)) => {
                state.order.remove(&old_tick);
                state.order.insert(tick, key.clone());
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert a value, evicting the least-recently-used entry when full
    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        let mut state = self.state.lock();
        let tick = state.next_tick;
        state.next_tick += 1;

        let replaced = state.entries.get_mut(&key).map(|entry| {
            let old_tick = entry.tick;
            entry.value = value.clone();
            entry.tick = tick;
            old_tick
        });
        if let Some(old_tick) = replaced {
            state.order.remove(&old_tick);
            state.order.insert(tick, key);
            return;
        }

        if state.entries.len() >= self.capacity {
            if let Some((_, oldest_key)) = state.order.pop_first() {
                state.entries.remove(&oldest_key);
            }
        }

        state.order.insert(tick, key.clone());
        state.entries.insert(key, Entry { value, tick });
    }

    /// Look up or compute-and-store a value
    ///
    /// The compute closure runs outside the lock, so concurrent callers may
    /// compute the same value twice; last insert wins. Acceptable because
    /// cached computations are pure.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    /// Entries currently stored
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum entries before eviction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries and reset counters
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Snapshot current usage counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: self.len(),
            capacity: self.capacity,
        }
    }
}
