//! Bounded result cache.
//!
//! Repeated "board X at generation N" queries are common — a client
//! polling a paused board re-asks the same question — so computed grids
//! are kept in a small least-recently-used cache keyed by board identity
//! plus generation. The cache is a latency optimization only: a miss is
//! always resolvable by recomputation through the jumper.
//!
//! The cache is the one shared mutable structure in this crate. A single
//! interior mutex makes "get + recency refresh" and "put + evict" atomic,
//! so concurrent callers never observe a partially updated entry.

use std::collections::VecDeque;
use std::sync::Mutex;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardId, Grid};

/// Default entry capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Cache key: which board, at which generation.
///
/// The same generation number means different states on different boards,
/// so the board identity is always part of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// The owning board.
    pub board: BoardId,

    /// The requested generation.
    pub generation: u64,
}

impl CacheKey {
    /// Create a key.
    #[must_use]
    pub fn new(board: BoardId, generation: u64) -> Self {
        Self { board, generation }
    }
}

struct CacheInner {
    map: FxHashMap<CacheKey, Grid>,
    // Front = least recently used. Tens of entries, so the linear key
    // scan on refresh is cheaper than a linked structure would be.
    order: VecDeque<CacheKey>,
    capacity: usize,
}

impl CacheInner {
    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        self.order.push_back(*key);
    }
}

/// Capacity-limited LRU cache of computed grids.
///
/// Safe to share between threads; both reads and writes refresh recency.
pub struct ResultCache {
    inner: Mutex<CacheInner>,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                map: FxHashMap::default(),
                order: VecDeque::new(),
                capacity: capacity.max(1),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // A poisoning panic cannot leave these two collections out of
        // step with each other, so keep serving rather than propagating.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Look up a computed grid, refreshing its recency on a hit.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Grid> {
        let mut inner = self.lock();
        let grid = inner.map.get(key).cloned()?;
        inner.touch(key);
        Some(grid)
    }

    /// Insert or replace a computed grid, evicting the least recently
    /// used entry once over capacity.
    pub fn put(&self, key: CacheKey, grid: Grid) {
        let mut inner = self.lock();
        inner.map.insert(key, grid);
        inner.touch(&key);

        while inner.map.len() > inner.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            } else {
                break;
            }
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().map.is_empty()
    }

    /// The configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
