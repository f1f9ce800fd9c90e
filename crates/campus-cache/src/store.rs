// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded TTL store for generated replies.
//!
//! Eviction is strictly by insertion order: once `max_entries` keys are held,
//! inserting a new key removes the oldest-inserted one. Reads do not affect
//! eviction order. Expired entries are removed lazily on read.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use campus_core::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// A cached reply.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub model: String,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<String>,
}

impl Inner {
    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}

/// Thread-safe response cache shared by all requests of a service.
pub struct ResponseCache {
    inner: Mutex<Inner>,
    ttl: TimeDelta,
    max_entries: usize,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    /// Create a cache. `max_entries` of zero is treated as one.
    pub fn new(ttl: Duration, max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            max_entries: max_entries.max(1),
            clock,
        }
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds consistent maps.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Look up `key`. An entry older than the TTL is deleted and reported as
    /// a miss.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let now = self.clock.now();
        let mut inner = self.lock();
        let created_at = inner.entries.get(key)?.created_at;
        if now - created_at > self.ttl {
            debug!(key, "cache entry expired");
            inner.remove(key);
            return None;
        }
        inner.entries.get(key).cloned()
    }

    /// Store `content` under `key`, stamped with the current time.
    ///
    /// Overwriting an existing key refreshes its timestamp but keeps its
    /// original insertion position.
    pub fn insert(
        &self,
        key: impl Into<String>,
        content: impl Into<String>,
        model: impl Into<String>,
    ) {
        let key = key.into();
        let entry = CacheEntry {
            content: content.into(),
            created_at: self.clock.now(),
            model: model.into(),
        };

        let mut inner = self.lock();
        if let Some(existing) = inner.entries.get_mut(&key) {
            *existing = entry;
            return;
        }

        while inner.entries.len() >= self.max_entries {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            debug!(key = %oldest, "evicting oldest cache entry");
            inner.entries.remove(&oldest);
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(key, entry);
    }

    /// Number of entries currently held, including not-yet-purged expired ones.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("len", &self.len())
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
