//! # Resolution Cache Module
//!
//! Time-bounded cache for AI-fallback substitution results, keyed by
//! canonical (normalized) ingredient name. This is the only mutable
//! state in the engine; it lives in a sharded concurrent map so any
//! number of request tasks can hit it without a global lock.
//!
//! Entries are created only when the fallback tier produces a result,
//! expire after their TTL, and are overwritten on refresh. An expired or
//! missing entry is a cache miss, never an error.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, trace};
use std::time::Duration;

use crate::substitution_model::SubstitutionCandidate;

/// One cached fallback result
#[derive(Debug, Clone)]
pub struct ResolutionCacheEntry {
    /// Canonical ingredient name this entry answers for
    pub key: String,
    /// Candidates as returned by the fallback, ranked at store time
    pub candidates: Vec<SubstitutionCandidate>,
    /// When the fallback produced this result
    pub fetched_at: DateTime<Utc>,
    /// Lifetime after which the entry is a miss
    pub ttl: Duration,
}

impl ResolutionCacheEntry {
    /// Whether the entry has outlived its TTL at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.fetched_at);
        match chrono::Duration::from_std(self.ttl) {
            Ok(ttl) => age >= ttl,
            // A TTL too large for chrono means the entry never expires
            Err(_) => false,
        }
    }
}

/// Concurrency-safe TTL cache for fallback resolution results
#[derive(Debug)]
pub struct ResolutionCache {
    entries: DashMap<String, ResolutionCacheEntry>,
    ttl: Duration,
}

impl ResolutionCache {
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Fetch a non-expired entry's candidates. Expired entries are
    /// dropped on the way out and reported as a miss.
    pub fn get_fresh(&self, key: &str) -> Option<Vec<SubstitutionCandidate>> {
        let now = Utc::now();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                trace!("cache hit for '{}'", key);
                return Some(entry.candidates.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            debug!("cache entry for '{}' expired", key);
            self.entries.remove(key);
        }
        None
    }

    /// Store a fallback result, overwriting any stale entry for the key
    pub fn store(&self, key: &str, candidates: Vec<SubstitutionCandidate>) {
        debug!("caching {} candidates for '{}'", candidates.len(), key);
        self.entries.insert(
            key.to_string(),
            ResolutionCacheEntry {
                key: key.to_string(),
                candidates,
                fetched_at: Utc::now(),
                ttl: self.ttl,
            },
        );
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
