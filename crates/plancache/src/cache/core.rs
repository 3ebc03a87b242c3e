//! The bounded-insertion core: key index + recency list + dual limits.
//!
//! A `PlanCache` reconciles two independent, optional capacity constraints
//! (entry count and aggregate memory footprint) by evicting least recently
//! used entries. Either a mutating call fully succeeds with a consistent
//! cache, or it fails before any mutation.

use rustc_hash::FxHashMap;
use tracing::debug;

use plancache_core::constants::{DEFAULT_COUNT_LIMIT, DEFAULT_MEMORY_LIMIT};
use plancache_core::{CacheError, CapacityLimit};

use super::entry::PlanEntry;
use super::recency::{NodeIndex, RecencyList};
use crate::plan::{PlanKey, SharedPlan};

/// LRU cache for transform plans, bounded by entry count and by aggregate
/// memory footprint. Single-threaded by design; see [`crate::context`] for
/// the one-instance-per-thread policy.
pub struct PlanCache {
    pub(crate) index: FxHashMap<PlanKey, NodeIndex>,
    pub(crate) list: RecencyList<PlanEntry>,
    pub(crate) max_count: CapacityLimit,
    pub(crate) max_memory: CapacityLimit,
    pub(crate) current_count: u64,
    pub(crate) current_memory: u64,
    pub(crate) hits: u64,
    pub(crate) misses: u64,
}

impl PlanCache {
    pub fn new(max_count: CapacityLimit, max_memory: CapacityLimit) -> Self {
        Self {
            index: FxHashMap::default(),
            list: RecencyList::new(),
            max_count,
            max_memory,
            current_count: 0,
            current_memory: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// The cache is disabled iff either limit is exactly zero, even when
    /// the other axis is unbounded. A disabled cache holds no entries.
    pub fn is_enabled(&self) -> bool {
        !(self.max_count.is_disabled() || self.max_memory.is_disabled())
    }

    pub fn count_limit(&self) -> CapacityLimit {
        self.max_count
    }

    pub fn memory_limit(&self) -> CapacityLimit {
        self.max_memory
    }

    pub fn current_count(&self) -> u64 {
        self.current_count
    }

    pub fn current_memory(&self) -> u64 {
        self.current_memory
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Look up a plan, promoting it to most recently used on a hit.
    ///
    /// This is the only read path that updates recency. A disabled cache
    /// holds no entries, so the lookup misses with no side effect.
    pub fn get(&mut self, key: &PlanKey) -> Result<SharedPlan, CacheError> {
        if !self.is_enabled() {
            return Err(CacheError::NotFound);
        }
        match self.index.get(key) {
            Some(&idx) => {
                self.list.promote(idx);
                self.hits += 1;
                Ok(self.list.get(idx).plan.clone())
            }
            None => {
                self.misses += 1;
                Err(CacheError::NotFound)
            }
        }
    }

    /// Convenience lookup: returns `default` instead of failing when the
    /// cache is disabled or the key is absent. Promotes on a hit.
    pub fn get_or(&mut self, key: &PlanKey, default: Option<SharedPlan>) -> Option<SharedPlan> {
        match self.get(key) {
            Ok(plan) => Some(plan),
            Err(_) => default,
        }
    }

    /// Insert a plan under `key`, evicting least recently used entries
    /// until both limits admit it.
    ///
    /// Fails with `ItemTooLarge` (cache unchanged) when the candidate's
    /// footprint alone exceeds a bounded memory limit. Inserting under an
    /// existing key replaces the old entry. No-op when disabled.
    pub fn put(&mut self, key: PlanKey, plan: SharedPlan) -> Result<(), CacheError> {
        if !self.is_enabled() {
            return Ok(());
        }

        let entry = PlanEntry::new(key, plan);
        let footprint = entry.footprint;
        if let Some(limit) = self.max_memory.bound() {
            if footprint > limit {
                return Err(CacheError::ItemTooLarge { footprint, limit });
            }
        }

        // Replace-under-same-key: unlink the old entry and release its
        // usage first. Its index slot is overwritten when the new entry is
        // installed, so the map stays single-source-of-truth throughout.
        if let Some(&old_idx) = self.index.get(&entry.key) {
            let old = self.list.remove(old_idx);
            self.current_count -= 1;
            self.current_memory -= old.footprint;
        }

        // Evict from the LRU end until the projected occupancy after
        // insertion satisfies both limits. The loop stops on an empty list;
        // the size check above guarantees the candidate alone fits.
        while !(self.max_count.admits(self.current_count, 1)
            && self.max_memory.admits(self.current_memory, footprint))
        {
            if !self.evict_least_recent() {
                break;
            }
        }

        let key = entry.key.clone();
        let idx = self.list.push_most_recent(entry);
        self.index.insert(key, idx);
        self.current_count += 1;
        self.current_memory += footprint;
        Ok(())
    }

    /// Change the entry-count limit, evicting LRU entries first so the new
    /// limit already holds when it is committed. A `Disabled` limit drains
    /// the cache entirely.
    pub fn set_count_limit(&mut self, limit: CapacityLimit) {
        while !limit.admits(self.current_count, 0) {
            if !self.evict_least_recent() {
                break;
            }
        }
        self.max_count = limit;
    }

    /// Change the memory limit; same eviction-then-commit discipline as
    /// [`Self::set_count_limit`].
    pub fn set_memory_limit(&mut self, limit: CapacityLimit) {
        while !limit.admits(self.current_memory, 0) {
            if !self.evict_least_recent() {
                break;
            }
        }
        self.max_memory = limit;
    }

    /// Drop every entry and zero the usage counters. Limits are preserved.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.current_count = 0;
        self.current_memory = 0;
    }

    /// Remove the least recently used entry, releasing its usage.
    /// Returns false when the cache is already empty.
    fn evict_least_recent(&mut self) -> bool {
        let Some(idx) = self.list.least_recent() else {
            return false;
        };
        let entry = self.list.remove(idx);
        self.index.remove(&entry.key);
        self.current_count -= 1;
        self.current_memory -= entry.footprint;
        debug!(
            key = ?entry.key,
            footprint = entry.footprint,
            "evicted least recently used plan"
        );
        true
    }
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT_LIMIT, DEFAULT_MEMORY_LIMIT)
    }
}
