//! Read-only diagnostics: invariant validation and a serializable snapshot
//! of the cache, entries enumerated from least to most recently used.

use std::fmt;

use serde::Serialize;

use plancache_core::{CacheError, CapacityLimit};

use super::core::PlanCache;
use crate::plan::{PlanKey, PlanKind};

/// One entry in a [`CacheReport`], in recency order.
#[derive(Clone, Debug, Serialize)]
pub struct EntryReport {
    pub key: PlanKey,
    pub kind: PlanKind,
    pub footprint: u64,
}

/// Point-in-time snapshot of a cache: configuration, usage, hit/miss
/// counters, and entries from least to most recently used.
#[derive(Clone, Debug, Serialize)]
pub struct CacheReport {
    pub enabled: bool,
    pub max_count: CapacityLimit,
    pub max_memory: CapacityLimit,
    pub current_count: u64,
    pub current_memory: u64,
    pub hits: u64,
    pub misses: u64,
    pub entries: Vec<EntryReport>,
}

impl PlanCache {
    /// Validate the structural invariants and build a [`CacheReport`].
    ///
    /// Read-only: recency order is not altered. A violated structural
    /// invariant is internal corruption and panics; the only recoverable
    /// failure is a plan whose kind label falls outside the known set.
    pub fn report(&self) -> Result<CacheReport, CacheError> {
        assert_eq!(
            self.index.len(),
            self.list.len(),
            "key index and recency list disagree on entry count"
        );
        assert_eq!(
            self.list.len() as u64,
            self.current_count,
            "recency list and usage counter disagree on entry count"
        );
        if let Some(cap) = self.max_count.bound() {
            assert!(self.current_count <= cap, "count limit violated");
        }
        if let Some(cap) = self.max_memory.bound() {
            assert!(self.current_memory <= cap, "memory limit violated");
        }

        let mut entries = Vec::with_capacity(self.list.len());
        for entry in self.list.iter() {
            entries.push(EntryReport {
                key: entry.key.clone(),
                kind: PlanKind::classify(entry.plan.kind_label())?,
                footprint: entry.footprint,
            });
        }

        Ok(CacheReport {
            enabled: self.is_enabled(),
            max_count: self.max_count,
            max_memory: self.max_memory,
            current_count: self.current_count,
            current_memory: self.current_memory,
            hits: self.hits,
            misses: self.misses,
            entries,
        })
    }
}

fn fmt_limit(limit: CapacityLimit, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match limit {
        CapacityLimit::Unbounded => write!(f, "unbounded"),
        CapacityLimit::Disabled => write!(f, "disabled"),
        CapacityLimit::Bounded(n) => write!(f, "{n}"),
    }
}

impl fmt::Display for CacheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plan cache (enabled: {}, count: {}/",
            self.enabled, self.current_count
        )?;
        fmt_limit(self.max_count, f)?;
        write!(f, ", memory: {}/", self.current_memory)?;
        fmt_limit(self.max_memory, f)?;
        writeln!(f, ", hits: {}, misses: {})", self.hits, self.misses)?;
        for (pos, entry) in self.entries.iter().enumerate() {
            writeln!(
                f,
                "  [{pos}] key={:?} kind={:?} footprint={}",
                entry.key, entry.kind, entry.footprint
            )?;
        }
        Ok(())
    }
}
