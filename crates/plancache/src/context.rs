//! Per-thread cache resolution and the module-level accessor surface.
//!
//! Each thread gets exactly one `PlanCache`, created lazily on first
//! resolve with the default configuration. Instances are never shared
//! across threads, so the cache itself needs no locking. Replacing a
//! thread's cache is allowed but warned about, since it silently discards
//! previously cached plans.

use std::cell::RefCell;

use tracing::warn;

use plancache_core::{CacheError, CapacityLimit};

use crate::cache::PlanCache;

thread_local! {
    static CURRENT: RefCell<Option<PlanCache>> = const { RefCell::new(None) };
}

/// Resolve the calling thread's cache, creating it with the default
/// configuration on first use, and run `f` against it.
pub fn with_plan_cache<R>(f: impl FnOnce(&mut PlanCache) -> R) -> R {
    CURRENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let cache = slot.get_or_insert_with(PlanCache::default);
        f(cache)
    })
}

/// Run `f` against the calling thread's cache, failing with
/// `NotInitialized` if none exists yet. Never creates a cache.
pub fn try_with_plan_cache<R>(f: impl FnOnce(&mut PlanCache) -> R) -> Result<R, CacheError> {
    CURRENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_mut() {
            Some(cache) => Ok(f(cache)),
            None => Err(CacheError::NotInitialized),
        }
    })
}

/// Install `cache` as the calling thread's instance. Replacing an existing
/// instance is permitted but discards its cached plans, so it warns.
pub fn replace_plan_cache(cache: PlanCache) {
    CURRENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            warn!("replacing this thread's plan cache; previously cached plans are discarded");
        }
        *slot = Some(cache);
    });
}

/// Tear down the calling thread's cache. Returns whether one existed.
pub fn teardown_plan_cache() -> bool {
    CURRENT.with(|slot| slot.borrow_mut().take().is_some())
}

/// Whether the calling thread already has a cache.
pub fn is_initialized() -> bool {
    CURRENT.with(|slot| slot.borrow().is_some())
}

/// Current count limit, in the legacy integer convention.
pub fn get_count_limit() -> Result<i64, CacheError> {
    try_with_plan_cache(|cache| cache.count_limit().as_raw())
}

/// Set the count limit: -1 unbounded, 0 disabled, n bounded.
pub fn set_count_limit(raw: i64) -> Result<(), CacheError> {
    let limit = CapacityLimit::from_raw(raw)?;
    try_with_plan_cache(|cache| cache.set_count_limit(limit))
}

/// Current memory limit, in the legacy integer convention.
pub fn get_memory_limit() -> Result<i64, CacheError> {
    try_with_plan_cache(|cache| cache.memory_limit().as_raw())
}

/// Set the memory limit: -1 unbounded, 0 disabled, m bounded.
pub fn set_memory_limit(raw: i64) -> Result<(), CacheError> {
    let limit = CapacityLimit::from_raw(raw)?;
    try_with_plan_cache(|cache| cache.set_memory_limit(limit))
}

/// Drop every entry in the calling thread's cache; limits are preserved.
pub fn clear() -> Result<(), CacheError> {
    try_with_plan_cache(|cache| cache.clear())
}
