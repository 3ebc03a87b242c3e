//! Shared constants for the plancache engine.

use crate::limits::CapacityLimit;

/// Default count limit for a lazily created per-thread cache.
pub const DEFAULT_COUNT_LIMIT: CapacityLimit = CapacityLimit::Bounded(16);

/// Default memory limit for a lazily created per-thread cache.
pub const DEFAULT_MEMORY_LIMIT: CapacityLimit = CapacityLimit::Unbounded;
