//! # plancache
//!
//! Bounded cache for expensive, precomputed transform plans.
//! Plans are keyed by their construction parameters; repeated requests
//! reuse a previously built plan instead of reconstructing it. The cache
//! enforces an optional entry-count limit and an optional aggregate
//! memory limit, evicting least-recently-used entries to satisfy both.
//!
//! A cache instance is single-threaded by design; the [`context`] module
//! resolves one instance per thread so instances never contend.

pub mod cache;
pub mod context;
pub mod plan;

pub use cache::diagnostics::{CacheReport, EntryReport};
pub use cache::PlanCache;
pub use plan::{PlanHandle, PlanKey, PlanKind, PlanMemory, Precision, SharedPlan, TransformKind};
pub use plancache_core::{CacheError, CapacityLimit};
