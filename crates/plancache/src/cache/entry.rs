//! A cached plan plus the metadata the eviction engine needs.

use crate::plan::{PlanKey, SharedPlan};

/// One cache entry: immutable key, shared plan handle, and the footprint
/// computed once from the plan's memory descriptor. Recency links live in
/// the arena node that holds the entry, not here.
pub(crate) struct PlanEntry {
    pub(crate) key: PlanKey,
    pub(crate) plan: SharedPlan,
    pub(crate) footprint: u64,
}

impl PlanEntry {
    pub(crate) fn new(key: PlanKey, plan: SharedPlan) -> Self {
        let footprint = plan.memory().footprint();
        Self {
            key,
            plan,
            footprint,
        }
    }
}
