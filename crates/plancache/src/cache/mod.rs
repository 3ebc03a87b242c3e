//! The cache engine: entry storage, the recency list, the bounded-insertion
//! core, and read-only diagnostics.

pub mod core;
pub mod diagnostics;
mod entry;
mod recency;

pub use self::core::PlanCache;

#[cfg(test)]
pub(crate) mod testing {
    use crate::plan::{PlanHandle, PlanKey, PlanMemory, Precision, SharedPlan, TransformKind};
    use smallvec::SmallVec;
    use std::sync::Arc;

    /// Stand-in plan reporting a fixed footprint.
    pub(crate) struct FakePlan {
        pub(crate) segments: SmallVec<[u64; 4]>,
        pub(crate) label: &'static str,
    }

    impl PlanHandle for FakePlan {
        fn memory(&self) -> PlanMemory {
            match self.segments.len() {
                0 => PlanMemory::None,
                1 => PlanMemory::WorkArea(self.segments[0]),
                _ => PlanMemory::WorkAreas(self.segments.clone()),
            }
        }

        fn kind_label(&self) -> &'static str {
            self.label
        }
    }

    pub(crate) fn plan(bytes: u64) -> SharedPlan {
        Arc::new(FakePlan {
            segments: if bytes == 0 {
                SmallVec::new()
            } else {
                SmallVec::from_slice(&[bytes])
            },
            label: "plan1d",
        })
    }

    pub(crate) fn key(n: usize) -> PlanKey {
        PlanKey::new(
            [n, 64],
            TransformKind::ComplexToComplex,
            Precision::Single,
            1,
            0,
        )
    }
}
