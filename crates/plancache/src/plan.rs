//! The plan contract: what the cache requires of the objects it stores.
//!
//! The cache never constructs a plan. It stores opaque handles, trusts the
//! memory footprint each handle reports, and reads a kind label for
//! diagnostic classification.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use plancache_core::CacheError;

/// Memory usage reported by a plan: nothing, a single work area, or an
/// ordered collection of work areas (multi-resource plans).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanMemory {
    /// The plan allocated no device memory.
    None,
    /// A single work area of the given byte size.
    WorkArea(u64),
    /// One work area per resource; footprint is the sum.
    WorkAreas(SmallVec<[u64; 4]>),
}

impl PlanMemory {
    /// Aggregate footprint in bytes.
    pub fn footprint(&self) -> u64 {
        match self {
            Self::None => 0,
            Self::WorkArea(bytes) => *bytes,
            Self::WorkAreas(areas) => areas.iter().sum(),
        }
    }
}

/// Capability contract for cacheable plans.
///
/// Collaborators expose a memory descriptor (read once, at insertion) and
/// a kind label used purely for diagnostic classification.
pub trait PlanHandle {
    /// The plan's memory usage descriptor.
    fn memory(&self) -> PlanMemory;

    /// Identity tag for diagnostics, matched against the known kinds.
    fn kind_label(&self) -> &'static str;
}

/// Shared handle to a cached plan. The cache holds one reference until
/// eviction; callers may keep their own, and eviction never invalidates it.
pub type SharedPlan = Arc<dyn PlanHandle>;

/// The closed set of plan kinds diagnostics know how to label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanKind {
    /// Single-axis transform plan.
    Plan1d,
    /// Multi-axis transform plan.
    PlanNd,
}

impl PlanKind {
    /// Label emitted by conforming plan handles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Plan1d => "plan1d",
            Self::PlanNd => "plannd",
        }
    }

    /// Classify a handle's label into the known set.
    pub fn classify(label: &str) -> Result<Self, CacheError> {
        match label {
            "plan1d" => Ok(Self::Plan1d),
            "plannd" => Ok(Self::PlanNd),
            other => Err(CacheError::UnrecognizedKind {
                label: other.to_string(),
            }),
        }
    }
}

/// Transform flavor, part of the plan key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    ComplexToComplex,
    RealToComplex,
    ComplexToReal,
}

/// Numeric precision, part of the plan key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precision {
    Single,
    Double,
}

/// Construction parameters that uniquely determine a plan.
///
/// Equality and hashing are structural; callers are responsible for
/// building equal keys for equivalent plans.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanKey {
    /// Transform shape, one extent per axis.
    pub shape: SmallVec<[usize; 3]>,
    pub transform: TransformKind,
    pub precision: Precision,
    /// Number of transforms executed per invocation.
    pub batch: usize,
    /// Device ordinal the plan was built for.
    pub device: u32,
}

impl PlanKey {
    pub fn new(
        shape: impl IntoIterator<Item = usize>,
        transform: TransformKind,
        precision: Precision,
        batch: usize,
        device: u32,
    ) -> Self {
        Self {
            shape: shape.into_iter().collect(),
            transform,
            precision,
            batch,
            device,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_footprint_none_is_zero() {
        assert_eq!(PlanMemory::None.footprint(), 0);
    }

    #[test]
    fn test_footprint_sums_work_areas() {
        let mem = PlanMemory::WorkAreas(smallvec![128, 256, 64]);
        assert_eq!(mem.footprint(), 448);
        assert_eq!(PlanMemory::WorkArea(512).footprint(), 512);
    }

    #[test]
    fn test_classify_known_kinds() {
        assert_eq!(PlanKind::classify("plan1d"), Ok(PlanKind::Plan1d));
        assert_eq!(PlanKind::classify("plannd"), Ok(PlanKind::PlanNd));
    }

    #[test]
    fn test_classify_unknown_kind_fails() {
        let err = PlanKind::classify("plan42").unwrap_err();
        assert_eq!(
            err,
            CacheError::UnrecognizedKind {
                label: "plan42".to_string()
            }
        );
    }

    #[test]
    fn test_key_equality_is_structural() {
        let a = PlanKey::new([64, 64], TransformKind::ComplexToComplex, Precision::Single, 1, 0);
        let b = PlanKey::new([64, 64], TransformKind::ComplexToComplex, Precision::Single, 1, 0);
        let c = PlanKey::new([64, 64], TransformKind::ComplexToComplex, Precision::Double, 1, 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
