//! Capacity limits as a tagged tri-state instead of a sentinel integer.
//!
//! The external surface speaks the legacy convention (-1 unbounded,
//! 0 disabled, n bounded); internally every branch on a limit is
//! exhaustive over the three states.

use serde::{Deserialize, Serialize};

use crate::errors::CacheError;

/// One axis of cache capacity: entry count or aggregate memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CapacityLimit {
    /// No constraint on this axis.
    Unbounded,
    /// Exactly zero: this axis disables the cache entirely.
    Disabled,
    /// A positive cap.
    Bounded(u64),
}

impl CapacityLimit {
    /// Parse the legacy integer convention. Values below -1 are rejected.
    pub fn from_raw(value: i64) -> Result<Self, CacheError> {
        match value {
            -1 => Ok(Self::Unbounded),
            0 => Ok(Self::Disabled),
            n if n > 0 => Ok(Self::Bounded(n as u64)),
            _ => Err(CacheError::InvalidConfiguration { value }),
        }
    }

    /// Render back into the legacy integer convention.
    pub fn as_raw(self) -> i64 {
        match self {
            Self::Unbounded => -1,
            Self::Disabled => 0,
            Self::Bounded(n) => n as i64,
        }
    }

    /// True iff this axis shuts the cache off.
    #[inline]
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// The cap, when one exists.
    #[inline]
    pub fn bound(self) -> Option<u64> {
        match self {
            Self::Bounded(n) => Some(n),
            _ => None,
        }
    }

    /// Whether `usage` plus an incoming `increment` would stay within this
    /// axis. Unbounded always admits; Disabled never does.
    #[inline]
    pub fn admits(self, usage: u64, increment: u64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Disabled => false,
            Self::Bounded(cap) => usage + increment <= cap,
        }
    }
}
