//! Error taxonomy for the plan cache.
//!
//! Every variant is an ordinary recoverable condition: validation happens
//! before any mutation, so a failed call leaves the cache unchanged.

use thiserror::Error;

/// Errors surfaced by the plan cache and its accessor functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    /// A capacity limit below -1 was supplied.
    #[error("invalid capacity limit {value}: must be -1 (unbounded), 0 (disabled), or positive")]
    InvalidConfiguration { value: i64 },

    /// A single candidate plan exceeds the configured memory limit on its own.
    /// The cache is left untouched; callers may retry with adjusted limits.
    #[error("plan footprint {footprint} exceeds the memory limit {limit}")]
    ItemTooLarge { footprint: u64, limit: u64 },

    /// Lookup miss.
    #[error("no cached plan for the requested key")]
    NotFound,

    /// An accessor was invoked before a cache existed for the calling thread.
    #[error("plan cache not initialized for this thread")]
    NotInitialized,

    /// Diagnostics encountered a plan kind outside the known set.
    #[error("unrecognized plan kind `{label}`")]
    UnrecognizedKind { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = CacheError::InvalidConfiguration { value: -3 };
        assert!(err.to_string().contains("-3"));

        let err = CacheError::ItemTooLarge {
            footprint: 11,
            limit: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("11") && msg.contains("10"));

        let err = CacheError::UnrecognizedKind {
            label: "mystery".to_string(),
        };
        assert!(err.to_string().contains("mystery"));
    }
}
