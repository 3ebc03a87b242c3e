//! # plancache-core
//!
//! Core types for the plancache engine: the error taxonomy, the
//! capacity-limit model, shared constants, and tracing bootstrap.

pub mod constants;
pub mod errors;
pub mod limits;
pub mod trace;

pub use errors::CacheError;
pub use limits::CapacityLimit;
