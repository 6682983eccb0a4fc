//! Core error, assumption, and result types.
//!
//! This module provides:
//! - `error`: The `InvalidDomain` taxonomy shared by all formula groups
//! - `assumptions`: Immutable, per-call overridable market defaults
//! - `result`: Scalar and structured metric outputs
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DomainError`] from `error`
//! - [`MarketAssumptions`] from `assumptions`
//! - [`MetricResult`], [`MetricRecord`] from `result`

pub mod assumptions;
pub mod error;
pub mod result;

pub use assumptions::MarketAssumptions;
pub use error::DomainError;
pub use result::{MetricRecord, MetricResult};
