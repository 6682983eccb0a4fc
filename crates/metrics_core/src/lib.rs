//! # metrics_core: Foundation for the divscore Metrics Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! metrics_core is the bottom layer of the engine, providing:
//! - The `InvalidDomain` error taxonomy: [`DomainError`] (`types::error`)
//! - Shared constraint checks used by every formula group (`validation`)
//! - Descriptive statistics over historical series (`math::stats`)
//! - Immutable market defaults: [`MarketAssumptions`] (`types::assumptions`)
//! - Scalar and structured metric outputs: [`MetricResult`] (`types::result`)
//! - The [`Breakdown`] trait and the `Float` re-export (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other divscore crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use metrics_core::validation::{checked_ratio, ensure_return_exceeds_growth};
//! use metrics_core::types::DomainError;
//!
//! let coverage = checked_ratio(5.0_f64, 2.5, "dividend_per_share").unwrap();
//! assert_eq!(coverage, 2.0);
//!
//! let err = ensure_return_exceeds_growth(0.04_f64, 0.05).unwrap_err();
//! assert!(matches!(err, DomainError::ReturnNotAboveGrowth { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for assumptions and metric results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
pub mod validation;

pub use traits::Breakdown;
pub use types::{DomainError, MarketAssumptions, MetricRecord, MetricResult};
