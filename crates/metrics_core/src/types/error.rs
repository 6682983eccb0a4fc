//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: The `InvalidDomain` condition raised when a formula is
//!   evaluated outside the region where it is defined

use thiserror::Error;

/// `InvalidDomain` errors raised by the metrics engine.
///
/// Every variant describes an input combination for which the requested
/// formula has no financially meaningful value. The engine never recovers
/// from these internally; they are surfaced unchanged to the caller.
///
/// # Variants
/// - `ZeroDenominator`: A ratio's denominator is zero and no fallback exists
/// - `ReturnNotAboveGrowth`: A discount model's required return does not
///   strictly exceed its (terminal) growth rate
/// - `LengthMismatch`: Two sequences aggregated pairwise differ in length
/// - `NonPositiveLogBase`: A logarithm base is zero or negative
/// - `NonAscendingThresholds`: Waterfall tier thresholds are not strictly increasing
/// - `PeriodsOutOfRange`: A period count is too large to use as an exponent
///
/// # Examples
/// ```
/// use metrics_core::types::DomainError;
///
/// let err = DomainError::ZeroDenominator { quantity: "current_price" };
/// assert_eq!(format!("{}", err), "Invalid domain: current_price is zero");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A ratio's denominator is zero.
    #[error("Invalid domain: {quantity} is zero")]
    ZeroDenominator {
        /// Name of the quantity used as denominator
        quantity: &'static str,
    },

    /// Required return does not strictly exceed the growth rate.
    #[error(
        "Invalid domain: required return {required_return} must exceed growth rate {growth_rate}"
    )]
    ReturnNotAboveGrowth {
        /// Required (discount) rate of return
        required_return: f64,
        /// Perpetual growth rate the model was asked to capitalise
        growth_rate: f64,
    },

    /// Two pairwise-aggregated sequences differ in length.
    #[error("Invalid domain: {left} has {left_len} values but {right} has {right_len}")]
    LengthMismatch {
        /// Name of the first sequence
        left: &'static str,
        /// Length of the first sequence
        left_len: usize,
        /// Name of the second sequence
        right: &'static str,
        /// Length of the second sequence
        right_len: usize,
    },

    /// Logarithm base is not positive.
    #[error("Invalid domain: logarithm base {base} must be positive")]
    NonPositiveLogBase {
        /// The offending base
        base: f64,
    },

    /// Tier thresholds are not strictly ascending.
    #[error("Invalid domain: threshold {value} at index {index} does not exceed its predecessor")]
    NonAscendingThresholds {
        /// Index of the first threshold breaking the ordering
        index: usize,
        /// Threshold value at that index
        value: f64,
    },

    /// A period count (or the sum of consecutive stages) exceeds `i32::MAX`.
    #[error("Invalid domain: {quantity} of {periods} periods exceeds the maximum of {max}", max = i32::MAX)]
    PeriodsOutOfRange {
        /// Name of the period count
        quantity: &'static str,
        /// Requested number of periods
        periods: u64,
    },
}

impl DomainError {
    /// Name of the `InvalidDomain` condition, shared by every variant.
    pub const CONDITION: &'static str = "InvalidDomain";

    /// Returns the condition name reported to callers.
    #[inline]
    pub fn condition(&self) -> &'static str {
        Self::CONDITION
    }
}
