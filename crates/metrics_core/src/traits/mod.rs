//! Core traits shared across formula groups.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Aggregate-plus-components exposure for composite metrics (`Breakdown` trait)

pub mod breakdown;

pub use breakdown::Breakdown;

/// Generic floating-point trait for numeric computations.
///
/// Closed-form kernels are written against this trait so they evaluate in
/// `f64` as well as `f32`.
///
/// # Examples
/// ```
/// use metrics_core::traits::Float;
///
/// fn discount<T: Float>(amount: T, rate: T, periods: i32) -> T {
///     amount / (T::one() + rate).powi(periods)
/// }
///
/// let pv: f64 = discount(110.0, 0.10, 1);
/// assert!((pv - 100.0).abs() < 1e-10);
/// ```
pub use num_traits::Float;
