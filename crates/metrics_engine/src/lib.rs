//! # metrics_engine: Dividend Equity Scoring Formulas
//!
//! ## Layer 2 (Models) Role
//!
//! metrics_engine holds every formula used to score a dividend-paying equity.
//! Each function is stateless and side-effect free; callers compose them in
//! whatever order a request needs (for example AFFO before CAD).
//!
//! - `safety`: Dividend yields, coverage and payout ratios
//! - `growth`: Growth rates, Gordon / two-stage / three-stage DDM, yield on cost
//! - `quality`: Cash-flow quality, balance-sheet strength, ROIC durability and
//!   the economic moat scorer
//! - `risk`: CAPM, WACC, Sharpe / Sortino / Treynor, downside deviation
//! - `sector`: REIT, MLP (IDR waterfall) and utility metrics
//! - `valuation`: Yield-relative and dividend-adjusted valuation ratios
//! - `history`: Dividend track-record classification and trend analysis
//! - `screening`: Four-phase safety / quality / growth / valuation screen
//!
//! ## Usage Examples
//!
//! ```rust
//! use metrics_engine::growth::gordon_growth_model;
//! use metrics_engine::sector::mlp::idr_impact;
//!
//! let value = gordon_growth_model(2.10_f64, 0.09, 0.04).unwrap();
//! assert!((value - 42.0).abs() < 1e-9);
//!
//! let split = idr_impact(0.55);
//! assert!((split.lp_distribution - 0.5325).abs() < 1e-12);
//! ```
//!
//! ## Errors
//!
//! Every fallible function returns [`metrics_core::DomainError`], the
//! `InvalidDomain` condition. Degenerate-but-defined inputs (zero volatility,
//! zero beta, short histories) return documented sentinels instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod growth;
pub mod history;
pub mod quality;
pub mod risk;
pub mod safety;
pub mod screening;
pub mod sector;
pub mod valuation;

pub use metrics_core::{Breakdown, DomainError, MarketAssumptions, MetricRecord, MetricResult};

use num_traits::Float;

/// Converts an `f64` literal into the working float type.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
