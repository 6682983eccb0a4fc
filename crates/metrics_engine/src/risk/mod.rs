//! Risk-adjusted return metrics.
//!
//! This module provides:
//! - Holding-period and annualised total return
//! - CAPM cost of equity and the market-value-weighted WACC
//! - Sharpe, Treynor and Sortino ratios with downside deviation
//!
//! Market-wide inputs (risk-free rate, expected market return, statutory tax
//! rate) come from [`MarketAssumptions`](metrics_core::MarketAssumptions)
//! rather than module state.

pub mod capital;
pub mod performance;
pub mod returns;

pub use capital::{cost_of_equity, weighted_average_cost_of_capital, WaccBreakdown, WaccInputs};
pub use performance::{downside_deviation, sharpe_ratio, sortino_ratio, treynor_ratio, TargetReturn};
pub use returns::{annualized_return, daily_risk_free_rate, total_return};
