//! divscore: batch evaluation of dividend equity metrics
//!
//! Reads a JSON file of metric requests, evaluates each one with
//! `metrics_engine` and prints the results as JSON or as a table.
//!
//! # Commands
//!
//! - `divscore eval --input <file>` - Evaluate a file of metric requests
//! - `divscore defaults` - Print the effective market assumptions
//! - `divscore check` - Validate configuration and run a smoke check
//!
//! # Request format
//!
//! ```json
//! [
//!   {"metric": "current_dividend_yield", "annual_dividend_per_share": 2.4, "current_price": 60.0},
//!   {"metric": "idr_impact", "distributable_cash_flow_per_unit": 0.55}
//! ]
//! ```
//!
//! Each outcome carries either a `result` or an inline `error`; one bad
//! request never aborts the batch.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod request;

pub use error::{CliError, Result};
pub use request::MetricRequest;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
