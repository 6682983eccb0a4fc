//! Numerical helpers.
//!
//! - `stats`: Mean and standard deviation over historical series

pub mod stats;
