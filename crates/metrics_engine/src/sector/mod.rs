//! Sector-specific cash flow metrics.
//!
//! This module provides:
//! - REITs: FFO, AFFO, cash available for distribution, NAV premium
//! - MLPs: distributable cash flow and the incentive distribution rights
//!   waterfall
//! - Utilities: rate base, rate base growth and allowed earnings
//!
//! Stages are independent functions; callers chain them explicitly
//! (FFO into AFFO into CAD).

pub mod mlp;
pub mod reit;
pub mod utility;
