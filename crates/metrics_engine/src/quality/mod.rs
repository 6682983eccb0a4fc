//! Quality and sustainability metrics.
//!
//! This module provides:
//! - Cash-flow quality, balance-sheet strength and return-on-capital ratios
//! - ROIC durability: persistence, fade and competitive advantage period
//! - The economic moat scorer with its categorical rating

pub mod durability;
pub mod moat;
pub mod ratios;

pub use durability::{competitive_advantage_period, fade_rate, persistence_rate};
pub use moat::{calculate_moat_score, MoatInputs, MoatRating, MoatScore, MoatScoreComponents};
pub use ratios::*;
