//! Growth rates and dividend discount models.
//!
//! This module provides:
//! - Simple, compound and weighted-average dividend growth rates
//! - Gordon growth model and the two-/three-stage dividend discount models
//! - Yield-on-cost projections and the Chowder number
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Kernels evaluate in `f64` and `f32`
//! - **Validated construction**: Multi-stage models check the required return
//!   against the terminal growth rate once, in `new`

pub mod ddm;
pub mod rates;
pub mod yield_on_cost;

pub use ddm::{gordon_growth_model, DdmValuation, ThreeStageDdm, TwoStageDdm};
pub use rates::{compound_annual_growth_rate, simple_annual_growth_rate, weighted_average_growth_rate};
pub use yield_on_cost::{chowder_number, current_yield_on_cost, projected_yield_on_cost};
