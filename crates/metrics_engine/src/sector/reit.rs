//! Real estate investment trust metrics.

use metrics_core::validation::checked_ratio;
use metrics_core::DomainError;
use num_traits::Float;
use tracing::debug;

use crate::lit;

/// Share of rental revenue assumed as the straight-line rent adjustment
/// when no reported figure exists.
pub const ESTIMATED_STRAIGHT_LINE_RENT_RATE: f64 = 0.025;

/// Funds from operations: net income + depreciation + amortisation − gains
/// on asset sales.
#[inline]
pub fn funds_from_operations<T: Float>(
    net_income: T,
    depreciation: T,
    amortization: T,
    gains_on_asset_sales: T,
) -> T {
    net_income + depreciation + amortization - gains_on_asset_sales
}

/// Source of the straight-line rent adjustment deducted in AFFO.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StraightLineRent {
    /// Figure reported in the annual filing
    Reported(f64),
    /// Estimated at 2.5% of rental revenue
    EstimatedFromRevenue(f64),
    /// No data; no adjustment
    #[default]
    None,
}

impl StraightLineRent {
    /// Picks the best available source: reported, then revenue estimate,
    /// then none.
    pub fn from_sources(reported: Option<f64>, rental_revenue: Option<f64>) -> Self {
        match (reported, rental_revenue) {
            (Some(reported), _) => StraightLineRent::Reported(reported),
            (None, Some(revenue)) => StraightLineRent::EstimatedFromRevenue(revenue),
            (None, None) => StraightLineRent::None,
        }
    }

    /// The adjustment amount.
    pub fn adjustment(&self) -> f64 {
        match *self {
            StraightLineRent::Reported(amount) => amount,
            StraightLineRent::EstimatedFromRevenue(revenue) => revenue * ESTIMATED_STRAIGHT_LINE_RENT_RATE,
            StraightLineRent::None => 0.0,
        }
    }
}

/// Adjusted funds from operations: FFO − maintenance capex − straight-line
/// rent adjustment.
///
/// # Examples
/// ```
/// use metrics_engine::sector::reit::{adjusted_funds_from_operations, StraightLineRent};
///
/// let affo = adjusted_funds_from_operations(
///     500.0,
///     80.0,
///     StraightLineRent::EstimatedFromRevenue(800.0),
/// );
/// assert!((affo - 400.0).abs() < 1e-12);
/// ```
pub fn adjusted_funds_from_operations(
    funds_from_operations: f64,
    maintenance_capex: f64,
    straight_line_rent: StraightLineRent,
) -> f64 {
    if let StraightLineRent::EstimatedFromRevenue(revenue) = straight_line_rent {
        debug!(rental_revenue = revenue, "Estimating straight-line rent from rental revenue");
    }
    funds_from_operations - maintenance_capex - straight_line_rent.adjustment()
}

/// Cash available for distribution: AFFO − recurring capex.
#[inline]
pub fn cash_available_for_distribution<T: Float>(adjusted_funds_from_operations: T, recurring_capex: T) -> T {
    adjusted_funds_from_operations - recurring_capex
}

/// Price premium (positive) or discount (negative) to NAV per share, in
/// percent of `net_asset_value`.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `net_asset_value == 0`
pub fn net_asset_value_premium_or_discount<T: Float>(
    stock_price: T,
    nav_per_share: T,
    net_asset_value: T,
) -> Result<T, DomainError> {
    checked_ratio(stock_price - nav_per_share, net_asset_value, "net_asset_value").map(|r| r * lit(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ffo() {
        assert_eq!(funds_from_operations(200.0_f64, 150.0, 20.0, 30.0), 340.0);
    }

    #[test]
    fn test_straight_line_rent_fallback_chain() {
        assert_eq!(
            StraightLineRent::from_sources(Some(12.0), Some(1000.0)),
            StraightLineRent::Reported(12.0)
        );
        assert_eq!(
            StraightLineRent::from_sources(None, Some(1000.0)),
            StraightLineRent::EstimatedFromRevenue(1000.0)
        );
        assert_eq!(StraightLineRent::from_sources(None, None), StraightLineRent::None);

        assert_eq!(StraightLineRent::Reported(12.0).adjustment(), 12.0);
        assert_relative_eq!(StraightLineRent::EstimatedFromRevenue(1000.0).adjustment(), 25.0);
        assert_eq!(StraightLineRent::None.adjustment(), 0.0);
    }

    #[test]
    fn test_affo_without_rent_data() {
        assert_eq!(adjusted_funds_from_operations(340.0, 40.0, StraightLineRent::None), 300.0);
    }

    #[test]
    fn test_ffo_affo_cad_chain() {
        let ffo = funds_from_operations(200.0_f64, 150.0, 20.0, 30.0);
        let affo = adjusted_funds_from_operations(ffo, 40.0, StraightLineRent::Reported(10.0));
        let cad = cash_available_for_distribution(affo, 25.0);
        assert_relative_eq!(cad, 265.0);
    }

    #[test]
    fn test_nav_premium_and_discount() {
        assert_relative_eq!(
            net_asset_value_premium_or_discount(55.0_f64, 50.0, 50.0).unwrap(),
            10.0,
            epsilon = 1e-12
        );
        assert!(net_asset_value_premium_or_discount(45.0_f64, 50.0, 50.0).unwrap() < 0.0);
        assert!(net_asset_value_premium_or_discount(45.0_f64, 50.0, 0.0).is_err());
    }
}
