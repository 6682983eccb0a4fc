//! Dividend yield, coverage, and payout ratios.
//!
//! Every function here is a single ratio of reported financial figures,
//! optionally scaled by 100. Denominators are expected to be positive; a
//! zero denominator has no fallback and fails with `InvalidDomain`.
//!
//! ## Formulas
//!
//! **Yield**: annual dividend / price × 100
//! **Coverage**: earnings (or cash flow) / dividends
//! **Payout**: dividends / earnings (or cash flow) × 100

use metrics_core::validation::checked_ratio;
use metrics_core::DomainError;
use num_traits::Float;

use crate::lit;

#[inline]
fn percent<T: Float>(ratio: T) -> T {
    ratio * lit(100.0)
}

/// Current dividend yield in percent.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `current_price == 0`
///
/// # Examples
/// ```
/// use metrics_engine::safety::current_dividend_yield;
///
/// let y = current_dividend_yield(3.0_f64, 75.0).unwrap();
/// assert!((y - 4.0).abs() < 1e-12);
/// ```
pub fn current_dividend_yield<T: Float>(
    annual_dividend_per_share: T,
    current_price: T,
) -> Result<T, DomainError> {
    checked_ratio(annual_dividend_per_share, current_price, "current_price").map(percent)
}

/// Trailing-twelve-months dividend yield in percent.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `current_price == 0`
pub fn trailing_twelve_months_dividend_yield<T: Float>(
    sum_of_last_four_quarters: T,
    current_price: T,
) -> Result<T, DomainError> {
    checked_ratio(sum_of_last_four_quarters, current_price, "current_price").map(percent)
}

/// Forward dividend yield in percent.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `current_price == 0`
pub fn forward_dividend_yield<T: Float>(
    projected_annual_dividend: T,
    current_price: T,
) -> Result<T, DomainError> {
    checked_ratio(projected_annual_dividend, current_price, "current_price").map(percent)
}

/// Earnings per share divided by dividend per share.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `dividend_per_share == 0`
pub fn earnings_coverage_ratio<T: Float>(
    earnings_per_share: T,
    dividend_per_share: T,
) -> Result<T, DomainError> {
    checked_ratio(earnings_per_share, dividend_per_share, "dividend_per_share")
}

/// Free cash flow divided by total dividends paid.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `total_dividends_paid == 0`
pub fn free_cash_flow_coverage<T: Float>(
    free_cash_flow: T,
    total_dividends_paid: T,
) -> Result<T, DomainError> {
    checked_ratio(free_cash_flow, total_dividends_paid, "total_dividends_paid")
}

/// Operating cash flow divided by total dividends paid.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `total_dividends_paid == 0`
pub fn cash_flow_from_operations_coverage<T: Float>(
    operating_cash_flow: T,
    total_dividends_paid: T,
) -> Result<T, DomainError> {
    checked_ratio(operating_cash_flow, total_dividends_paid, "total_dividends_paid")
}

/// Inputs to free-cash-flow-to-equity coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FcfeInputs<T> {
    /// Cash flow from operations
    pub cash_flow_from_operations: T,
    /// Capital expenditures
    pub capital_expenditures: T,
    /// New borrowing net of repayments
    pub net_borrowing: T,
    /// Interest expense (pre-tax)
    pub interest_expense: T,
    /// Marginal tax rate applied to interest
    pub tax_rate: T,
    /// Dividends paid to shareholders
    pub total_dividends_paid: T,
    /// Cash spent on buybacks
    pub total_share_repurchases: T,
}

impl<T: Float> FcfeInputs<T> {
    /// Free cash flow to equity:
    /// CFO − capex + net borrowing − interest × (1 − tax).
    pub fn free_cash_flow_to_equity(&self) -> T {
        self.cash_flow_from_operations - self.capital_expenditures + self.net_borrowing
            - self.interest_expense * (T::one() - self.tax_rate)
    }

    /// Total cash returned to shareholders.
    pub fn shareholder_payouts(&self) -> T {
        self.total_dividends_paid + self.total_share_repurchases
    }
}

/// FCFE divided by dividends plus buybacks.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if dividends plus buybacks sum to zero
///
/// # Examples
/// ```
/// use metrics_engine::safety::{free_cash_flow_to_equity_coverage, FcfeInputs};
///
/// let inputs = FcfeInputs {
///     cash_flow_from_operations: 500.0_f64,
///     capital_expenditures: 150.0,
///     net_borrowing: 50.0,
///     interest_expense: 40.0,
///     tax_rate: 0.25,
///     total_dividends_paid: 120.0,
///     total_share_repurchases: 80.0,
/// };
/// // (500 - 150 + 50 - 30) / 200
/// assert!((free_cash_flow_to_equity_coverage(&inputs).unwrap() - 1.85).abs() < 1e-12);
/// ```
pub fn free_cash_flow_to_equity_coverage<T: Float>(inputs: &FcfeInputs<T>) -> Result<T, DomainError> {
    checked_ratio(
        inputs.free_cash_flow_to_equity(),
        inputs.shareholder_payouts(),
        "total_dividends_paid + total_share_repurchases",
    )
}

/// Dividend per share over earnings per share, in percent.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `earnings_per_share == 0`
pub fn earnings_payout_ratio<T: Float>(
    dividend_per_share: T,
    earnings_per_share: T,
) -> Result<T, DomainError> {
    checked_ratio(dividend_per_share, earnings_per_share, "earnings_per_share").map(percent)
}

/// Total dividends over free cash flow, in percent.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `free_cash_flow == 0`
pub fn free_cash_flow_payout_ratio<T: Float>(
    total_dividends_paid: T,
    free_cash_flow: T,
) -> Result<T, DomainError> {
    checked_ratio(total_dividends_paid, free_cash_flow, "free_cash_flow").map(percent)
}

/// Dividend per share over operating cash flow net of preferred dividends.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if operating cash flow equals preferred dividends
pub fn cash_dividend_payout_ratio<T: Float>(
    dividend_per_share: T,
    operating_cash_flow: T,
    preferred_dividends: T,
) -> Result<T, DomainError> {
    checked_ratio(
        dividend_per_share,
        operating_cash_flow - preferred_dividends,
        "operating_cash_flow - preferred_dividends",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Yields
    // ==========================================================

    #[test]
    fn test_yields_scale_to_percent() {
        assert_relative_eq!(current_dividend_yield(2.0_f64, 50.0).unwrap(), 4.0);
        assert_relative_eq!(
            trailing_twelve_months_dividend_yield(1.8_f64, 60.0).unwrap(),
            3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(forward_dividend_yield(2.2_f64, 40.0).unwrap(), 5.5, epsilon = 1e-12);
    }

    #[test]
    fn test_yield_zero_price_rejected() {
        let err = current_dividend_yield(2.0_f64, 0.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::ZeroDenominator {
                quantity: "current_price"
            }
        );
        assert!(forward_dividend_yield(2.0_f64, 0.0).is_err());
        assert!(trailing_twelve_months_dividend_yield(2.0_f64, 0.0).is_err());
    }

    #[test]
    fn test_yield_f32() {
        assert_relative_eq!(current_dividend_yield(1.0_f32, 25.0).unwrap(), 4.0_f32, epsilon = 1e-5);
    }

    // ==========================================================
    // Coverage
    // ==========================================================

    #[test]
    fn test_coverage_ratios() {
        assert_relative_eq!(earnings_coverage_ratio(6.0_f64, 2.0).unwrap(), 3.0);
        assert_relative_eq!(free_cash_flow_coverage(900.0_f64, 600.0).unwrap(), 1.5);
        assert_relative_eq!(cash_flow_from_operations_coverage(1200.0_f64, 400.0).unwrap(), 3.0);
        assert!(earnings_coverage_ratio(6.0_f64, 0.0).is_err());
    }

    #[test]
    fn test_fcfe_components() {
        let inputs = FcfeInputs {
            cash_flow_from_operations: 1000.0_f64,
            capital_expenditures: 300.0,
            net_borrowing: -100.0,
            interest_expense: 80.0,
            tax_rate: 0.21,
            total_dividends_paid: 250.0,
            total_share_repurchases: 150.0,
        };
        assert_relative_eq!(inputs.free_cash_flow_to_equity(), 536.8, epsilon = 1e-9);
        assert_relative_eq!(inputs.shareholder_payouts(), 400.0);
        assert_relative_eq!(
            free_cash_flow_to_equity_coverage(&inputs).unwrap(),
            1.342,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_fcfe_zero_payouts_rejected() {
        let inputs = FcfeInputs {
            cash_flow_from_operations: 100.0_f64,
            capital_expenditures: 10.0,
            net_borrowing: 0.0,
            interest_expense: 0.0,
            tax_rate: 0.21,
            total_dividends_paid: 50.0,
            total_share_repurchases: -50.0,
        };
        assert!(free_cash_flow_to_equity_coverage(&inputs).is_err());
    }

    // ==========================================================
    // Payout
    // ==========================================================

    #[test]
    fn test_payout_ratios() {
        assert_relative_eq!(earnings_payout_ratio(1.5_f64, 3.0).unwrap(), 50.0);
        assert_relative_eq!(free_cash_flow_payout_ratio(400.0_f64, 500.0).unwrap(), 80.0);
        assert_relative_eq!(cash_dividend_payout_ratio(2.0_f64, 10.0, 2.0).unwrap(), 0.25);
    }

    #[test]
    fn test_cash_dividend_payout_zero_net_cash_flow() {
        assert!(cash_dividend_payout_ratio(2.0_f64, 5.0, 5.0).is_err());
    }

    #[test]
    fn test_payout_is_reciprocal_of_coverage() {
        let coverage = earnings_coverage_ratio(4.0_f64, 1.6).unwrap();
        let payout = earnings_payout_ratio(1.6_f64, 4.0).unwrap();
        assert_relative_eq!(coverage * payout, 100.0, epsilon = 1e-10);
    }
}
