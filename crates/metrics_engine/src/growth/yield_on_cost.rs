//! Yield-on-cost projections.

use metrics_core::validation::{checked_ratio, ensure_period_exponent};
use metrics_core::DomainError;
use num_traits::Float;

/// Current annual dividend over the original cost basis.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `original_cost_basis == 0`
pub fn current_yield_on_cost<T: Float>(
    current_annual_dividend: T,
    original_cost_basis: T,
) -> Result<T, DomainError> {
    checked_ratio(current_annual_dividend, original_cost_basis, "original_cost_basis")
}

/// Yield on cost after compounding the dividend for `years` at `growth_rate`.
///
/// With `years == 0` this is the current yield on cost.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `original_cost_basis == 0`
/// - `DomainError::PeriodsOutOfRange` if `years > i32::MAX`
///
/// # Examples
/// ```
/// use metrics_engine::growth::projected_yield_on_cost;
///
/// let yoc = projected_yield_on_cost(2.0_f64, 50.0, 2, 0.10).unwrap();
/// assert!((yoc - 0.0484).abs() < 1e-12);
/// ```
pub fn projected_yield_on_cost<T: Float>(
    current_annual_dividend: T,
    original_cost_basis: T,
    years: u32,
    growth_rate: T,
) -> Result<T, DomainError> {
    let exponent = ensure_period_exponent("years", years)?;
    let future_dividend = current_annual_dividend * (T::one() + growth_rate).powi(exponent);
    checked_ratio(future_dividend, original_cost_basis, "original_cost_basis")
}

/// Chowder number: current yield plus five-year dividend growth rate.
///
/// Both inputs must share a scale (both percent or both fractions).
#[inline]
pub fn chowder_number<T: Float>(current_dividend_yield: T, five_year_dividend_growth_rate: T) -> T {
    current_dividend_yield + five_year_dividend_growth_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_current_yield_on_cost() {
        assert_relative_eq!(current_yield_on_cost(3.0_f64, 40.0).unwrap(), 0.075);
        assert!(current_yield_on_cost(3.0_f64, 0.0).is_err());
    }

    #[test]
    fn test_projected_zero_years_is_current() {
        let current = current_yield_on_cost(2.4_f64, 60.0).unwrap();
        let projected = projected_yield_on_cost(2.4_f64, 60.0, 0, 0.08).unwrap();
        assert_eq!(current, projected);
    }

    #[test]
    fn test_projected_ten_years() {
        let yoc = projected_yield_on_cost(1.0_f64, 25.0, 10, 0.07).unwrap();
        assert_relative_eq!(yoc, 1.07_f64.powi(10) / 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projected_negative_growth_shrinks_yield() {
        let yoc = projected_yield_on_cost(1.0_f64, 20.0, 3, -0.05).unwrap();
        assert!(yoc < 0.05);
    }

    #[test]
    fn test_projected_years_beyond_exponent_range() {
        assert_eq!(
            projected_yield_on_cost(1.0_f64, 20.0, u32::MAX, 0.05).unwrap_err(),
            DomainError::PeriodsOutOfRange {
                quantity: "years",
                periods: u64::from(u32::MAX)
            }
        );
    }

    #[test]
    fn test_chowder_number() {
        assert_relative_eq!(chowder_number(3.5_f64, 8.0), 11.5);
    }
}
