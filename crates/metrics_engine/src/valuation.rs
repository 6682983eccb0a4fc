//! Yield-relative and dividend-adjusted valuation ratios.

use metrics_core::validation::checked_ratio;
use metrics_core::DomainError;
use num_traits::Float;

/// Current yield relative to its own historical average.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `historical_average_yield == 0`
pub fn relative_dividend_yield<T: Float>(current_yield: T, historical_average_yield: T) -> Result<T, DomainError> {
    checked_ratio(current_yield, historical_average_yield, "historical_average_yield")
}

/// Dividend yield minus the ten-year treasury yield.
#[inline]
pub fn yield_spread<T: Float>(dividend_yield: T, ten_year_treasury_yield: T) -> T {
    dividend_yield - ten_year_treasury_yield
}

/// Stock yield relative to its sector average.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `sector_average_yield == 0`
pub fn sector_relative_yield<T: Float>(stock_dividend_yield: T, sector_average_yield: T) -> Result<T, DomainError> {
    checked_ratio(stock_dividend_yield, sector_average_yield, "sector_average_yield")
}

/// P/E divided by growth plus yield.
///
/// Growth and yield must share the P/E convention (usually both in percent).
///
/// # Errors
/// - `DomainError::ZeroDenominator` if growth and yield sum to zero
///
/// # Examples
/// ```
/// use metrics_engine::valuation::pegy_ratio;
///
/// assert!((pegy_ratio(18.0_f64, 8.0, 4.0).unwrap() - 1.5).abs() < 1e-12);
/// ```
pub fn pegy_ratio<T: Float>(pe_ratio: T, expected_growth_rate: T, dividend_yield: T) -> Result<T, DomainError> {
    checked_ratio(
        pe_ratio,
        expected_growth_rate + dividend_yield,
        "expected_growth_rate + dividend_yield",
    )
}

/// P/E scaled by `1 + dividend_yield` (yield as a fraction).
#[inline]
pub fn dividend_adjusted_pe<T: Float>(pe_ratio: T, dividend_yield: T) -> T {
    pe_ratio * (T::one() + dividend_yield)
}

/// Share price over annual dividend; the reciprocal of the yield.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `annual_dividend == 0`
pub fn price_to_dividend_ratio<T: Float>(current_share_price: T, annual_dividend: T) -> Result<T, DomainError> {
    checked_ratio(current_share_price, annual_dividend, "annual_dividend")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_relative_yields() {
        assert_relative_eq!(relative_dividend_yield(4.5_f64, 3.0).unwrap(), 1.5);
        assert_relative_eq!(sector_relative_yield(3.0_f64, 4.0).unwrap(), 0.75);
        assert!(relative_dividend_yield(4.5_f64, 0.0).is_err());
        assert!(sector_relative_yield(4.5_f64, 0.0).is_err());
    }

    #[test]
    fn test_yield_spread() {
        assert_relative_eq!(yield_spread(5.2_f64, 4.1), 1.1, epsilon = 1e-12);
        assert!(yield_spread(3.0_f64, 4.1) < 0.0);
    }

    #[test]
    fn test_pegy_zero_denominator() {
        assert_eq!(
            pegy_ratio(15.0_f64, 3.0, -3.0).unwrap_err(),
            DomainError::ZeroDenominator {
                quantity: "expected_growth_rate + dividend_yield"
            }
        );
    }

    #[test]
    fn test_dividend_adjusted_pe() {
        assert_relative_eq!(dividend_adjusted_pe(20.0_f64, 0.03), 20.6, epsilon = 1e-12);
    }

    #[test]
    fn test_price_to_dividend_is_inverse_yield() {
        let ratio = price_to_dividend_ratio(80.0_f64, 3.2).unwrap();
        assert_relative_eq!(ratio, 25.0, epsilon = 1e-12);
        assert!(price_to_dividend_ratio(80.0_f64, 0.0).is_err());
    }
}
