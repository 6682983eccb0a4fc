//! Total return helpers.

use metrics_core::validation::{checked_ratio, ensure_nonzero};
use metrics_core::DomainError;
use num_traits::Float;

use crate::lit;

/// Trading days per year used to de-annualise rates.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Daily rate compounding to `annual_risk_free_rate` over 252 trading days.
///
/// # Examples
/// ```
/// use metrics_engine::risk::daily_risk_free_rate;
///
/// let daily = daily_risk_free_rate(0.043_f64);
/// assert!(((1.0 + daily).powi(252) - 1.043).abs() < 1e-12);
/// ```
pub fn daily_risk_free_rate<T: Float>(annual_risk_free_rate: T) -> T {
    (T::one() + annual_risk_free_rate).powf(T::one() / lit(TRADING_DAYS_PER_YEAR)) - T::one()
}

/// Holding-period return including dividends received.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `beginning_price == 0`
pub fn total_return<T: Float>(ending_price: T, beginning_price: T, dividends: T) -> Result<T, DomainError> {
    checked_ratio(
        ending_price - beginning_price + dividends,
        beginning_price,
        "beginning_price",
    )
}

/// Geometric annualisation of [`total_return`] over `years`.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `beginning_price == 0` or `years == 0`
pub fn annualized_return<T: Float>(
    ending_price: T,
    beginning_price: T,
    dividends: T,
    years: T,
) -> Result<T, DomainError> {
    let total = total_return(ending_price, beginning_price, dividends)?;
    let years = ensure_nonzero("years", years)?;
    Ok((T::one() + total).powf(T::one() / years) - T::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_daily_rate_zero() {
        assert_eq!(daily_risk_free_rate(0.0_f64), 0.0);
    }

    #[test]
    fn test_total_return_includes_dividends() {
        assert_relative_eq!(total_return(110.0_f64, 100.0, 4.0).unwrap(), 0.14, epsilon = 1e-12);
        assert!(total_return(110.0_f64, 0.0, 4.0).is_err());
    }

    #[test]
    fn test_annualized_return() {
        // 21% over two years -> 10% a year
        assert_relative_eq!(
            annualized_return(115.0_f64, 100.0, 6.0, 2.0).unwrap(),
            0.10,
            epsilon = 1e-12
        );
        assert_eq!(
            annualized_return(115.0_f64, 100.0, 6.0, 0.0).unwrap_err(),
            DomainError::ZeroDenominator { quantity: "years" }
        );
    }

    #[test]
    fn test_annualized_one_year_is_total() {
        let total = total_return(95.0_f64, 100.0, 2.0).unwrap();
        let annual = annualized_return(95.0_f64, 100.0, 2.0, 1.0).unwrap();
        assert_relative_eq!(total, annual, epsilon = 1e-12);
    }
}
