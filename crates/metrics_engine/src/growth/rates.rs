//! Dividend growth rates.

use metrics_core::validation::{checked_ratio, ensure_nonzero, ensure_same_length};
use metrics_core::DomainError;
use num_traits::Float;

use crate::lit;

/// Year-over-year dividend growth in percent.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `prior_year_dividend == 0`
pub fn simple_annual_growth_rate<T: Float>(
    current_dividend: T,
    prior_year_dividend: T,
) -> Result<T, DomainError> {
    let growth = checked_ratio(
        current_dividend - prior_year_dividend,
        prior_year_dividend,
        "prior_year_dividend",
    )?;
    Ok(growth * lit(100.0))
}

/// Compound annual growth rate as a fraction.
///
/// CAGR = (ending / beginning)^(1 / years) − 1
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `beginning_dividend == 0` or `years == 0`
///
/// # Examples
/// ```
/// use metrics_engine::growth::compound_annual_growth_rate;
///
/// let cagr = compound_annual_growth_rate(1.21_f64, 1.0, 2).unwrap();
/// assert!((cagr - 0.10).abs() < 1e-12);
/// ```
pub fn compound_annual_growth_rate<T: Float>(
    ending_dividend: T,
    beginning_dividend: T,
    years: u32,
) -> Result<T, DomainError> {
    let periods: T = ensure_nonzero("years", lit(f64::from(years)))?;
    let multiple = checked_ratio(ending_dividend, beginning_dividend, "beginning_dividend")?;
    Ok(multiple.powf(T::one() / periods) - T::one())
}

/// Weighted average of growth rates.
///
/// Σ(rate · weight) / Σ(weight)
///
/// # Errors
/// - `DomainError::LengthMismatch` if the sequences differ in length
/// - `DomainError::ZeroDenominator` if the weights sum to zero
///
/// # Examples
/// ```
/// use metrics_engine::growth::weighted_average_growth_rate;
///
/// let g = weighted_average_growth_rate(&[0.10_f64, 0.06], &[1.0, 3.0]).unwrap();
/// assert!((g - 0.07).abs() < 1e-12);
/// ```
pub fn weighted_average_growth_rate<T: Float>(
    growth_rates: &[T],
    weights: &[T],
) -> Result<T, DomainError> {
    ensure_same_length(("growth_rates", growth_rates), ("weights", weights))?;

    let (weighted_sum, weight_sum) = growth_rates
        .iter()
        .zip(weights)
        .fold((T::zero(), T::zero()), |(ws, w_total), (&rate, &weight)| {
            (ws + rate * weight, w_total + weight)
        });

    checked_ratio(weighted_sum, weight_sum, "sum of weights")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_growth() {
        assert_relative_eq!(simple_annual_growth_rate(1.05_f64, 1.0).unwrap(), 5.0, epsilon = 1e-10);
        assert_relative_eq!(simple_annual_growth_rate(0.9_f64, 1.0).unwrap(), -10.0, epsilon = 1e-10);
        assert!(simple_annual_growth_rate(1.0_f64, 0.0).is_err());
    }

    #[test]
    fn test_cagr_five_years() {
        let ending = 1.0_f64 * 1.07_f64.powi(5);
        assert_relative_eq!(
            compound_annual_growth_rate(ending, 1.0, 5).unwrap(),
            0.07,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cagr_zero_years_rejected() {
        assert_eq!(
            compound_annual_growth_rate(2.0_f64, 1.0, 0).unwrap_err(),
            DomainError::ZeroDenominator { quantity: "years" }
        );
    }

    #[test]
    fn test_cagr_zero_beginning_rejected() {
        assert!(compound_annual_growth_rate(2.0_f64, 0.0, 3).is_err());
    }

    #[test]
    fn test_weighted_average_equal_weights_is_mean() {
        let g = weighted_average_growth_rate(&[0.04_f64, 0.06, 0.08], &[1.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(g, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_average_length_mismatch() {
        let err = weighted_average_growth_rate(&[0.04_f64, 0.06], &[1.0]).unwrap_err();
        assert!(matches!(err, DomainError::LengthMismatch { left_len: 2, right_len: 1, .. }));
    }

    #[test]
    fn test_weighted_average_zero_weight_sum() {
        let err = weighted_average_growth_rate(&[0.04_f64, 0.06], &[1.0, -1.0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::ZeroDenominator {
                quantity: "sum of weights"
            }
        );
        assert!(weighted_average_growth_rate::<f64>(&[], &[]).is_err());
    }
}
