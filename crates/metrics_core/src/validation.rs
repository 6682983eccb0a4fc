//! Domain validation shared by every formula group.
//!
//! Each check either returns its (validated) input or a [`DomainError`].
//! None of them has side effects, so callers chain them with `?` before
//! evaluating a formula.

use num_traits::Float;

use crate::types::DomainError;

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Fails when `value` is zero.
///
/// # Arguments
/// * `quantity` - Name reported in the error
/// * `value` - Candidate denominator
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `value == 0`
///
/// # Examples
/// ```
/// use metrics_core::validation::ensure_nonzero;
///
/// assert!(ensure_nonzero("price", 10.0_f64).is_ok());
/// assert!(ensure_nonzero("price", 0.0_f64).is_err());
/// ```
#[inline]
pub fn ensure_nonzero<T: Float>(quantity: &'static str, value: T) -> Result<T, DomainError> {
    if value == T::zero() {
        return Err(DomainError::ZeroDenominator { quantity });
    }
    Ok(value)
}

/// Divides `numerator` by a denominator that must be non-zero.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `denominator == 0`
#[inline]
pub fn checked_ratio<T: Float>(
    numerator: T,
    denominator: T,
    quantity: &'static str,
) -> Result<T, DomainError> {
    Ok(numerator / ensure_nonzero(quantity, denominator)?)
}

/// Fails unless `required_return` strictly exceeds `growth_rate`.
///
/// Returns the spread `required_return - growth_rate`, which is always
/// strictly positive on success.
///
/// # Errors
/// - `DomainError::ReturnNotAboveGrowth` if `required_return <= growth_rate`
///
/// # Examples
/// ```
/// use metrics_core::validation::ensure_return_exceeds_growth;
///
/// let spread = ensure_return_exceeds_growth(0.09_f64, 0.04).unwrap();
/// assert!((spread - 0.05).abs() < 1e-12);
/// assert!(ensure_return_exceeds_growth(0.04_f64, 0.04).is_err());
/// ```
#[inline]
pub fn ensure_return_exceeds_growth<T: Float>(
    required_return: T,
    growth_rate: T,
) -> Result<T, DomainError> {
    if required_return <= growth_rate {
        return Err(DomainError::ReturnNotAboveGrowth {
            required_return: to_f64(required_return),
            growth_rate: to_f64(growth_rate),
        });
    }
    Ok(required_return - growth_rate)
}

/// Fails when two pairwise-aggregated sequences differ in length.
///
/// # Errors
/// - `DomainError::LengthMismatch` if the lengths differ
pub fn ensure_same_length<A, B>(
    left: (&'static str, &[A]),
    right: (&'static str, &[B]),
) -> Result<usize, DomainError> {
    let (left_name, left_values) = left;
    let (right_name, right_values) = right;
    if left_values.len() != right_values.len() {
        return Err(DomainError::LengthMismatch {
            left: left_name,
            left_len: left_values.len(),
            right: right_name,
            right_len: right_values.len(),
        });
    }
    Ok(left_values.len())
}

/// Fails when a logarithm base is zero or negative.
///
/// # Errors
/// - `DomainError::NonPositiveLogBase` if `base <= 0`
#[inline]
pub fn ensure_positive_log_base<T: Float>(base: T) -> Result<T, DomainError> {
    if base <= T::zero() {
        return Err(DomainError::NonPositiveLogBase { base: to_f64(base) });
    }
    Ok(base)
}

/// Fails unless `thresholds` is strictly increasing.
///
/// # Errors
/// - `DomainError::NonAscendingThresholds` at the first offending index
pub fn ensure_ascending(thresholds: &[f64]) -> Result<(), DomainError> {
    for (index, pair) in thresholds.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(DomainError::NonAscendingThresholds {
                index: index + 1,
                value: pair[1],
            });
        }
    }
    Ok(())
}

/// Converts a period count into a `powi` exponent.
///
/// # Errors
/// - `DomainError::PeriodsOutOfRange` if `periods > i32::MAX`
///
/// # Examples
/// ```
/// use metrics_core::validation::ensure_period_exponent;
///
/// assert_eq!(ensure_period_exponent("years", 10).unwrap(), 10);
/// assert!(ensure_period_exponent("years", u32::MAX).is_err());
/// ```
#[inline]
pub fn ensure_period_exponent(quantity: &'static str, periods: u32) -> Result<i32, DomainError> {
    i32::try_from(periods).map_err(|_| DomainError::PeriodsOutOfRange {
        quantity,
        periods: u64::from(periods),
    })
}

/// Total length of two consecutive stages, usable as a `powi` exponent.
///
/// # Errors
/// - `DomainError::PeriodsOutOfRange` if the sum overflows or exceeds `i32::MAX`
pub fn checked_horizon(quantity: &'static str, first: u32, second: u32) -> Result<u32, DomainError> {
    let total = first.checked_add(second).ok_or(DomainError::PeriodsOutOfRange {
        quantity,
        periods: u64::from(first) + u64::from(second),
    })?;
    ensure_period_exponent(quantity, total)?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ensure_nonzero() {
        assert_eq!(ensure_nonzero("x", 2.5_f64).unwrap(), 2.5);
        assert_eq!(ensure_nonzero("x", -1.0_f64).unwrap(), -1.0);
        assert_eq!(
            ensure_nonzero("current_price", 0.0_f64).unwrap_err(),
            DomainError::ZeroDenominator {
                quantity: "current_price"
            }
        );
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(ensure_nonzero("x", -0.0_f64).is_err());
    }

    #[test]
    fn test_checked_ratio() {
        assert_relative_eq!(checked_ratio(3.0_f64, 4.0, "d").unwrap(), 0.75);
        assert!(checked_ratio(3.0_f64, 0.0, "d").is_err());
        assert_relative_eq!(checked_ratio(3.0_f32, 4.0, "d").unwrap(), 0.75_f32);
    }

    #[test]
    fn test_return_exceeds_growth() {
        assert_relative_eq!(
            ensure_return_exceeds_growth(0.10_f64, 0.03).unwrap(),
            0.07,
            epsilon = 1e-12
        );
        match ensure_return_exceeds_growth(0.05_f64, 0.06).unwrap_err() {
            DomainError::ReturnNotAboveGrowth {
                required_return,
                growth_rate,
            } => {
                assert_eq!(required_return, 0.05);
                assert_eq!(growth_rate, 0.06);
            }
            _ => panic!("Expected ReturnNotAboveGrowth"),
        }
    }

    #[test]
    fn test_equal_return_and_growth_rejected() {
        assert!(ensure_return_exceeds_growth(0.07_f64, 0.07).is_err());
    }

    #[test]
    fn test_same_length() {
        assert_eq!(
            ensure_same_length(("a", &[1.0, 2.0][..]), ("b", &[3_u32, 4][..])).unwrap(),
            2
        );
        let err = ensure_same_length(("rates", &[1.0][..]), ("weights", &[1.0, 2.0][..])).unwrap_err();
        assert_eq!(
            err,
            DomainError::LengthMismatch {
                left: "rates",
                left_len: 1,
                right: "weights",
                right_len: 2
            }
        );
    }

    #[test]
    fn test_positive_log_base() {
        assert!(ensure_positive_log_base(0.7_f64).is_ok());
        assert!(ensure_positive_log_base(0.0_f64).is_err());
        assert!(ensure_positive_log_base(-0.2_f64).is_err());
    }

    #[test]
    fn test_ascending() {
        assert!(ensure_ascending(&[]).is_ok());
        assert!(ensure_ascending(&[0.5]).is_ok());
        assert!(ensure_ascending(&[0.5, 0.6, 0.75]).is_ok());
        assert_eq!(
            ensure_ascending(&[0.5, 0.6, 0.6]).unwrap_err(),
            DomainError::NonAscendingThresholds {
                index: 2,
                value: 0.6
            }
        );
        assert!(ensure_ascending(&[0.6, 0.5]).is_err());
    }

    #[test]
    fn test_period_exponent() {
        assert_eq!(ensure_period_exponent("years", 0).unwrap(), 0);
        assert_eq!(ensure_period_exponent("years", i32::MAX as u32).unwrap(), i32::MAX);
        assert_eq!(
            ensure_period_exponent("years", u32::MAX).unwrap_err(),
            DomainError::PeriodsOutOfRange {
                quantity: "years",
                periods: u64::from(u32::MAX)
            }
        );
    }

    #[test]
    fn test_horizon_overflow() {
        assert_eq!(checked_horizon("horizon", 5, 5).unwrap(), 10);
        assert_eq!(
            checked_horizon("horizon", u32::MAX, 1).unwrap_err(),
            DomainError::PeriodsOutOfRange {
                quantity: "horizon",
                periods: 4_294_967_296
            }
        );
        assert!(checked_horizon("horizon", i32::MAX as u32, 1).is_err());
    }
}
