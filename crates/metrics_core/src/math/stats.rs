//! Descriptive statistics over historical series.
//!
//! All functions return `None` on series too short to define the statistic,
//! leaving the caller to pick its documented conservative default.

/// Arithmetic mean.
///
/// Returns `None` for an empty series.
///
/// # Examples
/// ```
/// use metrics_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sum_squared_deviations(values: &[f64], centre: f64) -> f64 {
    values.iter().map(|x| (x - centre).powi(2)).sum()
}

/// Population standard deviation (divides by `n`).
///
/// Returns `None` for an empty series.
///
/// # Examples
/// ```
/// use metrics_core::math::stats::population_std_dev;
///
/// let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let centre = mean(values)?;
    Some((sum_squared_deviations(values, centre) / values.len() as f64).sqrt())
}

/// Sample standard deviation (divides by `n - 1`).
///
/// Returns `None` for fewer than two observations.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let centre = mean(values)?;
    Some((sum_squared_deviations(values, centre) / (values.len() - 1) as f64).sqrt())
}
