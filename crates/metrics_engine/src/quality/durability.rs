//! Durability of excess returns on invested capital.
//!
//! Persistence `p` is the fraction of this year's ROIC expected to survive
//! into next year. Excess returns then decay geometrically, so the
//! competitive advantage period is the number of years until `p^n` falls to
//! [`CAP_EXCESS_THRESHOLD`].

use metrics_core::validation::ensure_positive_log_base;
use metrics_core::DomainError;

/// Persistence assumed when a history is too short to estimate it.
pub const NEUTRAL_PERSISTENCE_RATE: f64 = 0.5;
/// Persistence used when the caller has no estimate of its own.
pub const DEFAULT_PERSISTENCE_RATE: f64 = 0.7;
/// Residual share of the excess return that ends the advantage period.
pub const CAP_EXCESS_THRESHOLD: f64 = 0.1;
/// Upper bound on a finite competitive advantage period, in years.
pub const MAX_ADVANTAGE_YEARS: f64 = 30.0;

/// Average year-over-year ROIC retention, each step capped at 1.
///
/// Only pairs where both years are strictly positive contribute. Returns
/// [`NEUTRAL_PERSISTENCE_RATE`] when no pair qualifies.
///
/// # Examples
/// ```
/// use metrics_engine::quality::persistence_rate;
///
/// // 0.20 -> 0.18 retains 90%, 0.18 -> 0.19 is capped at 100%
/// let p = persistence_rate(&[0.20, 0.18, 0.19]);
/// assert!((p - 0.95).abs() < 1e-12);
/// ```
pub fn persistence_rate(roic_history: &[f64]) -> f64 {
    let retained: Vec<f64> = roic_history
        .windows(2)
        .filter(|pair| pair[0] > 0.0 && pair[1] > 0.0)
        .map(|pair| (pair[1] / pair[0]).min(1.0))
        .collect();

    if retained.is_empty() {
        return NEUTRAL_PERSISTENCE_RATE;
    }
    retained.iter().sum::<f64>() / retained.len() as f64
}

/// Annual fade of excess returns: `1 − persistence`, or 1 when there is no
/// excess return to fade.
pub fn fade_rate(roic: f64, wacc: f64, persistence: f64) -> f64 {
    if roic - wacc <= 0.0 {
        return 1.0;
    }
    1.0 - persistence
}

/// Years until the current excess return decays to 10% of its level.
///
/// Zero when `roic <= wacc`, infinite when `persistence >= 1`, otherwise
/// `ln(0.1) / ln(persistence)` capped at 30 years.
///
/// # Errors
/// - `DomainError::NonPositiveLogBase` if `persistence <= 0` while an
///   excess return exists
///
/// # Examples
/// ```
/// use metrics_engine::quality::competitive_advantage_period;
///
/// let years = competitive_advantage_period(0.18, 0.08, 0.7).unwrap();
/// assert!((years - 6.4557).abs() < 1e-3);
/// ```
pub fn competitive_advantage_period(roic: f64, wacc: f64, persistence: f64) -> Result<f64, DomainError> {
    if roic <= wacc {
        return Ok(0.0);
    }
    if persistence >= 1.0 {
        return Ok(f64::INFINITY);
    }
    let base = ensure_positive_log_base(persistence)?;
    let years = CAP_EXCESS_THRESHOLD.ln() / base.ln();
    Ok(years.min(MAX_ADVANTAGE_YEARS))
}
