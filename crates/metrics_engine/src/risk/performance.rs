//! Risk-adjusted performance ratios.
//!
//! Sharpe and Treynor divide excess return by total and systematic risk
//! respectively. Sortino only penalises returns below a target, measured by
//! [`downside_deviation`].

use metrics_core::math::stats::mean;
use num_traits::Float;
use tracing::debug;

/// Target return against which downside deviation is measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetReturn {
    /// Use the risk-free rate passed to the ratio
    #[default]
    RiskFree,
    /// Use a fixed target
    Fixed(f64),
}

impl TargetReturn {
    /// The target this resolves to for a given risk-free rate.
    pub fn resolve(self, risk_free_rate: f64) -> f64 {
        match self {
            TargetReturn::RiskFree => risk_free_rate,
            TargetReturn::Fixed(target) => target,
        }
    }
}

impl From<Option<f64>> for TargetReturn {
    fn from(target: Option<f64>) -> Self {
        target.map_or(TargetReturn::RiskFree, TargetReturn::Fixed)
    }
}

/// Excess return per unit of total volatility; 0 when volatility is zero.
///
/// # Examples
/// ```
/// use metrics_engine::risk::sharpe_ratio;
///
/// assert!((sharpe_ratio(0.12_f64, 0.04, 0.16) - 0.5).abs() < 1e-12);
/// assert_eq!(sharpe_ratio(0.12_f64, 0.04, 0.0), 0.0);
/// ```
pub fn sharpe_ratio<T: Float>(portfolio_return: T, risk_free_rate: T, standard_deviation: T) -> T {
    if standard_deviation == T::zero() {
        return T::zero();
    }
    (portfolio_return - risk_free_rate) / standard_deviation
}

/// Excess return per unit of beta; 0 when beta is zero.
pub fn treynor_ratio<T: Float>(portfolio_return: T, risk_free_rate: T, beta: T) -> T {
    if beta == T::zero() {
        return T::zero();
    }
    (portfolio_return - risk_free_rate) / beta
}

/// Root-mean-square shortfall below `target_return`.
///
/// Squared shortfalls are averaged over the whole sample, not only over the
/// periods that fell short. Returns 0 when no return is below target.
///
/// # Examples
/// ```
/// use metrics_engine::risk::downside_deviation;
///
/// // One shortfall of 0.04 across four periods: sqrt(0.0016 / 4)
/// let dd = downside_deviation(&[0.05, -0.04, 0.02, 0.01], 0.0);
/// assert!((dd - 0.02).abs() < 1e-12);
/// ```
pub fn downside_deviation(returns: &[f64], target_return: f64) -> f64 {
    let squared_shortfall: f64 = returns
        .iter()
        .filter(|&&r| r < target_return)
        .map(|&r| (r - target_return).powi(2))
        .sum();
    if squared_shortfall == 0.0 {
        return 0.0;
    }
    (squared_shortfall / returns.len() as f64).sqrt()
}

/// Mean excess return over the risk-free rate per unit of downside deviation.
///
/// The downside is measured against `target`, which may differ from the
/// risk-free rate. With no downside the ratio is `+inf` when the mean excess
/// return is positive and 0 otherwise. An empty series scores 0.
pub fn sortino_ratio(returns: &[f64], risk_free_rate: f64, target: TargetReturn) -> f64 {
    let Some(average_return) = mean(returns) else {
        return 0.0;
    };
    let excess_return = average_return - risk_free_rate;
    let target_return = target.resolve(risk_free_rate);
    let downside = downside_deviation(returns, target_return);

    if downside == 0.0 {
        if excess_return > 0.0 {
            debug!(excess_return, target_return, "No downside deviation, Sortino ratio is unbounded");
            return f64::INFINITY;
        }
        return 0.0;
    }
    excess_return / downside
}
