//! Dividend track record and trend analysis.
//!
//! This module provides:
//! - Track-record classification (King, Champion, Contender, Challenger)
//! - Payment volatility as the sample standard deviation of payments
//! - Average payment during recession periods
//! - Acceleration of dividend growth between periods

use metrics_core::math::stats::{mean, sample_std_dev};

/// Dividend track-record class by consecutive years of payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DividendClass {
    /// Fewer than 5 years
    #[cfg_attr(feature = "serde", serde(rename = "N/A"))]
    Unclassified,
    /// At least 5 years
    Challenger,
    /// At least 10 years
    Contender,
    /// At least 25 years
    Champion,
    /// At least 50 years
    King,
}

impl DividendClass {
    /// Display label; "N/A" when unclassified.
    pub fn as_str(&self) -> &'static str {
        match self {
            DividendClass::King => "King",
            DividendClass::Champion => "Champion",
            DividendClass::Contender => "Contender",
            DividendClass::Challenger => "Challenger",
            DividendClass::Unclassified => "N/A",
        }
    }

    /// Minimum years of payments for this class.
    pub fn minimum_years(&self) -> u32 {
        match self {
            DividendClass::King => 50,
            DividendClass::Champion => 25,
            DividendClass::Contender => 10,
            DividendClass::Challenger => 5,
            DividendClass::Unclassified => 0,
        }
    }
}

impl std::fmt::Display for DividendClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a stock by its years of uninterrupted dividend payments.
///
/// # Examples
/// ```
/// use metrics_engine::history::{classify_dividend_stock, DividendClass};
///
/// assert_eq!(classify_dividend_stock(27), DividendClass::Champion);
/// assert_eq!(classify_dividend_stock(3).as_str(), "N/A");
/// ```
pub fn classify_dividend_stock(years_of_dividends_paid: u32) -> DividendClass {
    [
        DividendClass::King,
        DividendClass::Champion,
        DividendClass::Contender,
        DividendClass::Challenger,
    ]
    .into_iter()
    .find(|class| years_of_dividends_paid >= class.minimum_years())
    .unwrap_or(DividendClass::Unclassified)
}

/// Sample standard deviation of dividend payments; 0 with fewer than two.
pub fn payment_volatility(dividend_payments: &[f64]) -> f64 {
    sample_std_dev(dividend_payments).unwrap_or(0.0)
}

/// Average dividend paid on dates inside `recession_periods`.
///
/// Returns 0 when either input is empty or no payment falls in a recession.
pub fn recession_performance_score<D: PartialEq>(dividend_history: &[(D, f64)], recession_periods: &[D]) -> f64 {
    if recession_periods.is_empty() {
        return 0.0;
    }
    let recession_dividends: Vec<f64> = dividend_history
        .iter()
        .filter(|(date, _)| recession_periods.contains(date))
        .map(|(_, dividend)| *dividend)
        .collect();
    mean(&recession_dividends).unwrap_or(0.0)
}

/// Change in dividend growth rate between two periods.
///
/// When the previous rate is zero the change is unbounded: `+inf` for a
/// positive current rate, `-inf` otherwise.
pub fn dividend_growth_velocity(current_growth_rate: f64, previous_growth_rate: f64) -> f64 {
    if previous_growth_rate == 0.0 {
        return if current_growth_rate > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }
    current_growth_rate - previous_growth_rate
}
