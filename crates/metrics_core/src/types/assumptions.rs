//! Market-wide default assumptions.
//!
//! These values replace process-wide mutable globals: every function that
//! needs a risk-free rate, market return, or statutory tax rate takes it as an
//! explicit argument, and callers wanting the house defaults pass
//! `MarketAssumptions::default()`.

/// Default annual risk-free rate (10-year treasury yield).
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.043;

/// Default expected annual market return.
pub const DEFAULT_EXPECTED_MARKET_RETURN: f64 = 0.10;

/// Default statutory corporate tax rate.
pub const DEFAULT_STATUTORY_TAX_RATE: f64 = 0.21;

/// Immutable market defaults used by the risk-adjusted return calculators.
///
/// # Example
///
/// ```
/// use metrics_core::types::MarketAssumptions;
///
/// let defaults = MarketAssumptions::default();
/// assert_eq!(defaults.risk_free_rate, 0.043);
///
/// let stressed = defaults.with_risk_free_rate(0.05);
/// assert!((stressed.equity_risk_premium() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketAssumptions {
    /// Annual risk-free rate.
    pub risk_free_rate: f64,
    /// Expected annual return of the market portfolio.
    pub expected_market_return: f64,
    /// Tax rate used when the effective rate cannot be derived.
    pub statutory_tax_rate: f64,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            expected_market_return: DEFAULT_EXPECTED_MARKET_RETURN,
            statutory_tax_rate: DEFAULT_STATUTORY_TAX_RATE,
        }
    }
}

impl MarketAssumptions {
    /// Creates assumptions from explicit values.
    pub fn new(risk_free_rate: f64, expected_market_return: f64, statutory_tax_rate: f64) -> Self {
        Self {
            risk_free_rate,
            expected_market_return,
            statutory_tax_rate,
        }
    }

    /// Returns a copy with a different risk-free rate.
    pub fn with_risk_free_rate(self, risk_free_rate: f64) -> Self {
        Self {
            risk_free_rate,
            ..self
        }
    }

    /// Returns a copy with a different expected market return.
    pub fn with_expected_market_return(self, expected_market_return: f64) -> Self {
        Self {
            expected_market_return,
            ..self
        }
    }

    /// Returns a copy with a different statutory tax rate.
    pub fn with_statutory_tax_rate(self, statutory_tax_rate: f64) -> Self {
        Self {
            statutory_tax_rate,
            ..self
        }
    }

    /// Market return in excess of the risk-free rate.
    #[inline]
    pub fn equity_risk_premium(&self) -> f64 {
        self.expected_market_return - self.risk_free_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_values() {
        let a = MarketAssumptions::default();
        assert_eq!(a.risk_free_rate, 0.043);
        assert_eq!(a.expected_market_return, 0.10);
        assert_eq!(a.statutory_tax_rate, 0.21);
    }

    #[test]
    fn test_equity_risk_premium() {
        let a = MarketAssumptions::default();
        assert_relative_eq!(a.equity_risk_premium(), 0.057, epsilon = 1e-12);
    }

    #[test]
    fn test_overrides_leave_original_untouched() {
        let base = MarketAssumptions::default();
        let custom = base
            .with_expected_market_return(0.08)
            .with_statutory_tax_rate(0.25);
        assert_eq!(base.expected_market_return, 0.10);
        assert_eq!(custom.expected_market_return, 0.08);
        assert_eq!(custom.statutory_tax_rate, 0.25);
        assert_eq!(custom.risk_free_rate, base.risk_free_rate);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_uses_defaults() {
        let a: MarketAssumptions = toml::from_str("risk_free_rate = 0.05").unwrap();
        assert_eq!(a.risk_free_rate, 0.05);
        assert_eq!(a.expected_market_return, DEFAULT_EXPECTED_MARKET_RETURN);
        assert_eq!(a.statutory_tax_rate, DEFAULT_STATUTORY_TAX_RATE);
    }
}
