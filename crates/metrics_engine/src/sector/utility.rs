//! Regulated utility metrics.

use metrics_core::types::assumptions::DEFAULT_STATUTORY_TAX_RATE;
use metrics_core::validation::checked_ratio;
use metrics_core::{Breakdown, DomainError};
use num_traits::Float;

/// Rate base: net plant in service + working capital − deferred taxes.
#[inline]
pub fn rate_base<T: Float>(net_plant_in_service: T, working_capital: T, deferred_taxes: T) -> T {
    net_plant_in_service + working_capital - deferred_taxes
}

/// Fractional growth of the rate base between two periods.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `beginning_rate_base == 0`
pub fn rate_base_growth<T: Float>(beginning_rate_base: T, ending_rate_base: T) -> Result<T, DomainError> {
    checked_ratio(
        ending_rate_base - beginning_rate_base,
        beginning_rate_base,
        "beginning_rate_base",
    )
}

#[cfg(feature = "serde")]
fn default_tax_rate() -> f64 {
    DEFAULT_STATUTORY_TAX_RATE
}

/// Regulatory inputs to allowed earnings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllowedEarningsInputs {
    /// Rate base on which the return is allowed
    pub rate_base: f64,
    /// Allowed return on equity
    pub allowed_roe: f64,
    /// Equity share of the regulatory capital structure
    pub equity_ratio: f64,
    /// Embedded cost of debt
    pub cost_of_debt: f64,
    /// Debt share of the regulatory capital structure
    pub debt_ratio: f64,
    /// Tax rate for the debt shield, 21% unless given
    #[cfg_attr(feature = "serde", serde(default = "default_tax_rate"))]
    pub tax_rate: f64,
}

impl AllowedEarningsInputs {
    /// Inputs taxed at the statutory 21%.
    pub fn new(rate_base: f64, allowed_roe: f64, equity_ratio: f64, cost_of_debt: f64, debt_ratio: f64) -> Self {
        Self {
            rate_base,
            allowed_roe,
            equity_ratio,
            cost_of_debt,
            debt_ratio,
            tax_rate: DEFAULT_STATUTORY_TAX_RATE,
        }
    }

    /// Overrides the tax rate.
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }
}

/// Allowed earnings split into equity and debt components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllowedEarnings {
    /// Rate base × allowed ROE × equity ratio
    pub equity_income_portion: f64,
    /// Net income attributable to equity
    pub allowed_net_income: f64,
    /// Equity income plus pre-tax debt cost
    pub total_allowed_return: f64,
    /// Equity income plus after-tax debt cost
    pub wacc_based_return: f64,
}

impl Breakdown for AllowedEarnings {
    fn aggregate(&self) -> f64 {
        self.wacc_based_return
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("equity_income_portion", self.equity_income_portion),
            ("allowed_net_income", self.allowed_net_income),
            ("total_allowed_return", self.total_allowed_return),
            ("wacc_based_return", self.wacc_based_return),
        ]
    }
}

/// Earnings a regulator allows on the rate base.
///
/// # Examples
/// ```
/// use metrics_engine::sector::utility::{allowed_earnings, AllowedEarningsInputs};
///
/// let inputs = AllowedEarningsInputs::new(1000.0, 0.10, 0.5, 0.05, 0.5);
/// let earnings = allowed_earnings(&inputs);
/// assert!((earnings.equity_income_portion - 50.0).abs() < 1e-9);
/// assert!((earnings.wacc_based_return - 69.75).abs() < 1e-9);
/// ```
pub fn allowed_earnings(inputs: &AllowedEarningsInputs) -> AllowedEarnings {
    let equity_income = inputs.rate_base * inputs.allowed_roe * inputs.equity_ratio;
    let debt_cost = inputs.rate_base * inputs.cost_of_debt * inputs.debt_ratio;
    let after_tax_debt_cost = debt_cost * (1.0 - inputs.tax_rate);

    AllowedEarnings {
        equity_income_portion: equity_income,
        allowed_net_income: equity_income,
        total_allowed_return: equity_income + debt_cost,
        wacc_based_return: equity_income + after_tax_debt_cost,
    }
}
