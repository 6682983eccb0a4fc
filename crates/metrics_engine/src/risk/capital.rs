//! Cost of capital.
//!
//! ## Formulas
//!
//! **CAPM**: r_e = r_f + β (E[r_m] − r_f)
//!
//! **WACC**: E/V · r_e + D/V · r_d · (1 − t)
//!
//! where E is market capitalisation, D the book value of debt standing in
//! for its market value, and V = E + D.

use metrics_core::{Breakdown, MarketAssumptions};
use num_traits::Float;
use tracing::debug;

/// Expected return on equity under the capital asset pricing model.
///
/// # Examples
/// ```
/// use metrics_engine::risk::cost_of_equity;
///
/// let r_e = cost_of_equity(0.04_f64, 1.2, 0.09);
/// assert!((r_e - 0.10).abs() < 1e-12);
/// ```
#[inline]
pub fn cost_of_equity<T: Float>(risk_free_rate: T, beta: T, expected_market_return: T) -> T {
    risk_free_rate + beta * (expected_market_return - risk_free_rate)
}

/// Company figures entering the WACC.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaccInputs {
    /// Equity beta
    pub beta: f64,
    /// Annual interest expense
    pub interest_expense: f64,
    /// Total debt at book value
    pub total_debt: f64,
    /// Shares outstanding
    pub shares_outstanding: f64,
    /// Share price
    pub stock_price: f64,
    /// Income tax expense
    pub income_tax_expense: f64,
    /// Income before tax
    pub pre_tax_income: f64,
}

impl WaccInputs {
    /// Market value of equity.
    pub fn market_value_of_equity(&self) -> f64 {
        self.shares_outstanding * self.stock_price
    }

    /// Pre-tax cost of debt; zero when there is no debt.
    pub fn cost_of_debt(&self) -> f64 {
        if self.total_debt > 0.0 {
            self.interest_expense / self.total_debt
        } else {
            0.0
        }
    }

    /// Effective tax rate, falling back to `statutory_tax_rate` when pre-tax
    /// income is not positive.
    pub fn effective_tax_rate(&self, statutory_tax_rate: f64) -> f64 {
        if self.pre_tax_income > 0.0 {
            self.income_tax_expense / self.pre_tax_income
        } else {
            statutory_tax_rate
        }
    }
}

/// WACC together with every intermediate it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaccBreakdown {
    /// CAPM cost of equity
    pub cost_of_equity: f64,
    /// Pre-tax cost of debt
    pub cost_of_debt: f64,
    /// E / V
    pub equity_weight: f64,
    /// D / V
    pub debt_weight: f64,
    /// Tax rate applied to the debt shield
    pub effective_tax_rate: f64,
    /// Weighted average cost of capital
    pub wacc: f64,
}

impl Breakdown for WaccBreakdown {
    fn aggregate(&self) -> f64 {
        self.wacc
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("cost_of_equity", self.cost_of_equity),
            ("cost_of_debt", self.cost_of_debt),
            ("equity_weight", self.equity_weight),
            ("debt_weight", self.debt_weight),
            ("effective_tax_rate", self.effective_tax_rate),
            ("wacc", self.wacc),
        ]
    }
}

/// Market-value-weighted average cost of capital.
///
/// Falls back to the pure cost of equity when the firm's total value is not
/// positive, and to the statutory tax rate when pre-tax income is not
/// positive.
///
/// # Examples
/// ```
/// use metrics_engine::risk::{weighted_average_cost_of_capital, WaccInputs};
/// use metrics_engine::MarketAssumptions;
///
/// let inputs = WaccInputs {
///     beta: 1.0,
///     interest_expense: 50.0,
///     total_debt: 1000.0,
///     shares_outstanding: 100.0,
///     stock_price: 30.0,
///     income_tax_expense: 50.0,
///     pre_tax_income: 200.0,
/// };
/// let market = MarketAssumptions::new(0.04, 0.10, 0.21);
/// let result = weighted_average_cost_of_capital(&inputs, &market);
/// // 0.75 * 10% + 0.25 * 5% * (1 - 25%)
/// assert!((result.wacc - 0.084375).abs() < 1e-12);
/// ```
pub fn weighted_average_cost_of_capital(inputs: &WaccInputs, market: &MarketAssumptions) -> WaccBreakdown {
    let cost_of_equity = cost_of_equity(market.risk_free_rate, inputs.beta, market.expected_market_return);
    let cost_of_debt = inputs.cost_of_debt();

    if inputs.pre_tax_income <= 0.0 {
        debug!(
            pre_tax_income = inputs.pre_tax_income,
            statutory_tax_rate = market.statutory_tax_rate,
            "Non-positive pre-tax income, using statutory tax rate"
        );
    }
    let effective_tax_rate = inputs.effective_tax_rate(market.statutory_tax_rate);

    let market_value_of_equity = inputs.market_value_of_equity();
    let market_value_of_debt = inputs.total_debt;
    let total_value = market_value_of_equity + market_value_of_debt;

    if total_value <= 0.0 {
        debug!(total_value, "Non-positive firm value, WACC equals cost of equity");
        return WaccBreakdown {
            cost_of_equity,
            cost_of_debt,
            equity_weight: 1.0,
            debt_weight: 0.0,
            effective_tax_rate,
            wacc: cost_of_equity,
        };
    }

    let equity_weight = market_value_of_equity / total_value;
    let debt_weight = market_value_of_debt / total_value;
    let wacc = equity_weight * cost_of_equity + debt_weight * cost_of_debt * (1.0 - effective_tax_rate);

    WaccBreakdown {
        cost_of_equity,
        cost_of_debt,
        equity_weight,
        debt_weight,
        effective_tax_rate,
        wacc,
    }
}
