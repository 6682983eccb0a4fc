//! Cash-flow quality, balance-sheet strength and return-on-capital ratios.

use metrics_core::validation::checked_ratio;
use metrics_core::DomainError;
use num_traits::Float;

/// Free cash flow as a fraction of revenue.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `revenue == 0`
pub fn free_cash_flow_margin<T: Float>(free_cash_flow: T, revenue: T) -> Result<T, DomainError> {
    checked_ratio(free_cash_flow, revenue, "revenue")
}

/// Free cash flow as a fraction of EBITDA.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `ebitda == 0`
pub fn free_cash_flow_conversion_rate<T: Float>(
    free_cash_flow: T,
    ebitda: T,
) -> Result<T, DomainError> {
    checked_ratio(free_cash_flow, ebitda, "ebitda")
}

/// Operating cash flow over net income.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `net_income == 0`
pub fn quality_of_earnings_ratio<T: Float>(
    operating_cash_flow: T,
    net_income: T,
) -> Result<T, DomainError> {
    checked_ratio(operating_cash_flow, net_income, "net_income")
}

/// Accruals (net income − operating cash flow) over average total assets.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `average_total_assets == 0`
pub fn accruals_ratio<T: Float>(
    net_income: T,
    operating_cash_flow: T,
    average_total_assets: T,
) -> Result<T, DomainError> {
    checked_ratio(
        net_income - operating_cash_flow,
        average_total_assets,
        "average_total_assets",
    )
}

/// Debt over total capital (debt + equity).
///
/// # Errors
/// - `DomainError::ZeroDenominator` if debt plus equity is zero
pub fn debt_to_capital_ratio<T: Float>(
    total_debt: T,
    shareholders_equity: T,
) -> Result<T, DomainError> {
    checked_ratio(
        total_debt,
        total_debt + shareholders_equity,
        "total_debt + shareholders_equity",
    )
}

/// Net debt (debt − cash) over EBITDA.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `ebitda == 0`
pub fn net_debt_to_ebitda<T: Float>(total_debt: T, cash: T, ebitda: T) -> Result<T, DomainError> {
    checked_ratio(total_debt - cash, ebitda, "ebitda")
}

/// EBIT over interest expense.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `interest_expense == 0`
pub fn interest_coverage_ratio<T: Float>(ebit: T, interest_expense: T) -> Result<T, DomainError> {
    checked_ratio(ebit, interest_expense, "interest_expense")
}

/// NOPAT over invested capital.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `invested_capital == 0`
pub fn return_on_invested_capital<T: Float>(
    net_operating_profit_after_tax: T,
    invested_capital: T,
) -> Result<T, DomainError> {
    checked_ratio(
        net_operating_profit_after_tax,
        invested_capital,
        "invested_capital",
    )
}

/// Net income over shareholders' equity.
///
/// # Errors
/// - `DomainError::ZeroDenominator` if `shareholders_equity == 0`
pub fn return_on_equity<T: Float>(net_income: T, shareholders_equity: T) -> Result<T, DomainError> {
    checked_ratio(net_income, shareholders_equity, "shareholders_equity")
}

/// Sustainable growth: ROE × retention ratio (1 − payout).
///
/// `dividend_payout_ratio` is a fraction, not a percentage.
///
/// # Examples
/// ```
/// use metrics_engine::quality::sustainable_growth_rate;
///
/// assert!((sustainable_growth_rate(0.18_f64, 0.40) - 0.108).abs() < 1e-12);
/// ```
#[inline]
pub fn sustainable_growth_rate<T: Float>(return_on_equity: T, dividend_payout_ratio: T) -> T {
    return_on_equity * (T::one() - dividend_payout_ratio)
}
