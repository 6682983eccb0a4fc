//! Four-phase dividend stock screen.
//!
//! A candidate passes when every criterion of every phase passes:
//!
//! | Phase     | Criterion                     | Default |
//! |-----------|-------------------------------|---------|
//! | Safety    | FCF payout ratio (%)          | < 80    |
//! | Safety    | Net debt / EBITDA             | < 3.0   |
//! | Safety    | Interest coverage             | > 3.0   |
//! | Safety    | Dividend coverage             | > 1.5   |
//! | Quality   | ROIC                          | > 12%   |
//! | Quality   | ROE                           | > 15%   |
//! | Quality   | Free cash flow                | > 0     |
//! | Quality   | Quality of earnings           | > 1.0   |
//! | Growth    | 5-year dividend CAGR          | > 3%    |
//! | Growth    | Sustainable growth rate       | > 0     |
//! | Valuation | Relative dividend yield       | > 1.0   |
//! | Valuation | PEGY ratio                    | < 1.5   |

use metrics_core::Breakdown;
use tracing::debug;

/// Screening phase, in the order phases are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScreeningPhase {
    /// Dividend safety
    Safety,
    /// Business quality
    Quality,
    /// Dividend growth
    Growth,
    /// Valuation
    Valuation,
}

/// Thresholds applied by [`screen`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreeningCriteria {
    /// Upper bound on FCF payout ratio, in percent
    pub max_free_cash_flow_payout_ratio: f64,
    /// Upper bound on net debt / EBITDA
    pub max_net_debt_to_ebitda: f64,
    /// Lower bound on interest coverage
    pub min_interest_coverage: f64,
    /// Lower bound on dividend coverage
    pub min_dividend_coverage: f64,
    /// Lower bound on ROIC
    pub min_return_on_invested_capital: f64,
    /// Lower bound on ROE
    pub min_return_on_equity: f64,
    /// Lower bound on quality of earnings
    pub min_quality_of_earnings: f64,
    /// Lower bound on five-year dividend CAGR
    pub min_dividend_growth_rate: f64,
    /// Lower bound on yield relative to its history
    pub min_relative_dividend_yield: f64,
    /// Upper bound on PEGY
    pub max_pegy_ratio: f64,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            max_free_cash_flow_payout_ratio: 80.0,
            max_net_debt_to_ebitda: 3.0,
            min_interest_coverage: 3.0,
            min_dividend_coverage: 1.5,
            min_return_on_invested_capital: 0.12,
            min_return_on_equity: 0.15,
            min_quality_of_earnings: 1.0,
            min_dividend_growth_rate: 0.03,
            min_relative_dividend_yield: 1.0,
            max_pegy_ratio: 1.5,
        }
    }
}

/// Pre-computed metrics for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreeningMetrics {
    /// FCF payout ratio, in percent
    pub free_cash_flow_payout_ratio: f64,
    /// Net debt / EBITDA
    pub net_debt_to_ebitda: f64,
    /// EBIT / interest expense
    pub interest_coverage: f64,
    /// Earnings or FCF over dividends
    pub dividend_coverage: f64,
    /// Return on invested capital
    pub return_on_invested_capital: f64,
    /// Return on equity
    pub return_on_equity: f64,
    /// Free cash flow
    pub free_cash_flow: f64,
    /// Operating cash flow / net income
    pub quality_of_earnings: f64,
    /// Five-year dividend CAGR
    pub dividend_growth_rate: f64,
    /// ROE × retention
    pub sustainable_growth_rate: f64,
    /// Yield relative to its history
    pub relative_dividend_yield: f64,
    /// PEGY ratio
    pub pegy_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Below,
    Above,
}

/// Outcome of a single criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CriterionOutcome {
    /// Phase the criterion belongs to
    pub phase: ScreeningPhase,
    /// Stable criterion name
    pub name: &'static str,
    /// Candidate value
    pub value: f64,
    /// Threshold it was compared against
    pub threshold: f64,
    /// Whether the criterion passed
    pub passed: bool,
}

impl CriterionOutcome {
    fn evaluate(phase: ScreeningPhase, name: &'static str, value: f64, bound: Bound, threshold: f64) -> Self {
        let passed = match bound {
            Bound::Below => value < threshold,
            Bound::Above => value > threshold,
        };
        Self {
            phase,
            name,
            value,
            threshold,
            passed,
        }
    }
}

/// Every criterion outcome for a candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScreeningReport {
    /// Outcomes in phase order
    pub outcomes: Vec<CriterionOutcome>,
}

impl ScreeningReport {
    /// Whether every criterion passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Whether every criterion of `phase` passed.
    pub fn phase_passed(&self, phase: ScreeningPhase) -> bool {
        self.outcomes.iter().filter(|o| o.phase == phase).all(|o| o.passed)
    }

    /// Criteria that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CriterionOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Number of criteria that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }
}

impl Breakdown for ScreeningReport {
    fn aggregate(&self) -> f64 {
        self.passed_count() as f64
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        self.outcomes
            .iter()
            .map(|o| (o.name, if o.passed { 1.0 } else { 0.0 }))
            .collect()
    }

    fn label(&self) -> Option<&str> {
        Some(if self.passed() { "Pass" } else { "Fail" })
    }
}

/// Screens a candidate against `criteria`.
///
/// Comparisons are strict; a value equal to its threshold fails.
///
/// # Examples
/// ```
/// use metrics_engine::screening::{screen, ScreeningCriteria, ScreeningMetrics, ScreeningPhase};
///
/// let metrics = ScreeningMetrics {
///     free_cash_flow_payout_ratio: 60.0,
///     net_debt_to_ebitda: 2.0,
///     interest_coverage: 8.0,
///     dividend_coverage: 2.0,
///     return_on_invested_capital: 0.18,
///     return_on_equity: 0.22,
///     free_cash_flow: 1500.0,
///     quality_of_earnings: 1.2,
///     dividend_growth_rate: 0.07,
///     sustainable_growth_rate: 0.09,
///     relative_dividend_yield: 1.1,
///     pegy_ratio: 2.0,
/// };
/// let report = screen(&metrics, &ScreeningCriteria::default());
/// assert!(report.phase_passed(ScreeningPhase::Safety));
/// assert!(!report.phase_passed(ScreeningPhase::Valuation));
/// assert!(!report.passed());
/// ```
pub fn screen(metrics: &ScreeningMetrics, criteria: &ScreeningCriteria) -> ScreeningReport {
    use Bound::{Above, Below};
    use ScreeningPhase::{Growth, Quality, Safety, Valuation};

    let m = metrics;
    let c = criteria;
    let outcomes = vec![
        CriterionOutcome::evaluate(
            Safety,
            "free_cash_flow_payout_ratio",
            m.free_cash_flow_payout_ratio,
            Below,
            c.max_free_cash_flow_payout_ratio,
        ),
        CriterionOutcome::evaluate(Safety, "net_debt_to_ebitda", m.net_debt_to_ebitda, Below, c.max_net_debt_to_ebitda),
        CriterionOutcome::evaluate(Safety, "interest_coverage", m.interest_coverage, Above, c.min_interest_coverage),
        CriterionOutcome::evaluate(Safety, "dividend_coverage", m.dividend_coverage, Above, c.min_dividend_coverage),
        CriterionOutcome::evaluate(
            Quality,
            "return_on_invested_capital",
            m.return_on_invested_capital,
            Above,
            c.min_return_on_invested_capital,
        ),
        CriterionOutcome::evaluate(Quality, "return_on_equity", m.return_on_equity, Above, c.min_return_on_equity),
        CriterionOutcome::evaluate(Quality, "free_cash_flow", m.free_cash_flow, Above, 0.0),
        CriterionOutcome::evaluate(
            Quality,
            "quality_of_earnings",
            m.quality_of_earnings,
            Above,
            c.min_quality_of_earnings,
        ),
        CriterionOutcome::evaluate(
            Growth,
            "dividend_growth_rate",
            m.dividend_growth_rate,
            Above,
            c.min_dividend_growth_rate,
        ),
        CriterionOutcome::evaluate(Growth, "sustainable_growth_rate", m.sustainable_growth_rate, Above, 0.0),
        CriterionOutcome::evaluate(
            Valuation,
            "relative_dividend_yield",
            m.relative_dividend_yield,
            Above,
            c.min_relative_dividend_yield,
        ),
        CriterionOutcome::evaluate(Valuation, "pegy_ratio", m.pegy_ratio, Below, c.max_pegy_ratio),
    ];

    let report = ScreeningReport { outcomes };
    for failure in report.failures() {
        debug!(
            criterion = failure.name,
            value = failure.value,
            threshold = failure.threshold,
            "Screening criterion failed"
        );
    }
    report
}
