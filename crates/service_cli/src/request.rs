//! Metric requests.
//!
//! A request is a JSON object tagged by `"metric"` with the operation name
//! in snake_case, carrying that operation's arguments as sibling fields:
//!
//! ```json
//! {"metric": "gordon_growth_model", "next_period_dividend": 2.1,
//!  "required_return": 0.09, "growth_rate": 0.04}
//! ```
//!
//! Arguments that default to a market assumption (risk-free rate, market
//! return) are optional and fall back to the configured [`MarketAssumptions`].
//!
//! Composite metrics (moat score, DDM decompositions, WACC, the IDR split and
//! allowed earnings) also keep the engine's own serialised breakdown, so the
//! JSON output carries fields such as `total_score` and `moat_rating` under
//! their engine names.

use chrono::NaiveDate;
use metrics_core::{Breakdown, DomainError, MarketAssumptions, MetricRecord, MetricResult};
use metrics_engine::quality::durability::DEFAULT_PERSISTENCE_RATE;
use metrics_engine::quality::MoatInputs;
use metrics_engine::risk::{TargetReturn, WaccInputs};
use metrics_engine::safety::FcfeInputs;
use metrics_engine::screening::{ScreeningCriteria, ScreeningMetrics};
use metrics_engine::sector::mlp::IdrSchedule;
use metrics_engine::sector::reit::StraightLineRent;
use metrics_engine::sector::utility::AllowedEarningsInputs;
use metrics_engine::{growth, history, quality, risk, safety, screening, sector, valuation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_persistence() -> f64 {
    DEFAULT_PERSISTENCE_RATE
}

fn default_tier_1() -> f64 {
    IdrSchedule::TIER_1_THRESHOLD
}

fn default_tier_2() -> f64 {
    IdrSchedule::TIER_2_THRESHOLD
}

fn default_tier_3() -> f64 {
    IdrSchedule::TIER_3_THRESHOLD
}

/// A dividend paid on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DatedDividend {
    /// Payment date
    pub date: NaiveDate,
    /// Amount paid
    pub dividend: f64,
}

/// One metric evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MetricRequest {
    // ==========================================================
    // Yield, coverage and payout
    // ==========================================================
    CurrentDividendYield {
        annual_dividend_per_share: f64,
        current_price: f64,
    },
    TrailingTwelveMonthsDividendYield {
        sum_of_last_four_quarters: f64,
        current_price: f64,
    },
    ForwardDividendYield {
        projected_annual_dividend: f64,
        current_price: f64,
    },
    EarningsCoverageRatio {
        earnings_per_share: f64,
        dividend_per_share: f64,
    },
    FreeCashFlowCoverage {
        free_cash_flow: f64,
        total_dividends_paid: f64,
    },
    CashFlowFromOperationsCoverage {
        operating_cash_flow: f64,
        total_dividends_paid: f64,
    },
    FreeCashFlowToEquityCoverage(FcfeInputs<f64>),
    EarningsPayoutRatio {
        dividend_per_share: f64,
        earnings_per_share: f64,
    },
    FreeCashFlowPayoutRatio {
        total_dividends_paid: f64,
        free_cash_flow: f64,
    },
    CashDividendPayoutRatio {
        dividend_per_share: f64,
        operating_cash_flow: f64,
        #[serde(default)]
        preferred_dividends: f64,
    },

    // ==========================================================
    // Growth and discount models
    // ==========================================================
    SimpleAnnualGrowthRate {
        current_dividend: f64,
        prior_year_dividend: f64,
    },
    CompoundAnnualGrowthRate {
        ending_dividend: f64,
        beginning_dividend: f64,
        years: u32,
    },
    WeightedAverageGrowthRate {
        growth_rates: Vec<f64>,
        weights: Vec<f64>,
    },
    GordonGrowthModel {
        next_period_dividend: f64,
        required_return: f64,
        growth_rate: f64,
    },
    TwoStageDdm {
        initial_dividend: f64,
        initial_growth_rate: f64,
        stable_growth_rate: f64,
        required_return: f64,
        initial_periods: u32,
    },
    ThreeStageDdm {
        initial_dividend: f64,
        initial_growth_rate: f64,
        stable_growth_rate: f64,
        required_return: f64,
        initial_periods: u32,
        transition_periods: u32,
        #[serde(default)]
        transition_growth_rate: Option<f64>,
    },
    CurrentYieldOnCost {
        current_annual_dividend: f64,
        original_cost_basis: f64,
    },
    ProjectedYieldOnCost {
        current_annual_dividend: f64,
        original_cost_basis: f64,
        years: u32,
        growth_rate: f64,
    },
    ChowderNumber {
        current_dividend_yield: f64,
        five_year_dividend_growth_rate: f64,
    },

    // ==========================================================
    // Quality and moat
    // ==========================================================
    MoatScore(MoatInputs),
    PersistenceRate {
        roic_history: Vec<f64>,
    },
    FadeRate {
        roic: f64,
        wacc: f64,
        persistence_rate: f64,
    },
    CompetitiveAdvantagePeriod {
        roic: f64,
        wacc: f64,
        #[serde(default = "default_persistence")]
        persistence_rate: f64,
    },
    FreeCashFlowMargin {
        free_cash_flow: f64,
        revenue: f64,
    },
    FreeCashFlowConversionRate {
        free_cash_flow: f64,
        ebitda: f64,
    },
    QualityOfEarningsRatio {
        operating_cash_flow: f64,
        net_income: f64,
    },
    AccrualsRatio {
        net_income: f64,
        operating_cash_flow: f64,
        average_total_assets: f64,
    },
    DebtToCapitalRatio {
        total_debt: f64,
        shareholders_equity: f64,
    },
    NetDebtToEbitda {
        total_debt: f64,
        cash: f64,
        ebitda: f64,
    },
    InterestCoverageRatio {
        ebit: f64,
        interest_expense: f64,
    },
    ReturnOnInvestedCapital {
        net_operating_profit_after_tax: f64,
        invested_capital: f64,
    },
    ReturnOnEquity {
        net_income: f64,
        shareholders_equity: f64,
    },
    SustainableGrowthRate {
        return_on_equity: f64,
        dividend_payout_ratio: f64,
    },

    // ==========================================================
    // Risk-adjusted returns
    // ==========================================================
    DailyRiskFreeRate {
        #[serde(default)]
        annual_risk_free_rate: Option<f64>,
    },
    TotalReturn {
        ending_price: f64,
        beginning_price: f64,
        #[serde(default)]
        dividends: f64,
    },
    AnnualizedReturn {
        ending_price: f64,
        beginning_price: f64,
        #[serde(default)]
        dividends: f64,
        years: f64,
    },
    CostOfEquity {
        beta: f64,
        #[serde(default)]
        risk_free_rate: Option<f64>,
        #[serde(default)]
        expected_market_return: Option<f64>,
    },
    WeightedAverageCostOfCapital(WaccInputs),
    SharpeRatio {
        portfolio_return: f64,
        #[serde(default)]
        risk_free_rate: Option<f64>,
        standard_deviation: f64,
    },
    TreynorRatio {
        portfolio_return: f64,
        #[serde(default)]
        risk_free_rate: Option<f64>,
        beta: f64,
    },
    DownsideDeviation {
        returns: Vec<f64>,
        #[serde(default)]
        target_return: f64,
    },
    SortinoRatio {
        returns: Vec<f64>,
        #[serde(default)]
        risk_free_rate: Option<f64>,
        #[serde(default)]
        target_return: Option<f64>,
    },

    // ==========================================================
    // Sector waterfalls
    // ==========================================================
    FundsFromOperations {
        net_income: f64,
        depreciation: f64,
        amortization: f64,
        #[serde(default)]
        gains_on_asset_sales: f64,
    },
    AdjustedFundsFromOperations {
        funds_from_operations: f64,
        maintenance_capex: f64,
        #[serde(default)]
        straight_line_rent: Option<f64>,
        #[serde(default)]
        rental_revenue: Option<f64>,
    },
    CashAvailableForDistribution {
        adjusted_funds_from_operations: f64,
        recurring_capex: f64,
    },
    NetAssetValuePremiumOrDiscount {
        stock_price: f64,
        nav_per_share: f64,
        net_asset_value: f64,
    },
    DistributableCashFlow {
        net_income: f64,
        depreciation: f64,
        maintenance_capex: f64,
    },
    IncentiveDistributionRightsImpact {
        distributable_cash_flow: f64,
        incentive_distribution_rights: f64,
    },
    IdrImpact {
        distributable_cash_flow_per_unit: f64,
        #[serde(default = "default_tier_1")]
        tier_1_threshold: f64,
        #[serde(default = "default_tier_2")]
        tier_2_threshold: f64,
        #[serde(default = "default_tier_3")]
        tier_3_threshold: f64,
    },
    RateBase {
        net_plant_in_service: f64,
        working_capital: f64,
        deferred_taxes: f64,
    },
    RateBaseGrowth {
        beginning_rate_base: f64,
        ending_rate_base: f64,
    },
    AllowedEarnings(AllowedEarningsInputs),

    // ==========================================================
    // Valuation
    // ==========================================================
    RelativeDividendYield {
        current_yield: f64,
        historical_average_yield: f64,
    },
    YieldSpread {
        dividend_yield: f64,
        ten_year_treasury_yield: f64,
    },
    SectorRelativeYield {
        stock_dividend_yield: f64,
        sector_average_yield: f64,
    },
    PegyRatio {
        pe_ratio: f64,
        expected_growth_rate: f64,
        dividend_yield: f64,
    },
    DividendAdjustedPe {
        pe_ratio: f64,
        dividend_yield: f64,
    },
    PriceToDividendRatio {
        current_share_price: f64,
        annual_dividend: f64,
    },

    // ==========================================================
    // History and trend
    // ==========================================================
    ClassifyDividendStock {
        years_of_dividends_paid: u32,
    },
    PaymentVolatility {
        dividend_payments: Vec<f64>,
    },
    RecessionPerformanceScore {
        dividend_history: Vec<DatedDividend>,
        recession_periods: Vec<NaiveDate>,
    },
    DividendGrowthVelocity {
        current_growth_rate: f64,
        previous_growth_rate: f64,
    },

    // ==========================================================
    // Screening
    // ==========================================================
    Screen {
        metrics: ScreeningMetrics,
        #[serde(default)]
        criteria: ScreeningCriteria,
    },
}

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Headline value, label and named components
    pub result: MetricResult,
    /// Engine breakdown serialised as-is, for composite metrics only
    pub document: Option<Value>,
}

impl Evaluation {
    /// The headline value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.result.value()
    }

    /// The record, if the metric produced one.
    #[inline]
    pub fn as_record(&self) -> Option<&MetricRecord> {
        self.result.as_record()
    }
}

impl From<MetricResult> for Evaluation {
    fn from(result: MetricResult) -> Self {
        Self { result, document: None }
    }
}

impl From<f64> for Evaluation {
    fn from(value: f64) -> Self {
        MetricResult::Value(value).into()
    }
}

impl From<MetricRecord> for Evaluation {
    fn from(record: MetricRecord) -> Self {
        MetricResult::Record(record).into()
    }
}

/// Record only, without the engine document.
fn record<B: Breakdown>(breakdown: &B) -> Evaluation {
    MetricRecord::from_breakdown(breakdown).into()
}

/// Record plus the serialised engine struct.
fn composite<B: Breakdown + Serialize>(breakdown: &B) -> Evaluation {
    Evaluation {
        result: MetricResult::Record(MetricRecord::from_breakdown(breakdown)),
        document: serde_json::to_value(breakdown).ok(),
    }
}

impl MetricRequest {
    /// Evaluates the request against `market` defaults.
    ///
    /// # Errors
    /// Returns the engine's [`DomainError`] when an input lies outside the
    /// formula's domain.
    pub fn evaluate(&self, market: &MarketAssumptions) -> Result<Evaluation, DomainError> {
        use MetricRequest as R;

        let rf = |explicit: Option<f64>| explicit.unwrap_or(market.risk_free_rate);

        let evaluation: Evaluation = match self {
            // Yield, coverage and payout
            R::CurrentDividendYield {
                annual_dividend_per_share,
                current_price,
            } => safety::current_dividend_yield(*annual_dividend_per_share, *current_price)?.into(),
            R::TrailingTwelveMonthsDividendYield {
                sum_of_last_four_quarters,
                current_price,
            } => safety::trailing_twelve_months_dividend_yield(*sum_of_last_four_quarters, *current_price)?.into(),
            R::ForwardDividendYield {
                projected_annual_dividend,
                current_price,
            } => safety::forward_dividend_yield(*projected_annual_dividend, *current_price)?.into(),
            R::EarningsCoverageRatio {
                earnings_per_share,
                dividend_per_share,
            } => safety::earnings_coverage_ratio(*earnings_per_share, *dividend_per_share)?.into(),
            R::FreeCashFlowCoverage {
                free_cash_flow,
                total_dividends_paid,
            } => safety::free_cash_flow_coverage(*free_cash_flow, *total_dividends_paid)?.into(),
            R::CashFlowFromOperationsCoverage {
                operating_cash_flow,
                total_dividends_paid,
            } => safety::cash_flow_from_operations_coverage(*operating_cash_flow, *total_dividends_paid)?.into(),
            R::FreeCashFlowToEquityCoverage(inputs) => safety::free_cash_flow_to_equity_coverage(inputs)?.into(),
            R::EarningsPayoutRatio {
                dividend_per_share,
                earnings_per_share,
            } => safety::earnings_payout_ratio(*dividend_per_share, *earnings_per_share)?.into(),
            R::FreeCashFlowPayoutRatio {
                total_dividends_paid,
                free_cash_flow,
            } => safety::free_cash_flow_payout_ratio(*total_dividends_paid, *free_cash_flow)?.into(),
            R::CashDividendPayoutRatio {
                dividend_per_share,
                operating_cash_flow,
                preferred_dividends,
            } => safety::cash_dividend_payout_ratio(*dividend_per_share, *operating_cash_flow, *preferred_dividends)?
                .into(),

            // Growth and discount models
            R::SimpleAnnualGrowthRate {
                current_dividend,
                prior_year_dividend,
            } => growth::simple_annual_growth_rate(*current_dividend, *prior_year_dividend)?.into(),
            R::CompoundAnnualGrowthRate {
                ending_dividend,
                beginning_dividend,
                years,
            } => growth::compound_annual_growth_rate(*ending_dividend, *beginning_dividend, *years)?.into(),
            R::WeightedAverageGrowthRate { growth_rates, weights } => {
                growth::weighted_average_growth_rate(growth_rates, weights)?.into()
            }
            R::GordonGrowthModel {
                next_period_dividend,
                required_return,
                growth_rate,
            } => growth::gordon_growth_model(*next_period_dividend, *required_return, *growth_rate)?.into(),
            R::TwoStageDdm {
                initial_dividend,
                initial_growth_rate,
                stable_growth_rate,
                required_return,
                initial_periods,
            } => {
                let model = growth::TwoStageDdm::new(
                    *initial_dividend,
                    *initial_growth_rate,
                    *stable_growth_rate,
                    *required_return,
                    *initial_periods,
                )?;
                composite(&model.valuation())
            }
            R::ThreeStageDdm {
                initial_dividend,
                initial_growth_rate,
                stable_growth_rate,
                required_return,
                initial_periods,
                transition_periods,
                transition_growth_rate,
            } => {
                let mut model = growth::ThreeStageDdm::new(
                    *initial_dividend,
                    *initial_growth_rate,
                    *stable_growth_rate,
                    *required_return,
                    *initial_periods,
                    *transition_periods,
                )?;
                if let Some(rate) = transition_growth_rate {
                    model = model.with_transition_growth_rate(*rate);
                }
                composite(&model.valuation())
            }
            R::CurrentYieldOnCost {
                current_annual_dividend,
                original_cost_basis,
            } => growth::current_yield_on_cost(*current_annual_dividend, *original_cost_basis)?.into(),
            R::ProjectedYieldOnCost {
                current_annual_dividend,
                original_cost_basis,
                years,
                growth_rate,
            } => growth::projected_yield_on_cost(*current_annual_dividend, *original_cost_basis, *years, *growth_rate)?
                .into(),
            R::ChowderNumber {
                current_dividend_yield,
                five_year_dividend_growth_rate,
            } => growth::chowder_number(*current_dividend_yield, *five_year_dividend_growth_rate).into(),

            // Quality and moat
            R::MoatScore(inputs) => composite(&quality::calculate_moat_score(inputs)),
            R::PersistenceRate { roic_history } => quality::persistence_rate(roic_history).into(),
            R::FadeRate {
                roic,
                wacc,
                persistence_rate,
            } => quality::fade_rate(*roic, *wacc, *persistence_rate).into(),
            R::CompetitiveAdvantagePeriod {
                roic,
                wacc,
                persistence_rate,
            } => quality::competitive_advantage_period(*roic, *wacc, *persistence_rate)?.into(),
            R::FreeCashFlowMargin { free_cash_flow, revenue } => {
                quality::free_cash_flow_margin(*free_cash_flow, *revenue)?.into()
            }
            R::FreeCashFlowConversionRate { free_cash_flow, ebitda } => {
                quality::free_cash_flow_conversion_rate(*free_cash_flow, *ebitda)?.into()
            }
            R::QualityOfEarningsRatio {
                operating_cash_flow,
                net_income,
            } => quality::quality_of_earnings_ratio(*operating_cash_flow, *net_income)?.into(),
            R::AccrualsRatio {
                net_income,
                operating_cash_flow,
                average_total_assets,
            } => quality::accruals_ratio(*net_income, *operating_cash_flow, *average_total_assets)?.into(),
            R::DebtToCapitalRatio {
                total_debt,
                shareholders_equity,
            } => quality::debt_to_capital_ratio(*total_debt, *shareholders_equity)?.into(),
            R::NetDebtToEbitda {
                total_debt,
                cash,
                ebitda,
            } => quality::net_debt_to_ebitda(*total_debt, *cash, *ebitda)?.into(),
            R::InterestCoverageRatio { ebit, interest_expense } => {
                quality::interest_coverage_ratio(*ebit, *interest_expense)?.into()
            }
            R::ReturnOnInvestedCapital {
                net_operating_profit_after_tax,
                invested_capital,
            } => quality::return_on_invested_capital(*net_operating_profit_after_tax, *invested_capital)?.into(),
            R::ReturnOnEquity {
                net_income,
                shareholders_equity,
            } => quality::return_on_equity(*net_income, *shareholders_equity)?.into(),
            R::SustainableGrowthRate {
                return_on_equity,
                dividend_payout_ratio,
            } => quality::sustainable_growth_rate(*return_on_equity, *dividend_payout_ratio).into(),

            // Risk-adjusted returns
            R::DailyRiskFreeRate { annual_risk_free_rate } => {
                risk::daily_risk_free_rate(rf(*annual_risk_free_rate)).into()
            }
            R::TotalReturn {
                ending_price,
                beginning_price,
                dividends,
            } => risk::total_return(*ending_price, *beginning_price, *dividends)?.into(),
            R::AnnualizedReturn {
                ending_price,
                beginning_price,
                dividends,
                years,
            } => risk::annualized_return(*ending_price, *beginning_price, *dividends, *years)?.into(),
            R::CostOfEquity {
                beta,
                risk_free_rate,
                expected_market_return,
            } => risk::cost_of_equity(
                rf(*risk_free_rate),
                *beta,
                expected_market_return.unwrap_or(market.expected_market_return),
            )
            .into(),
            R::WeightedAverageCostOfCapital(inputs) => {
                composite(&risk::weighted_average_cost_of_capital(inputs, market))
            }
            R::SharpeRatio {
                portfolio_return,
                risk_free_rate,
                standard_deviation,
            } => risk::sharpe_ratio(*portfolio_return, rf(*risk_free_rate), *standard_deviation).into(),
            R::TreynorRatio {
                portfolio_return,
                risk_free_rate,
                beta,
            } => risk::treynor_ratio(*portfolio_return, rf(*risk_free_rate), *beta).into(),
            R::DownsideDeviation { returns, target_return } => {
                risk::downside_deviation(returns, *target_return).into()
            }
            R::SortinoRatio {
                returns,
                risk_free_rate,
                target_return,
            } => risk::sortino_ratio(returns, rf(*risk_free_rate), TargetReturn::from(*target_return)).into(),

            // Sector waterfalls
            R::FundsFromOperations {
                net_income,
                depreciation,
                amortization,
                gains_on_asset_sales,
            } => sector::reit::funds_from_operations(*net_income, *depreciation, *amortization, *gains_on_asset_sales)
                .into(),
            R::AdjustedFundsFromOperations {
                funds_from_operations,
                maintenance_capex,
                straight_line_rent,
                rental_revenue,
            } => sector::reit::adjusted_funds_from_operations(
                *funds_from_operations,
                *maintenance_capex,
                StraightLineRent::from_sources(*straight_line_rent, *rental_revenue),
            )
            .into(),
            R::CashAvailableForDistribution {
                adjusted_funds_from_operations,
                recurring_capex,
            } => sector::reit::cash_available_for_distribution(*adjusted_funds_from_operations, *recurring_capex).into(),
            R::NetAssetValuePremiumOrDiscount {
                stock_price,
                nav_per_share,
                net_asset_value,
            } => sector::reit::net_asset_value_premium_or_discount(*stock_price, *nav_per_share, *net_asset_value)?
                .into(),
            R::DistributableCashFlow {
                net_income,
                depreciation,
                maintenance_capex,
            } => sector::mlp::distributable_cash_flow(*net_income, *depreciation, *maintenance_capex).into(),
            R::IncentiveDistributionRightsImpact {
                distributable_cash_flow,
                incentive_distribution_rights,
            } => sector::mlp::incentive_distribution_rights_impact(
                *distributable_cash_flow,
                *incentive_distribution_rights,
            )
            .into(),
            R::IdrImpact {
                distributable_cash_flow_per_unit,
                tier_1_threshold,
                tier_2_threshold,
                tier_3_threshold,
            } => {
                let schedule = IdrSchedule::with_thresholds(*tier_1_threshold, *tier_2_threshold, *tier_3_threshold)?;
                composite(&schedule.distribute(*distributable_cash_flow_per_unit))
            }
            R::RateBase {
                net_plant_in_service,
                working_capital,
                deferred_taxes,
            } => sector::utility::rate_base(*net_plant_in_service, *working_capital, *deferred_taxes).into(),
            R::RateBaseGrowth {
                beginning_rate_base,
                ending_rate_base,
            } => sector::utility::rate_base_growth(*beginning_rate_base, *ending_rate_base)?.into(),
            R::AllowedEarnings(inputs) => composite(&sector::utility::allowed_earnings(inputs)),

            // Valuation
            R::RelativeDividendYield {
                current_yield,
                historical_average_yield,
            } => valuation::relative_dividend_yield(*current_yield, *historical_average_yield)?.into(),
            R::YieldSpread {
                dividend_yield,
                ten_year_treasury_yield,
            } => valuation::yield_spread(*dividend_yield, *ten_year_treasury_yield).into(),
            R::SectorRelativeYield {
                stock_dividend_yield,
                sector_average_yield,
            } => valuation::sector_relative_yield(*stock_dividend_yield, *sector_average_yield)?.into(),
            R::PegyRatio {
                pe_ratio,
                expected_growth_rate,
                dividend_yield,
            } => valuation::pegy_ratio(*pe_ratio, *expected_growth_rate, *dividend_yield)?.into(),
            R::DividendAdjustedPe {
                pe_ratio,
                dividend_yield,
            } => valuation::dividend_adjusted_pe(*pe_ratio, *dividend_yield).into(),
            R::PriceToDividendRatio {
                current_share_price,
                annual_dividend,
            } => valuation::price_to_dividend_ratio(*current_share_price, *annual_dividend)?.into(),

            // History and trend
            R::ClassifyDividendStock {
                years_of_dividends_paid,
            } => {
                let class = history::classify_dividend_stock(*years_of_dividends_paid);
                MetricRecord::new(f64::from(*years_of_dividends_paid))
                    .with_label(class.as_str())
                    .into()
            }
            R::PaymentVolatility { dividend_payments } => history::payment_volatility(dividend_payments).into(),
            R::RecessionPerformanceScore {
                dividend_history,
                recession_periods,
            } => {
                let dated: Vec<(NaiveDate, f64)> = dividend_history.iter().map(|d| (d.date, d.dividend)).collect();
                history::recession_performance_score(&dated, recession_periods).into()
            }
            R::DividendGrowthVelocity {
                current_growth_rate,
                previous_growth_rate,
            } => history::dividend_growth_velocity(*current_growth_rate, *previous_growth_rate).into(),

            // Screening
            R::Screen { metrics, criteria } => record(&screening::screen(metrics, criteria)),
        };
        Ok(evaluation)
    }
}
