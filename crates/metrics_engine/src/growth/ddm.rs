//! Dividend discount models.
//!
//! ## Mathematical Formulas
//!
//! **Gordon**: P = D₁ / (r − g)
//!
//! **Multi-stage**: P = Σₜ Dₜ / (1 + r)ᵗ + TV / (1 + r)ᴺ
//!
//! Where:
//! - Dₜ grows at the rate of the stage containing period t (periods are
//!   indexed from 1 and each stage includes its final period)
//! - N is the last explicit period
//! - TV = Gordon(D_N · (1 + g_stable), r, g_stable), the value at N of the
//!   dividends from N + 1 onwards
//!
//! TV = D_N · (1 + g_s) / (r − g_s), so a two-stage model with equal rates
//! equals Gordon on D₀ · (1 + g).
//!
//! Explicit horizons are limited to `i32::MAX` periods.
//!
//! The three-stage transition applies one fixed rate to every transition
//! period; rates are not blended between stages.

use metrics_core::validation::{checked_horizon, ensure_period_exponent, ensure_return_exceeds_growth};
use metrics_core::{Breakdown, DomainError};
use num_traits::Float;

/// Gordon growth model.
///
/// # Arguments
/// * `next_period_dividend` - Dividend expected one period from now (D₁)
/// * `required_return` - Discount rate (r)
/// * `growth_rate` - Perpetual growth rate (g)
///
/// # Errors
/// - `DomainError::ReturnNotAboveGrowth` if `required_return <= growth_rate`
///
/// # Examples
/// ```
/// use metrics_engine::growth::gordon_growth_model;
///
/// let price = gordon_growth_model(2.10_f64, 0.09, 0.04).unwrap();
/// assert!((price - 42.0).abs() < 1e-9);
///
/// assert!(gordon_growth_model(2.10_f64, 0.04, 0.04).is_err());
/// ```
pub fn gordon_growth_model<T: Float>(
    next_period_dividend: T,
    required_return: T,
    growth_rate: T,
) -> Result<T, DomainError> {
    let spread = ensure_return_exceeds_growth(required_return, growth_rate)?;
    Ok(next_period_dividend / spread)
}

/// Present-value decomposition of a multi-stage DDM.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DdmValuation<T> {
    /// PV of the high-growth stage dividends
    pub initial_stage_pv: T,
    /// PV of the transition stage dividends (zero for two-stage)
    pub transition_stage_pv: T,
    /// Terminal value at the end of the explicit horizon (undiscounted)
    pub terminal_value: T,
    /// Terminal value discounted to period zero
    pub terminal_pv: T,
    /// Sum of all discounted components
    pub present_value: T,
}

impl Breakdown for DdmValuation<f64> {
    fn aggregate(&self) -> f64 {
        self.present_value
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("initial_stage_pv", self.initial_stage_pv),
            ("transition_stage_pv", self.transition_stage_pv),
            ("terminal_value", self.terminal_value),
            ("terminal_pv", self.terminal_pv),
        ]
    }
}

/// Discounted dividends of one stage.
///
/// Returns `(present value, dividend in the stage's last period)`.
/// `offset + periods` must not exceed `i32::MAX`; the constructors check it.
fn discount_stage<T: Float>(
    base_dividend: T,
    growth_rate: T,
    required_return: T,
    offset: u32,
    periods: u32,
) -> (T, T) {
    let growth = T::one() + growth_rate;
    let discount = T::one() + required_return;

    let mut dividend = base_dividend;
    let mut pv = T::zero();
    for t in 1..=periods {
        dividend = dividend * growth;
        pv = pv + dividend / discount.powi((offset + t) as i32);
    }
    (pv, dividend)
}

/// Terminal value at period `horizon` and its discounted value.
fn terminal<T: Float>(
    last_dividend: T,
    stable_growth_rate: T,
    required_return: T,
    spread: T,
    horizon: u32,
) -> (T, T) {
    let terminal_value = last_dividend * (T::one() + stable_growth_rate) / spread;
    let terminal_pv = terminal_value / (T::one() + required_return).powi(horizon as i32);
    (terminal_value, terminal_pv)
}

/// Two-stage dividend discount model.
///
/// An explicit high-growth stage of `initial_periods` followed by perpetual
/// growth at `stable_growth_rate`.
///
/// # Examples
/// ```
/// use metrics_engine::growth::{gordon_growth_model, TwoStageDdm};
///
/// // Equal growth in both stages collapses to Gordon on D₁ = D₀(1 + g)
/// let model = TwoStageDdm::new(2.0_f64, 0.05, 0.05, 0.09, 5).unwrap();
/// let gordon = gordon_growth_model(2.0 * 1.05, 0.09, 0.05).unwrap();
/// assert!((model.present_value() - gordon).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStageDdm<T: Float> {
    initial_dividend: T,
    initial_growth_rate: T,
    stable_growth_rate: T,
    required_return: T,
    initial_periods: u32,
    spread: T,
}

impl<T: Float> TwoStageDdm<T> {
    /// Creates a validated two-stage model.
    ///
    /// # Arguments
    /// * `initial_dividend` - Most recent dividend (D₀)
    /// * `initial_growth_rate` - Growth during the explicit stage
    /// * `stable_growth_rate` - Perpetual growth after the explicit stage
    /// * `required_return` - Discount rate
    /// * `initial_periods` - Length of the explicit stage
    ///
    /// # Errors
    /// - `DomainError::ReturnNotAboveGrowth` if `required_return <= stable_growth_rate`
    /// - `DomainError::PeriodsOutOfRange` if `initial_periods > i32::MAX`
    pub fn new(
        initial_dividend: T,
        initial_growth_rate: T,
        stable_growth_rate: T,
        required_return: T,
        initial_periods: u32,
    ) -> Result<Self, DomainError> {
        let spread = ensure_return_exceeds_growth(required_return, stable_growth_rate)?;
        ensure_period_exponent("initial_periods", initial_periods)?;
        Ok(Self {
            initial_dividend,
            initial_growth_rate,
            stable_growth_rate,
            required_return,
            initial_periods,
            spread,
        })
    }

    /// Returns the explicit-stage length.
    #[inline]
    pub fn initial_periods(&self) -> u32 {
        self.initial_periods
    }

    /// Full present-value decomposition.
    pub fn valuation(&self) -> DdmValuation<T> {
        let (initial_stage_pv, last_dividend) = discount_stage(
            self.initial_dividend,
            self.initial_growth_rate,
            self.required_return,
            0,
            self.initial_periods,
        );
        let (terminal_value, terminal_pv) = terminal(
            last_dividend,
            self.stable_growth_rate,
            self.required_return,
            self.spread,
            self.initial_periods,
        );
        DdmValuation {
            initial_stage_pv,
            transition_stage_pv: T::zero(),
            terminal_value,
            terminal_pv,
            present_value: initial_stage_pv + terminal_pv,
        }
    }

    /// Intrinsic value per share.
    #[inline]
    pub fn present_value(&self) -> T {
        self.valuation().present_value
    }
}

/// Three-stage dividend discount model.
///
/// High growth for `initial_periods`, then a transition stage of
/// `transition_periods` at a single fixed rate, then perpetual growth at
/// `stable_growth_rate`. Unless overridden with
/// [`with_transition_growth_rate`](Self::with_transition_growth_rate), the
/// transition stage grows at the stable rate.
///
/// # Examples
/// ```
/// use metrics_engine::growth::{ThreeStageDdm, TwoStageDdm};
///
/// let three = ThreeStageDdm::new(1.0_f64, 0.12, 0.04, 0.10, 5, 0).unwrap();
/// let two = TwoStageDdm::new(1.0_f64, 0.12, 0.04, 0.10, 5).unwrap();
/// assert!((three.present_value() - two.present_value()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeStageDdm<T: Float> {
    initial_dividend: T,
    initial_growth_rate: T,
    transition_growth_rate: T,
    stable_growth_rate: T,
    required_return: T,
    initial_periods: u32,
    transition_periods: u32,
    horizon: u32,
    spread: T,
}

impl<T: Float> ThreeStageDdm<T> {
    /// Creates a validated three-stage model.
    ///
    /// # Errors
    /// - `DomainError::ReturnNotAboveGrowth` if `required_return <= stable_growth_rate`
    /// - `DomainError::PeriodsOutOfRange` if `initial_periods + transition_periods`
    ///   exceeds `i32::MAX`
    pub fn new(
        initial_dividend: T,
        initial_growth_rate: T,
        stable_growth_rate: T,
        required_return: T,
        initial_periods: u32,
        transition_periods: u32,
    ) -> Result<Self, DomainError> {
        let spread = ensure_return_exceeds_growth(required_return, stable_growth_rate)?;
        let horizon = checked_horizon("horizon", initial_periods, transition_periods)?;
        Ok(Self {
            initial_dividend,
            initial_growth_rate,
            transition_growth_rate: stable_growth_rate,
            stable_growth_rate,
            required_return,
            initial_periods,
            transition_periods,
            horizon,
            spread,
        })
    }

    /// Sets the fixed growth rate applied to every transition period.
    pub fn with_transition_growth_rate(mut self, transition_growth_rate: T) -> Self {
        self.transition_growth_rate = transition_growth_rate;
        self
    }

    /// Returns the transition-stage growth rate.
    #[inline]
    pub fn transition_growth_rate(&self) -> T {
        self.transition_growth_rate
    }

    /// Total explicit horizon (initial + transition periods).
    #[inline]
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Full present-value decomposition.
    pub fn valuation(&self) -> DdmValuation<T> {
        let (initial_stage_pv, initial_last) = discount_stage(
            self.initial_dividend,
            self.initial_growth_rate,
            self.required_return,
            0,
            self.initial_periods,
        );
        let (transition_stage_pv, transition_last) = discount_stage(
            initial_last,
            self.transition_growth_rate,
            self.required_return,
            self.initial_periods,
            self.transition_periods,
        );
        let (terminal_value, terminal_pv) = terminal(
            transition_last,
            self.stable_growth_rate,
            self.required_return,
            self.spread,
            self.horizon(),
        );
        DdmValuation {
            initial_stage_pv,
            transition_stage_pv,
            terminal_value,
            terminal_pv,
            present_value: initial_stage_pv + transition_stage_pv + terminal_pv,
        }
    }

    /// Intrinsic value per share.
    #[inline]
    pub fn present_value(&self) -> T {
        self.valuation().present_value
    }
}
