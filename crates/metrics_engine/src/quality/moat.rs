//! Economic moat scoring.
//!
//! Seven independent sub-scores, each with a point cap and an "ideal"
//! threshold past which it saturates. Level-type metrics scale linearly
//! towards zero below the threshold; stability-type metrics lose points in
//! proportion to their dispersion. No sub-score goes negative.
//!
//! | Component          | Cap | Saturates at            | Below threshold          |
//! |--------------------|-----|-------------------------|--------------------------|
//! | roic_persistence   | 20  | σ(ROIC) < 5%            | 20 − 200σ                |
//! | roic_level         | 20  | mean ROIC > 15%         | mean / 15% × 20          |
//! | margin_stability   | 15  | σ(gross margin) < 2%    | 15 − 500σ                |
//! | market_share       | 15  | share > 30%             | share / 30% × 15         |
//! | switching_costs    | 10  | retention > 90%         | (retention − 50%) × 25   |
//! | intangible_assets  | 10  | intangibles/cap > 30%   | ratio / 30% × 10         |
//! | network_effects    | 10  | users² / costs > 2      | ratio / 2 × 10           |
//!
//! Persistence needs at least five years of ROIC and margin stability at
//! least three years of margins; with shorter histories those components are
//! omitted from the total rather than scored as zero.

use metrics_core::math::stats::{mean, population_std_dev};
use metrics_core::Breakdown;
use tracing::debug;

/// Point cap of the ROIC persistence component.
pub const ROIC_PERSISTENCE_CAP: f64 = 20.0;
/// Point cap of the ROIC level component.
pub const ROIC_LEVEL_CAP: f64 = 20.0;
/// Point cap of the gross-margin stability component.
pub const MARGIN_STABILITY_CAP: f64 = 15.0;
/// Point cap of the market share component.
pub const MARKET_SHARE_CAP: f64 = 15.0;
/// Point cap of the switching costs component.
pub const SWITCHING_COSTS_CAP: f64 = 10.0;
/// Point cap of the intangible assets component.
pub const INTANGIBLE_ASSETS_CAP: f64 = 10.0;
/// Point cap of the network effects component.
pub const NETWORK_EFFECTS_CAP: f64 = 10.0;

/// Minimum ROIC history for the persistence component.
pub const MIN_ROIC_YEARS: usize = 5;
/// Minimum gross-margin history for the stability component.
pub const MIN_MARGIN_YEARS: usize = 3;

/// Score at or above which a moat is rated wide.
pub const WIDE_MOAT_THRESHOLD: f64 = 70.0;
/// Score at or above which a moat is rated narrow.
pub const NARROW_MOAT_THRESHOLD: f64 = 40.0;

const ROIC_STD_TOLERANCE: f64 = 0.05;
const ROIC_STD_PENALTY: f64 = 200.0;
const IDEAL_ROIC: f64 = 0.15;
const MARGIN_STD_TOLERANCE: f64 = 0.02;
const MARGIN_STD_PENALTY: f64 = 500.0;
const IDEAL_MARKET_SHARE: f64 = 0.30;
const IDEAL_RETENTION: f64 = 0.90;
const RETENTION_FLOOR: f64 = 0.5;
const RETENTION_SLOPE: f64 = 25.0;
const IDEAL_INTANGIBLE_RATIO: f64 = 0.3;
const IDEAL_NETWORK_RATIO: f64 = 2.0;

/// Inputs to the moat scorer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoatInputs {
    /// Return on invested capital by year, ideally ten years
    #[cfg_attr(feature = "serde", serde(alias = "roic_10_year"))]
    pub roic_history: Vec<f64>,
    /// Gross margin by year, ideally five years
    #[cfg_attr(feature = "serde", serde(alias = "gross_margins_5_year"))]
    pub gross_margin_history: Vec<f64>,
    /// Market share as a fraction
    pub market_share: f64,
    /// Customer retention as a fraction
    pub customer_retention: f64,
    /// Book value of intangible assets
    pub intangible_assets: f64,
    /// Equity market capitalisation
    pub market_cap: f64,
    /// Growth rate of the user base
    pub user_growth_rate: f64,
    /// Growth rate of the cost base
    pub cost_growth_rate: f64,
}

/// Categorical moat rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoatRating {
    /// Score of at least 70
    #[cfg_attr(feature = "serde", serde(rename = "Wide Moat"))]
    WideMoat,
    /// Score of at least 40
    #[cfg_attr(feature = "serde", serde(rename = "Narrow Moat"))]
    NarrowMoat,
    /// Anything lower
    #[cfg_attr(feature = "serde", serde(rename = "No Moat"))]
    NoMoat,
}

impl MoatRating {
    /// Rating for an aggregate score.
    pub fn from_score(score: f64) -> Self {
        if score >= WIDE_MOAT_THRESHOLD {
            MoatRating::WideMoat
        } else if score >= NARROW_MOAT_THRESHOLD {
            MoatRating::NarrowMoat
        } else {
            MoatRating::NoMoat
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoatRating::WideMoat => "Wide Moat",
            MoatRating::NarrowMoat => "Narrow Moat",
            MoatRating::NoMoat => "No Moat",
        }
    }
}

impl std::fmt::Display for MoatRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven moat sub-scores.
///
/// History-dependent components are `None` when the supplied history was too
/// short to evaluate them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoatScoreComponents {
    /// ROIC persistence, 0..=20
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub roic_persistence: Option<f64>,
    /// ROIC level, 0..=20
    pub roic_level: f64,
    /// Gross-margin stability, 0..=15
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub margin_stability: Option<f64>,
    /// Market share, 0..=15
    pub market_share: f64,
    /// Switching costs, 0..=10
    pub switching_costs: f64,
    /// Intangible assets, 0..=10
    pub intangible_assets: f64,
    /// Network effects, 0..=10
    pub network_effects: f64,
}

impl MoatScoreComponents {
    /// Evaluated components with their stable names.
    pub fn evaluated(&self) -> Vec<(&'static str, f64)> {
        let mut out = Vec::with_capacity(7);
        if let Some(score) = self.roic_persistence {
            out.push(("roic_persistence", score));
        }
        out.push(("roic_level", self.roic_level));
        if let Some(score) = self.margin_stability {
            out.push(("margin_stability", score));
        }
        out.push(("market_share", self.market_share));
        out.push(("switching_costs", self.switching_costs));
        out.push(("intangible_assets", self.intangible_assets));
        out.push(("network_effects", self.network_effects));
        out
    }

    /// Sum of the evaluated components.
    pub fn total(&self) -> f64 {
        self.evaluated().iter().map(|(_, score)| score).sum()
    }

    /// Highest total reachable given which components were evaluated.
    pub fn max_attainable(&self) -> f64 {
        let mut max = ROIC_LEVEL_CAP
            + MARKET_SHARE_CAP
            + SWITCHING_COSTS_CAP
            + INTANGIBLE_ASSETS_CAP
            + NETWORK_EFFECTS_CAP;
        if self.roic_persistence.is_some() {
            max += ROIC_PERSISTENCE_CAP;
        }
        if self.margin_stability.is_some() {
            max += MARGIN_STABILITY_CAP;
        }
        max
    }

    /// Whether all seven components were evaluated.
    pub fn is_complete(&self) -> bool {
        self.roic_persistence.is_some() && self.margin_stability.is_some()
    }
}

/// Moat score with its rating and the components that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoatScore {
    /// Sum of the evaluated components
    pub total_score: f64,
    /// Rating derived from `total_score`
    pub moat_rating: MoatRating,
    /// Individual sub-scores
    pub components: MoatScoreComponents,
}

impl Breakdown for MoatScore {
    fn aggregate(&self) -> f64 {
        self.total_score
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        self.components.evaluated()
    }

    fn label(&self) -> Option<&str> {
        Some(self.moat_rating.as_str())
    }
}

/// Linear score saturating at `cap` once `value` exceeds `ideal`.
fn level_score(value: f64, ideal: f64, cap: f64) -> f64 {
    if value > ideal {
        cap
    } else {
        (value / ideal * cap).max(0.0)
    }
}

/// Full marks below `tolerance`, otherwise `cap − σ · penalty` floored at zero.
fn stability_score(std_dev: f64, tolerance: f64, penalty: f64, cap: f64) -> f64 {
    if std_dev < tolerance {
        cap
    } else {
        (cap - std_dev * penalty).max(0.0)
    }
}

fn roic_persistence_score(roic_history: &[f64]) -> Option<f64> {
    if roic_history.len() < MIN_ROIC_YEARS {
        return None;
    }
    let std_dev = population_std_dev(roic_history)?;
    Some(stability_score(
        std_dev,
        ROIC_STD_TOLERANCE,
        ROIC_STD_PENALTY,
        ROIC_PERSISTENCE_CAP,
    ))
}

fn roic_level_score(roic_history: &[f64]) -> f64 {
    let average = mean(roic_history).unwrap_or(0.0);
    level_score(average, IDEAL_ROIC, ROIC_LEVEL_CAP)
}

fn margin_stability_score(gross_margin_history: &[f64]) -> Option<f64> {
    if gross_margin_history.len() < MIN_MARGIN_YEARS {
        return None;
    }
    let std_dev = population_std_dev(gross_margin_history)?;
    Some(stability_score(
        std_dev,
        MARGIN_STD_TOLERANCE,
        MARGIN_STD_PENALTY,
        MARGIN_STABILITY_CAP,
    ))
}

fn switching_costs_score(customer_retention: f64) -> f64 {
    if customer_retention > IDEAL_RETENTION {
        SWITCHING_COSTS_CAP
    } else {
        ((customer_retention - RETENTION_FLOOR) * RETENTION_SLOPE).max(0.0)
    }
}

fn intangible_assets_score(intangible_assets: f64, market_cap: f64) -> f64 {
    let ratio = if market_cap > 0.0 {
        intangible_assets / market_cap
    } else {
        0.0
    };
    level_score(ratio, IDEAL_INTANGIBLE_RATIO, INTANGIBLE_ASSETS_CAP)
}

fn network_effects_score(user_growth_rate: f64, cost_growth_rate: f64) -> f64 {
    if cost_growth_rate <= 0.0 {
        return 0.0;
    }
    let ratio = user_growth_rate.powi(2) / cost_growth_rate;
    level_score(ratio, IDEAL_NETWORK_RATIO, NETWORK_EFFECTS_CAP).min(NETWORK_EFFECTS_CAP)
}

/// Scores a company's economic moat.
///
/// # Examples
/// ```
/// use metrics_engine::quality::{calculate_moat_score, MoatInputs, MoatRating};
///
/// let inputs = MoatInputs {
///     roic_history: vec![0.20, 0.21, 0.19, 0.22, 0.20, 0.21],
///     gross_margin_history: vec![0.60, 0.61, 0.60, 0.62, 0.61],
///     market_share: 0.35,
///     customer_retention: 0.95,
///     intangible_assets: 40.0,
///     market_cap: 100.0,
///     user_growth_rate: 0.30,
///     cost_growth_rate: 0.04,
/// };
/// let score = calculate_moat_score(&inputs);
/// assert_eq!(score.total_score, 100.0);
/// assert_eq!(score.moat_rating, MoatRating::WideMoat);
/// ```
pub fn calculate_moat_score(inputs: &MoatInputs) -> MoatScore {
    let components = MoatScoreComponents {
        roic_persistence: roic_persistence_score(&inputs.roic_history),
        roic_level: roic_level_score(&inputs.roic_history),
        margin_stability: margin_stability_score(&inputs.gross_margin_history),
        market_share: level_score(inputs.market_share, IDEAL_MARKET_SHARE, MARKET_SHARE_CAP),
        switching_costs: switching_costs_score(inputs.customer_retention),
        intangible_assets: intangible_assets_score(inputs.intangible_assets, inputs.market_cap),
        network_effects: network_effects_score(inputs.user_growth_rate, inputs.cost_growth_rate),
    };

    if components.roic_persistence.is_none() {
        debug!(
            years = inputs.roic_history.len(),
            required = MIN_ROIC_YEARS,
            "ROIC persistence omitted: history too short"
        );
    }
    if components.margin_stability.is_none() {
        debug!(
            years = inputs.gross_margin_history.len(),
            required = MIN_MARGIN_YEARS,
            "Margin stability omitted: history too short"
        );
    }

    let total_score = components.total();
    MoatScore {
        total_score,
        moat_rating: MoatRating::from_score(total_score),
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn strong_inputs() -> MoatInputs {
        MoatInputs {
            roic_history: vec![0.20; 10],
            gross_margin_history: vec![0.55; 5],
            market_share: 0.40,
            customer_retention: 0.95,
            intangible_assets: 50.0,
            market_cap: 100.0,
            user_growth_rate: 0.5,
            cost_growth_rate: 0.1,
        }
    }

    // ==========================================================
    // Component scoring
    // ==========================================================

    #[test]
    fn test_all_components_saturate() {
        let score = calculate_moat_score(&strong_inputs());
        let c = score.components;
        assert_eq!(c.roic_persistence, Some(20.0));
        assert_eq!(c.roic_level, 20.0);
        assert_eq!(c.margin_stability, Some(15.0));
        assert_eq!(c.market_share, 15.0);
        assert_eq!(c.switching_costs, 10.0);
        assert_eq!(c.intangible_assets, 10.0);
        assert_eq!(c.network_effects, 10.0);
        assert_eq!(score.total_score, 100.0);
        assert!(c.is_complete());
    }

    #[test]
    fn test_roic_persistence_penalty() {
        // Alternating 0.1 / 0.3: population sigma = 0.1 -> 20 - 20 = 0
        let history = vec![0.1, 0.3, 0.1, 0.3, 0.1, 0.3];
        assert_relative_eq!(roic_persistence_score(&history).unwrap(), 0.0, epsilon = 1e-9);

        // sigma = 0.06 -> 20 - 12 = 8
        let history = vec![0.14, 0.26, 0.14, 0.26, 0.14, 0.26];
        assert_relative_eq!(roic_persistence_score(&history).unwrap(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roic_level_linear_below_ideal() {
        assert_relative_eq!(roic_level_score(&[0.075, 0.075]), 10.0, epsilon = 1e-12);
        assert_eq!(roic_level_score(&[-0.05, -0.10]), 0.0);
        assert_eq!(roic_level_score(&[]), 0.0);
    }

    #[test]
    fn test_margin_stability_penalty() {
        // sigma = 0.025 -> 15 - 12.5 = 2.5
        let margins = vec![0.375, 0.425, 0.375, 0.425];
        assert_relative_eq!(margin_stability_score(&margins).unwrap(), 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_market_share_linear() {
        assert_relative_eq!(
            level_score(0.15, IDEAL_MARKET_SHARE, MARKET_SHARE_CAP),
            7.5,
            epsilon = 1e-12
        );
        assert_eq!(level_score(-0.1, IDEAL_MARKET_SHARE, MARKET_SHARE_CAP), 0.0);
    }

    #[test]
    fn test_switching_costs() {
        assert_eq!(switching_costs_score(0.95), 10.0);
        assert_relative_eq!(switching_costs_score(0.90), 10.0, epsilon = 1e-12);
        assert_relative_eq!(switching_costs_score(0.70), 5.0, epsilon = 1e-12);
        assert_eq!(switching_costs_score(0.40), 0.0);
    }

    #[test]
    fn test_intangible_assets_non_positive_market_cap() {
        assert_eq!(intangible_assets_score(50.0, 0.0), 0.0);
        assert_eq!(intangible_assets_score(50.0, -10.0), 0.0);
        assert_relative_eq!(intangible_assets_score(15.0, 100.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_network_effects() {
        assert_eq!(network_effects_score(0.5, 0.0), 0.0);
        assert_eq!(network_effects_score(0.5, -0.1), 0.0);
        // 0.2^2 / 0.04 = 1.0 -> 5 points
        assert_relative_eq!(network_effects_score(0.2, 0.04), 5.0, epsilon = 1e-12);
        assert_eq!(network_effects_score(1.0, 0.1), 10.0);
    }

    // ==========================================================
    // History requirements
    // ==========================================================

    #[test]
    fn test_short_histories_omit_components() {
        let mut inputs = strong_inputs();
        inputs.roic_history = vec![0.20; 4];
        inputs.gross_margin_history = vec![0.55; 2];

        let score = calculate_moat_score(&inputs);
        assert!(score.components.roic_persistence.is_none());
        assert!(score.components.margin_stability.is_none());
        assert_eq!(score.total_score, 65.0);
        assert_eq!(score.components.max_attainable(), 65.0);
        assert_eq!(score.moat_rating, MoatRating::NarrowMoat);

        let names: Vec<_> = score.components.evaluated().iter().map(|(n, _)| *n).collect();
        assert!(!names.contains(&"roic_persistence"));
        assert!(!names.contains(&"margin_stability"));
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_minimum_histories_are_evaluated() {
        let mut inputs = strong_inputs();
        inputs.roic_history = vec![0.20; MIN_ROIC_YEARS];
        inputs.gross_margin_history = vec![0.55; MIN_MARGIN_YEARS];
        assert!(calculate_moat_score(&inputs).components.is_complete());
    }

    // ==========================================================
    // Rating
    // ==========================================================

    #[test]
    fn test_rating_cut_points() {
        assert_eq!(MoatRating::from_score(70.0), MoatRating::WideMoat);
        assert_eq!(MoatRating::from_score(69.99), MoatRating::NarrowMoat);
        assert_eq!(MoatRating::from_score(40.0), MoatRating::NarrowMoat);
        assert_eq!(MoatRating::from_score(39.99), MoatRating::NoMoat);
        assert_eq!(MoatRating::NoMoat.to_string(), "No Moat");
    }

    #[test]
    fn test_breakdown_exposes_rating_and_components() {
        let score = calculate_moat_score(&strong_inputs());
        assert_eq!(score.aggregate(), 100.0);
        assert_eq!(score.label(), Some("Wide Moat"));
        assert_eq!(Breakdown::components(&score).len(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialised_keys() {
        let mut inputs = strong_inputs();
        inputs.gross_margin_history.clear();
        let json = serde_json::to_value(calculate_moat_score(&inputs)).unwrap();
        assert_eq!(json["moat_rating"], "Wide Moat");
        assert_eq!(json["total_score"], 85.0);
        assert!(json["components"].get("margin_stability").is_none());
        assert_eq!(json["components"]["roic_persistence"], 20.0);
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        fn inputs_strategy(roic_len: std::ops::Range<usize>, margin_len: std::ops::Range<usize>) -> impl Strategy<Value = MoatInputs> {
            (
                prop::collection::vec(-0.5..0.8_f64, roic_len),
                prop::collection::vec(0.0..1.0_f64, margin_len),
                -0.2..1.2_f64,
                -0.2..1.2_f64,
                0.0..1.0e4_f64,
                -1.0e3..1.0e4_f64,
                -1.0..3.0_f64,
                -0.5..1.0_f64,
            )
                .prop_map(|(roic, margins, share, retention, intangibles, cap, users, costs)| MoatInputs {
                    roic_history: roic,
                    gross_margin_history: margins,
                    market_share: share,
                    customer_retention: retention,
                    intangible_assets: intangibles,
                    market_cap: cap,
                    user_growth_rate: users,
                    cost_growth_rate: costs,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_complete_score_within_bounds(inputs in inputs_strategy(5..12, 3..8)) {
                let score = calculate_moat_score(&inputs);
                prop_assert!(score.components.is_complete());
                prop_assert!(score.total_score >= 0.0);
                prop_assert!(score.total_score <= 100.0);
            }

            #[test]
            fn test_components_within_caps(inputs in inputs_strategy(0..12, 0..8)) {
                let c = calculate_moat_score(&inputs).components;
                prop_assert!((0.0..=ROIC_LEVEL_CAP).contains(&c.roic_level));
                prop_assert!((0.0..=MARKET_SHARE_CAP).contains(&c.market_share));
                prop_assert!((0.0..=SWITCHING_COSTS_CAP).contains(&c.switching_costs));
                prop_assert!((0.0..=INTANGIBLE_ASSETS_CAP).contains(&c.intangible_assets));
                prop_assert!((0.0..=NETWORK_EFFECTS_CAP).contains(&c.network_effects));
                if let Some(p) = c.roic_persistence {
                    prop_assert!((0.0..=ROIC_PERSISTENCE_CAP).contains(&p));
                }
                if let Some(m) = c.margin_stability {
                    prop_assert!((0.0..=MARGIN_STABILITY_CAP).contains(&m));
                }
            }

            #[test]
            fn test_omission_never_raises_maximum(inputs in inputs_strategy(0..5, 0..3)) {
                let score = calculate_moat_score(&inputs);
                prop_assert!(score.components.max_attainable() <= 100.0);
                prop_assert!(score.total_score <= score.components.max_attainable());
            }
        }
    }
}
