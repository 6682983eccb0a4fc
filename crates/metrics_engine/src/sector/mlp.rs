//! Master limited partnership metrics and the incentive distribution rights
//! (IDR) waterfall.
//!
//! Under an IDR agreement the general partner (GP) takes a growing share of
//! each additional dollar of distributable cash flow (DCF) per unit. The
//! waterfall is applied slice by slice: every tier's split applies only to the
//! part of DCF lying between its threshold and the next one.
//!
//! | Tier | DCF per unit      | LP  | GP  |
//! |------|-------------------|-----|-----|
//! | 0    | up to 0.50        | 98% | 2%  |
//! | 1    | 0.50 to 0.60      | 85% | 15% |
//! | 2    | 0.60 to 0.75      | 75% | 25% |
//! | 3    | above 0.75        | 50% | 50% |

use metrics_core::validation::ensure_ascending;
use metrics_core::{Breakdown, DomainError};
use num_traits::Float;

/// Distributable cash flow: net income + depreciation − maintenance capex.
#[inline]
pub fn distributable_cash_flow<T: Float>(net_income: T, depreciation: T, maintenance_capex: T) -> T {
    net_income + depreciation - maintenance_capex
}

/// DCF left for limited partners after the IDR draw.
#[inline]
pub fn incentive_distribution_rights_impact<T: Float>(
    distributable_cash_flow: T,
    incentive_distribution_rights: T,
) -> T {
    distributable_cash_flow - incentive_distribution_rights
}

/// A waterfall breakpoint: DCF above `threshold` is split `lp_share` to the
/// limited partners and the rest to the general partner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterfallTier {
    /// DCF per unit at which this tier starts
    pub threshold: f64,
    /// Fraction of the slice paid to limited partners
    pub lp_share: f64,
}

impl WaterfallTier {
    /// Creates a tier.
    pub fn new(threshold: f64, lp_share: f64) -> Self {
        Self { threshold, lp_share }
    }

    /// Fraction of the slice paid to the general partner.
    pub fn gp_share(&self) -> f64 {
        1.0 - self.lp_share
    }
}

/// An IDR waterfall: a base split plus ascending breakpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct IdrSchedule {
    base_lp_share: f64,
    breakpoints: Vec<WaterfallTier>,
}

impl IdrSchedule {
    /// Default first-tier threshold.
    pub const TIER_1_THRESHOLD: f64 = 0.50;
    /// Default second-tier threshold.
    pub const TIER_2_THRESHOLD: f64 = 0.60;
    /// Default third-tier threshold.
    pub const TIER_3_THRESHOLD: f64 = 0.75;

    const BASE_LP_SHARE: f64 = 0.98;
    const TIER_LP_SHARES: [f64; 3] = [0.85, 0.75, 0.50];

    /// Builds a schedule from a base LP share and its breakpoints.
    ///
    /// # Errors
    /// - `DomainError::NonAscendingThresholds` if breakpoint thresholds are
    ///   not strictly increasing
    pub fn new(base_lp_share: f64, breakpoints: Vec<WaterfallTier>) -> Result<Self, DomainError> {
        let thresholds: Vec<f64> = breakpoints.iter().map(|tier| tier.threshold).collect();
        ensure_ascending(&thresholds)?;
        Ok(Self {
            base_lp_share,
            breakpoints,
        })
    }

    /// The market-standard 98/85/75/50 schedule at custom thresholds.
    ///
    /// # Errors
    /// - `DomainError::NonAscendingThresholds` unless `tier_1 < tier_2 < tier_3`
    pub fn with_thresholds(tier_1: f64, tier_2: f64, tier_3: f64) -> Result<Self, DomainError> {
        let breakpoints = [tier_1, tier_2, tier_3]
            .into_iter()
            .zip(Self::TIER_LP_SHARES)
            .map(|(threshold, lp_share)| WaterfallTier::new(threshold, lp_share))
            .collect();
        Self::new(Self::BASE_LP_SHARE, breakpoints)
    }

    /// The market-standard schedule at 0.50 / 0.60 / 0.75.
    pub fn standard() -> Self {
        Self {
            base_lp_share: Self::BASE_LP_SHARE,
            breakpoints: vec![
                WaterfallTier::new(Self::TIER_1_THRESHOLD, Self::TIER_LP_SHARES[0]),
                WaterfallTier::new(Self::TIER_2_THRESHOLD, Self::TIER_LP_SHARES[1]),
                WaterfallTier::new(Self::TIER_3_THRESHOLD, Self::TIER_LP_SHARES[2]),
            ],
        }
    }

    /// Breakpoints above the base tier.
    pub fn breakpoints(&self) -> &[WaterfallTier] {
        &self.breakpoints
    }

    /// LP share of DCF up to the first breakpoint.
    pub fn base_lp_share(&self) -> f64 {
        self.base_lp_share
    }

    /// Splits `dcf_per_unit` between limited and general partners.
    ///
    /// The base slice is `min(dcf, first threshold)` and is not clamped at
    /// zero, so LP + GP equals the input for any DCF including negative ones.
    pub fn distribute(&self, dcf_per_unit: f64) -> IdrDistribution {
        let dcf = dcf_per_unit;
        let base_slice = match self.breakpoints.first() {
            Some(first) => dcf.min(first.threshold),
            None => dcf,
        };
        let mut lp_distribution = base_slice * self.base_lp_share;
        let mut gp_distribution = base_slice * (1.0 - self.base_lp_share);
        let mut marginal_lp_share = self.base_lp_share;

        for (i, tier) in self.breakpoints.iter().enumerate() {
            if dcf <= tier.threshold {
                break;
            }
            let upper = self
                .breakpoints
                .get(i + 1)
                .map_or(f64::INFINITY, |next| next.threshold);
            let slice = dcf.min(upper) - tier.threshold;
            lp_distribution += slice * tier.lp_share;
            gp_distribution += slice * tier.gp_share();
            marginal_lp_share = tier.lp_share;
        }

        let (lp_percentage, gp_take) = if dcf > 0.0 {
            (lp_distribution / dcf * 100.0, gp_distribution / dcf * 100.0)
        } else {
            (0.0, 0.0)
        };

        IdrDistribution {
            lp_distribution,
            gp_distribution,
            lp_percentage,
            gp_take,
            marginal_lp_share: marginal_lp_share * 100.0,
        }
    }
}

impl Default for IdrSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of running DCF per unit through an IDR waterfall.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdrDistribution {
    /// Amount paid to limited partners
    pub lp_distribution: f64,
    /// Amount paid to the general partner
    pub gp_distribution: f64,
    /// LP share of total DCF, in percent (0 when DCF ≤ 0)
    pub lp_percentage: f64,
    /// GP share of total DCF, in percent (0 when DCF ≤ 0)
    pub gp_take: f64,
    /// LP share of the highest slice reached, in percent
    pub marginal_lp_share: f64,
}

impl Breakdown for IdrDistribution {
    fn aggregate(&self) -> f64 {
        self.lp_distribution
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("lp_distribution", self.lp_distribution),
            ("gp_distribution", self.gp_distribution),
            ("lp_percentage", self.lp_percentage),
            ("gp_take", self.gp_take),
            ("marginal_lp_share", self.marginal_lp_share),
        ]
    }
}

/// Runs `dcf_per_unit` through the standard IDR waterfall.
pub fn idr_impact(dcf_per_unit: f64) -> IdrDistribution {
    IdrSchedule::standard().distribute(dcf_per_unit)
}
