//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

/// Validation helpers are accessible and chain with `?`.
#[test]
fn test_validation_module_exports() {
    use metrics_core::types::DomainError;
    use metrics_core::validation::{
        checked_ratio, ensure_ascending, ensure_nonzero, ensure_positive_log_base,
        ensure_return_exceeds_growth, ensure_same_length,
    };

    fn spread_over_price(r: f64, g: f64, price: f64) -> Result<f64, DomainError> {
        let spread = ensure_return_exceeds_growth(r, g)?;
        checked_ratio(spread, price, "price")
    }

    assert!((spread_over_price(0.09, 0.04, 2.0).unwrap() - 0.025).abs() < 1e-12);
    assert!(spread_over_price(0.09, 0.04, 0.0).is_err());
    assert!(spread_over_price(0.03, 0.04, 2.0).is_err());

    assert!(ensure_nonzero("x", 1.0_f64).is_ok());
    assert!(ensure_positive_log_base(0.5_f64).is_ok());
    assert!(ensure_ascending(&[1.0, 2.0]).is_ok());
    assert!(ensure_same_length(("a", &[1.0][..]), ("b", &[1.0][..])).is_ok());
}

/// Root re-exports match their module paths.
#[test]
fn test_root_reexports() {
    use metrics_core::{Breakdown, DomainError, MarketAssumptions, MetricRecord, MetricResult};

    struct Flat;
    impl Breakdown for Flat {
        fn aggregate(&self) -> f64 {
            1.0
        }
        fn components(&self) -> Vec<(&'static str, f64)> {
            vec![("only", 1.0)]
        }
    }

    let result: MetricResult = MetricRecord::from_breakdown(&Flat).into();
    assert_eq!(result.value(), 1.0);
    assert_eq!(MarketAssumptions::default().statutory_tax_rate, 0.21);
    assert_eq!(DomainError::CONDITION, "InvalidDomain");
}

/// Statistics helpers are accessible via absolute path.
#[test]
fn test_stats_module_exports() {
    use metrics_core::math::stats::{mean, population_std_dev, sample_std_dev};

    let data = [1.0, 3.0];
    assert_eq!(mean(&data), Some(2.0));
    assert_eq!(population_std_dev(&data), Some(1.0));
    assert!((sample_std_dev(&data).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
}
