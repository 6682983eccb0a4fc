//! Check command implementation
//!
//! Validates the effective configuration and runs a known-answer evaluation
//! through the engine.

use metrics_core::MarketAssumptions;
use serde_json::json;
use tracing::{error, info};

use crate::config::CliConfig;
use crate::request::MetricRequest;
use crate::{CliError, Result};

const SMOKE_EXPECTED: f64 = 42.0;
const SMOKE_TOLERANCE: f64 = 1e-9;

/// Evaluates a Gordon growth request whose answer is known.
pub fn smoke_check(market: &MarketAssumptions) -> Result<f64> {
    let request: MetricRequest = serde_json::from_value(json!({
        "metric": "gordon_growth_model",
        "next_period_dividend": 2.10,
        "required_return": 0.09,
        "growth_rate": 0.04
    }))?;
    let value = request
        .evaluate(market)
        .map_err(|err| CliError::InvalidArgument(format!("Smoke check failed: {err}")))?
        .value();

    if (value - SMOKE_EXPECTED).abs() > SMOKE_TOLERANCE {
        error!(value, expected = SMOKE_EXPECTED, "Smoke check returned an unexpected value");
        return Err(CliError::InvalidArgument(format!(
            "Smoke check returned {value}, expected {SMOKE_EXPECTED}"
        )));
    }
    Ok(value)
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;
    info!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        risk_free_rate = config.market.risk_free_rate,
        expected_market_return = config.market.expected_market_return,
        statutory_tax_rate = config.market.statutory_tax_rate,
        "Configuration valid"
    );

    let value = smoke_check(&config.market)?;
    info!(value, "Engine smoke check passed");

    println!("divscore {}: configuration OK, engine OK", crate::VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_smoke_check_passes() {
        let value = smoke_check(&MarketAssumptions::default()).unwrap();
        assert_relative_eq!(value, SMOKE_EXPECTED, epsilon = SMOKE_TOLERANCE);
    }

    #[test]
    fn test_check_rejects_invalid_config() {
        let mut config = CliConfig::default();
        config.market.statutory_tax_rate = 1.5;
        assert!(matches!(run(&config), Err(CliError::Config(_))));
    }
}
