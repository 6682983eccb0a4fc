//! Defaults command implementation
//!
//! Prints the market assumptions in effect after merging file, environment
//! and command-line configuration.

use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::output::{draw_table, number_to_json};
use crate::Result;

/// Renders the effective market assumptions in the configured format.
pub fn render_defaults(config: &CliConfig) -> Result<String> {
    let market = &config.market;
    let entries = [
        ("risk_free_rate", market.risk_free_rate),
        ("expected_market_return", market.expected_market_return),
        ("statutory_tax_rate", market.statutory_tax_rate),
        ("equity_risk_premium", market.equity_risk_premium()),
    ];

    match config.output_format {
        OutputFormat::Json => {
            let obj: serde_json::Map<String, serde_json::Value> = entries
                .iter()
                .map(|(name, value)| (name.to_string(), number_to_json(*value)))
                .collect();
            Ok(serde_json::to_string_pretty(&obj)?)
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|(name, value)| vec![name.to_string(), format!("{value:.4}")])
                .collect();
            Ok(draw_table(&["Assumption", "Value"], &rows))
        }
    }
}

/// Run the defaults command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Printing effective market assumptions");
    println!("{}", render_defaults(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_core::MarketAssumptions;

    #[test]
    fn test_json_defaults() {
        let config = CliConfig::default();
        let rendered = render_defaults(&config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["risk_free_rate"], 0.043);
        assert_eq!(json["statutory_tax_rate"], 0.21);
    }

    #[test]
    fn test_table_defaults_reflect_overrides() {
        let config = CliConfig {
            output_format: OutputFormat::Table,
            market: MarketAssumptions::new(0.05, 0.11, 0.25),
            ..CliConfig::default()
        };
        let rendered = render_defaults(&config).unwrap();
        assert!(rendered.contains("0.0500"));
        assert!(rendered.contains("0.2500"));
        assert!(rendered.contains("equity_risk_premium"));
    }
}
