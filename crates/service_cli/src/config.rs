//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use metrics_core::MarketAssumptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "DIVSCORE_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_OUTPUT_FORMAT: &str = "DIVSCORE_OUTPUT_FORMAT";
/// Environment variable overriding the risk-free rate.
pub const ENV_RISK_FREE_RATE: &str = "DIVSCORE_RISK_FREE_RATE";
/// Environment variable overriding the expected market return.
pub const ENV_MARKET_RETURN: &str = "DIVSCORE_MARKET_RETURN";
/// Environment variable overriding the statutory tax rate.
pub const ENV_STATUTORY_TAX_RATE: &str = "DIVSCORE_STATUTORY_TAX_RATE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, table")]
    InvalidOutputFormat(String),

    #[error("Invalid {name}: {value}. {reason}")]
    InvalidRate {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI, from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format for evaluation results
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Market-wide defaults passed to the risk calculators
    pub market: MarketAssumptions,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            output_format: OutputFormat::default(),
            market: MarketAssumptions::default(),
        }
    }
}

fn parse_rate(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidRate {
        name,
        value: raw.to_string(),
        reason: "Must be a decimal number",
    })
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields whose environment variable is set.
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        if let Some(rate) = lookup(ENV_RISK_FREE_RATE) {
            self.market.risk_free_rate = parse_rate("risk-free rate", &rate)?;
        }
        if let Some(rate) = lookup(ENV_MARKET_RETURN) {
            self.market.expected_market_return = parse_rate("expected market return", &rate)?;
        }
        if let Some(rate) = lookup(ENV_STATUTORY_TAX_RATE) {
            self.market.statutory_tax_rate = parse_rate("statutory tax rate", &rate)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let market = &self.market;
        for (name, value) in [
            ("risk-free rate", market.risk_free_rate),
            ("expected market return", market.expected_market_return),
            ("statutory tax rate", market.statutory_tax_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidRate {
                    name,
                    value: value.to_string(),
                    reason: "Must be finite",
                });
            }
        }

        if !(0.0..1.0).contains(&market.statutory_tax_rate) {
            return Err(ConfigError::InvalidRate {
                name: "statutory tax rate",
                value: market.statutory_tax_rate.to_string(),
                reason: "Must be in [0, 1)",
            });
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose && self.log_level > LogLevel::Debug {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        if let Some(rate) = cli.risk_free_rate {
            self.market.risk_free_rate = rate;
        }
        if let Some(rate) = cli.market_return {
            self.market.expected_market_return = rate;
        }
        if let Some(rate) = cli.statutory_tax_rate {
            self.market.statutory_tax_rate = rate;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to at least debug
    pub verbose: bool,
    /// Output format override
    pub output_format: Option<String>,
    /// Risk-free rate override
    pub risk_free_rate: Option<f64>,
    /// Expected market return override
    pub market_return: Option<f64>,
    /// Statutory tax rate override
    pub statutory_tax_rate: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    // Override with environment variables
    config.apply_env(lookup)?;

    // Override with CLI arguments
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.market, MarketAssumptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("csv").is_err());
        assert_eq!(format!("{}", OutputFormat::Table), "table");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            output_format = "table"

            [market]
            risk_free_rate = 0.045
            expected_market_return = 0.095
            statutory_tax_rate = 0.25
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.market, MarketAssumptions::new(0.045, 0.095, 0.25));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            [market]
            risk_free_rate = 0.05
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.market.risk_free_rate, 0.05);
        assert_eq!(config.market.expected_market_return, 0.10);
    }

    #[test]
    fn test_toml_rejects_unknown_log_level() {
        assert!(toml::from_str::<CliConfig>(r#"log_level = "chatty""#).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("divscore-config-{}.toml", std::process::id()));
        std::fs::write(&path, "output_format = \"table\"\n[market]\nstatutory_tax_rate = 0.3\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.market.statutory_tax_rate, 0.3);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(CliConfig::from_file(&path), Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_validate_tax_rate() {
        let mut config = CliConfig::default();
        config.market.statutory_tax_rate = 1.0;
        assert!(config.validate().is_err());

        config.market.statutory_tax_rate = -0.1;
        assert!(config.validate().is_err());

        config.market.statutory_tax_rate = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_non_finite_rate() {
        let mut config = CliConfig::default();
        config.market.risk_free_rate = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("risk-free rate"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[(ENV_RISK_FREE_RATE, "0.05"), (ENV_OUTPUT_FORMAT, "table")]))
            .unwrap();
        assert_eq!(config.market.risk_free_rate, 0.05);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.market.expected_market_return, 0.10);
    }

    #[test]
    fn test_env_rejects_malformed_rate() {
        let mut config = CliConfig::default();
        let err = config.apply_env(env(&[(ENV_MARKET_RETURN, "ten percent")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRate { name: "expected market return", .. }));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("info".to_string()),
            output_format: Some("table".to_string()),
            risk_free_rate: Some(0.03),
            ..CliArgs::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.market.risk_free_rate, 0.03);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            verbose: true,
            ..CliArgs::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        // An explicit trace level is not lowered by --verbose
        let mut config = CliConfig {
            log_level: LogLevel::Trace,
            ..CliConfig::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_build_config_priority() {
        let path = std::env::temp_dir().join(format!("divscore-priority-{}.toml", std::process::id()));
        std::fs::write(&path, "[market]\nrisk_free_rate = 0.01\nexpected_market_return = 0.08\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            risk_free_rate: Some(0.03),
            ..CliArgs::default()
        };
        let config = build_config_with_env(
            &cli,
            env(&[(ENV_RISK_FREE_RATE, "0.02"), (ENV_MARKET_RETURN, "0.09")]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        // CLI beats env beats file
        assert_eq!(config.market.risk_free_rate, 0.03);
        // Env beats file
        assert_eq!(config.market.expected_market_return, 0.09);
        // Default where nobody overrides
        assert_eq!(config.market.statutory_tax_rate, 0.21);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with_env(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_build_config_rejects_invalid_cli_tax_rate() {
        let cli = CliArgs {
            statutory_tax_rate: Some(1.5),
            ..CliArgs::default()
        };
        assert!(build_config_with_env(&cli, env(&[])).is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidOutputFormat("xml".to_string());
        assert!(err.to_string().contains("json, table"));
    }
}
