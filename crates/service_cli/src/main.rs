//! divscore - dividend equity metrics from the command line
//!
//! Configuration is merged from defaults, an optional TOML file,
//! `DIVSCORE_*` environment variables and command-line flags, in increasing
//! priority. Logs go to stderr so that results on stdout stay machine-readable.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs};
use service_cli::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dividend equity metrics CLI
#[derive(Parser, Debug)]
#[command(name = "divscore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Annual risk-free rate used when a request omits one
    #[arg(long, global = true)]
    risk_free_rate: Option<f64>,

    /// Expected market return used by CAPM-based metrics
    #[arg(long, global = true)]
    market_return: Option<f64>,

    /// Statutory tax rate used when pre-tax income is not positive
    #[arg(long, global = true)]
    tax_rate: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a file of metric requests
    Eval {
        /// Path to a JSON request file (object or array of objects)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (json, table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Print the effective market assumptions
    Defaults {
        /// Output format (json, table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check configuration and run an engine smoke check
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let output_format = match &self.command {
            Commands::Eval { format, .. } | Commands::Defaults { format } => format.clone(),
            Commands::Check => None,
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            output_format,
            risk_free_rate: self.risk_free_rate,
            market_return: self.market_return,
            statutory_tax_rate: self.tax_rate,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    tracing::debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        risk_free_rate = config.market.risk_free_rate,
        expected_market_return = config.market.expected_market_return,
        statutory_tax_rate = config.market.statutory_tax_rate,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Eval { input, .. } => commands::eval::run(&input, &config),
        Commands::Defaults { .. } => commands::defaults::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
