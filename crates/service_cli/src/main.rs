//! fx-risk - FX Options Portfolio Risk Aggregator
//!
//! # Commands
//!
//! - `fx-risk price <INPUT>` - Price a trade file and aggregate portfolio risk
//! - `fx-risk validate <INPUT>` - Load and validate a trade file only
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this binary orchestrates the pricer
//! crates to provide a command-line interface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pricer_core::types::Currency;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::commands::{self, price::PriceOptions};
use service_cli::writer::OutputFormat;
use service_cli::RiskConfig;

/// FX Options Portfolio Risk Aggregator
#[derive(Parser)]
#[command(name = "fx-risk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: fx-risk.toml, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a trade file and aggregate portfolio risk
    Price {
        /// Path to the trade file (CSV)
        input: PathBuf,

        /// Output directory (default: next to the input file)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Reporting currency (USD or JPY)
        #[arg(long)]
        reporting_currency: Option<Currency>,

        /// Valuation date (YYYY-MM-DD)
        #[arg(long)]
        valuation_date: Option<NaiveDate>,

        /// Exit with an error if any trade fails pricing or conversion
        #[arg(long)]
        strict: bool,
    },

    /// Load and validate a trade file without pricing it
    Validate {
        /// Path to the trade file (CSV)
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = RiskConfig::resolve(cli.config.as_deref())?.with_env_override()?;

    // RUST_LOG wins over the configured level; --verbose wins over both
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "Configuration resolved");
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            input,
            output_dir,
            format,
            reporting_currency,
            valuation_date,
            strict,
        } => {
            let options = PriceOptions {
                input,
                output_dir,
                format,
                reporting_currency,
                valuation_date,
                strict,
            };
            commands::price::run(&options, &config)?;
        }
        Commands::Validate { input } => {
            config.validate()?;
            commands::validate::run(&input, &config)?;
        }
    }

    Ok(())
}
