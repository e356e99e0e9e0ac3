//! Price command implementation
//!
//! Runs the full pipeline: load, validate, price, aggregate, write.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pricer_core::types::Currency;
use pricer_risk::aggregation::AggregationResult;
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::portfolio::{value_portfolio, ValuationContext};
use tracing::{info, warn};

use super::load_validated;
use crate::config::RiskConfig;
use crate::error::{CliError, Result};
use crate::writer::{OutputFormat, ReportWriter};

/// Options for the price command
#[derive(Debug, Clone)]
pub struct PriceOptions {
    /// Trade file
    pub input: PathBuf,
    /// Output directory; defaults to the input file's directory
    pub output_dir: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Overrides the configured reporting currency
    pub reporting_currency: Option<Currency>,
    /// Overrides the configured valuation date
    pub valuation_date: Option<NaiveDate>,
    /// Fail when any trade cannot be priced or converted
    pub strict: bool,
}

impl PriceOptions {
    /// Options with defaults for everything but the input file
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            format: OutputFormat::Csv,
            reporting_currency: None,
            valuation_date: None,
            strict: false,
        }
    }
}

/// Run the price command
pub fn run(options: &PriceOptions, config: &RiskConfig) -> Result<AggregationResult> {
    let mut config = config.clone();
    if let Some(currency) = options.reporting_currency {
        config.reporting_currency = currency;
    }
    if let Some(date) = options.valuation_date {
        config.valuation_date = Some(date);
    }
    config.validate()?;

    info!(
        input = %options.input.display(),
        format = ?options.format,
        currency = %config.reporting_currency,
        "Starting pricing"
    );

    let trades = load_validated(&options.input, &config)?;

    let context = ValuationContext::new(config.reporting_currency, config.valuation_date())
        .with_parallel(ParallelConfig {
            parallel_threshold: config.parallel_threshold,
            ..ParallelConfig::default()
        });
    let result = value_portfolio(&trades, &context);

    for failure in &result.failures {
        warn!(trade_id = %failure.trade_id, reason = %failure.reason, "Trade failed");
    }

    let writer = ReportWriter::new(output_dir(options), file_stem(&options.input)?, &config);
    match options.format {
        OutputFormat::Csv => {
            for path in writer.write_csv(&result)? {
                println!("Results written to: {}", path.display());
            }
            print!("{}", writer.render_table(&result.summary));
        }
        OutputFormat::Json => {
            let path = writer.write_json(&result)?;
            println!("Results written to: {}", path.display());
        }
        OutputFormat::Table => print!("{}", writer.render_table(&result.summary)),
    }

    if options.strict && result.summary.has_failures() {
        return Err(CliError::FailedTrades(result.summary.failed_trade_count));
    }

    info!("Pricing complete");
    Ok(result)
}

fn output_dir(options: &PriceOptions) -> PathBuf {
    options.output_dir.clone().unwrap_or_else(|| {
        options
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    })
}

fn file_stem(input: &Path) -> Result<String> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidArgument(format!("Invalid input path: {}", input.display())))
}
