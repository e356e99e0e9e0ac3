//! Report writer.
//!
//! Writes an [`AggregationResult`] as CSV files, a JSON document, or a
//! console table. Numbers are rounded only here, at the output boundary.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use pricer_risk::aggregation::{AggregationResult, ConvertedTrade, PortfolioSummary};
use serde::Serialize;
use tracing::info;

use crate::config::RiskConfig;
use crate::error::Result;

/// Output format for the price command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Trade results, portfolio summary and failed trades as CSV files
    Csv,
    /// Single pretty-printed JSON document
    Json,
    /// Portfolio summary printed to stdout
    Table,
}

/// File name suffix for the failed trade list.
pub const FAILURES_SHEET: &str = "Failures";

/// Writes reports for one input file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    stem: String,
    price_decimal_places: usize,
    greek_decimal_places: usize,
    trade_sheet: String,
    summary_sheet: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a PortfolioSummary,
    trades: &'a [ConvertedTrade],
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    trade_id: &'a str,
    reason: String,
}

impl ReportWriter {
    /// Create a writer placing files named `<stem>_<sheet>` in `output_dir`
    pub fn new(output_dir: impl AsRef<Path>, stem: impl Into<String>, config: &RiskConfig) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            stem: stem.into(),
            price_decimal_places: config.price_decimal_places,
            greek_decimal_places: config.greek_decimal_places,
            trade_sheet: config.trade_sheet.clone(),
            summary_sheet: config.summary_sheet.clone(),
        }
    }

    fn path(&self, suffix: &str, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.{}", self.stem, suffix, extension))
    }

    fn price(&self, value: f64) -> String {
        format!("{:.*}", self.price_decimal_places, value)
    }

    fn greek(&self, value: f64) -> String {
        format!("{:.*}", self.greek_decimal_places, value)
    }

    /// Write the trade results, portfolio summary and failed trade CSV files.
    ///
    /// Returns the paths written in that order. The failures file is
    /// always written, with only its header when every trade succeeded.
    pub fn write_csv(&self, result: &AggregationResult) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let trades_path = self.path(&self.trade_sheet, "csv");
        let mut writer = csv::Writer::from_path(&trades_path)?;
        writer.write_record([
            "TradeID",
            "CurrencyPair",
            "OptionType",
            "Strike",
            "Notional",
            "NotionalCurrency",
            "Spot",
            "TimeToExpiry",
            "Volatility",
            "PV",
            "Delta",
            "Vega",
            "ReportingCurrency",
            "FxFactor",
            "PVReporting",
            "DeltaReporting",
            "VegaReporting",
        ])?;
        for converted in &result.converted {
            let priced = &converted.priced;
            let trade = &priced.trade;
            writer.write_record([
                trade.trade_id.to_string(),
                trade.currency_pair.to_string(),
                trade.option_type.to_string(),
                trade.strike.to_string(),
                trade.notional.to_string(),
                trade.notional_currency.to_string(),
                trade.spot.to_string(),
                trade.time_to_expiry.to_string(),
                trade.volatility.to_string(),
                self.price(priced.present_value),
                self.greek(priced.delta),
                self.greek(priced.vega),
                converted.reporting_currency.to_string(),
                converted.factor.to_string(),
                self.price(converted.present_value),
                self.greek(converted.delta),
                self.greek(converted.vega),
            ])?;
        }
        writer.flush()?;

        let summary_path = self.path(&self.summary_sheet, "csv");
        let mut writer = csv::Writer::from_path(&summary_path)?;
        writer.write_record(["Metric", "Value"])?;
        for (metric, value) in self.summary_rows(&result.summary) {
            writer.write_record([metric, value])?;
        }
        writer.flush()?;

        let failures_path = self.path(FAILURES_SHEET, "csv");
        let mut writer = csv::Writer::from_path(&failures_path)?;
        writer.write_record(["TradeID", "Reason"])?;
        for failure in &result.failures {
            writer.write_record([failure.trade_id.as_str(), failure.reason.to_string().as_str()])?;
        }
        writer.flush()?;

        info!(
            trades = %trades_path.display(),
            summary = %summary_path.display(),
            failures = result.failures.len(),
            "CSV reports written"
        );
        Ok(vec![trades_path, summary_path, failures_path])
    }

    /// Write `{ summary, trades, failures }` as pretty JSON.
    pub fn write_json(&self, result: &AggregationResult) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report = JsonReport {
            summary: &result.summary,
            trades: &result.converted,
            failures: result
                .failures
                .iter()
                .map(|f| JsonFailure {
                    trade_id: f.trade_id.as_str(),
                    reason: f.reason.to_string(),
                })
                .collect(),
        };

        let path = self.path("results", "json");
        let file = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(file, &report)?;

        info!(path = %path.display(), "JSON report written");
        Ok(path)
    }

    fn summary_rows(&self, summary: &PortfolioSummary) -> Vec<(String, String)> {
        let ccy = summary.reporting_currency;
        vec![
            ("Total Trades".to_string(), summary.trade_count.to_string()),
            (format!("Total PV ({})", ccy), self.price(summary.total_present_value)),
            (format!("Total Delta ({})", ccy), self.greek(summary.total_delta)),
            (format!("Total Vega ({})", ccy), self.greek(summary.total_vega)),
            ("Failed Trades".to_string(), summary.failed_trade_count.to_string()),
            ("Valuation Date".to_string(), summary.valuation_date.to_string()),
        ]
    }

    /// Render the portfolio summary as a console table.
    ///
    /// Numeric values are shown with thousands separators.
    pub fn render_table(&self, summary: &PortfolioSummary) -> String {
        let rows: Vec<(String, String)> = self
            .summary_rows(summary)
            .into_iter()
            .map(|(metric, value)| match value.parse::<f64>() {
                Ok(_) => (metric, group_thousands(&value)),
                Err(_) => (metric, value),
            })
            .collect();
        let label_width = rows.iter().map(|(m, _)| m.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        let rule = "=".repeat(label_width + value_width + 3);

        let body: String = rows
            .iter()
            .map(|(metric, value)| {
                format!(
                    "{:<lw$} : {:>vw$}\n",
                    metric,
                    value,
                    lw = label_width,
                    vw = value_width
                )
            })
            .collect();

        format!("{rule}\nPORTFOLIO SUMMARY\n{rule}\n{body}{rule}\n")
    }
}

/// Inserts `,` between groups of three integer digits of a formatted number.
fn group_thousands(value: &str) -> String {
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
