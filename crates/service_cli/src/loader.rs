//! CSV trade file loader.
//!
//! Reads the raw trade sheet into [`RawTrade`] records. No business rules
//! are applied here beyond trimming and upper-casing text fields; see
//! [`crate::validator`] for those.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Columns every trade file must provide.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "TradeID",
    "Underlying",
    "Notional",
    "NotionalCurrency",
    "Spot",
    "Strike",
    "Vol",
    "RateDomestic",
    "RateForeign",
    "Expiry",
    "OptionType",
];

/// A trade record as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTrade {
    /// Trade identifier
    #[serde(rename = "TradeID")]
    pub trade_id: String,
    /// Currency pair as written, e.g. "USD/JPY"
    #[serde(rename = "Underlying")]
    pub underlying: String,
    /// Signed notional
    #[serde(rename = "Notional")]
    pub notional: f64,
    /// Notional currency code
    #[serde(rename = "NotionalCurrency")]
    pub notional_currency: String,
    /// Spot rate
    #[serde(rename = "Spot")]
    pub spot: f64,
    /// Strike
    #[serde(rename = "Strike")]
    pub strike: f64,
    /// Volatility (decimal)
    #[serde(rename = "Vol")]
    pub vol: f64,
    /// Domestic rate (decimal)
    #[serde(rename = "RateDomestic")]
    pub rate_domestic: f64,
    /// Foreign rate (decimal)
    #[serde(rename = "RateForeign")]
    pub rate_foreign: f64,
    /// Time to expiry in years
    #[serde(rename = "Expiry")]
    pub expiry: f64,
    /// CALL or PUT
    #[serde(rename = "OptionType")]
    pub option_type: String,
}

impl RawTrade {
    fn normalise(mut self) -> Self {
        self.trade_id = self.trade_id.trim().to_string();
        self.underlying = self.underlying.trim().to_string();
        self.notional_currency = self.notional_currency.trim().to_uppercase();
        self.option_type = self.option_type.trim().to_uppercase();
        self
    }
}

/// Trade file loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Header lacks required columns
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A data row could not be parsed
    #[error("Error parsing row {row}: {message}")]
    Row {
        /// Spreadsheet-style row number (header is row 1)
        row: usize,
        /// Parser message
        message: String,
    },

    /// Underlying CSV or IO failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads trades from a CSV file.
pub fn load_trades(path: &Path) -> Result<Vec<RawTrade>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    info!(path = %path.display(), "Loading trade data");
    let trades = load_trades_from_reader(File::open(path)?)?;
    info!(count = trades.len(), "Loaded trades");
    Ok(trades)
}

/// Loads trades from any CSV source.
pub fn load_trades_from_reader<R: Read>(reader: R) -> Result<Vec<RawTrade>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    reader
        .deserialize::<RawTrade>()
        .enumerate()
        .map(|(idx, record)| {
            record.map(RawTrade::normalise).map_err(|e| {
                debug!(row = idx + 2, error = %e, "Unparsable row");
                LoadError::Row {
                    row: idx + 2,
                    message: e.to_string(),
                }
            })
        })
        .collect()
}
