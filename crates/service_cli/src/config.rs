//! fx-risk configuration management.
//!
//! Handles loading of [`RiskConfig`] from TOML files with environment
//! variable override support. Command-line flags are applied on top by the
//! commands themselves.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pricer_core::types::Currency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "fx-risk.toml";

/// Risk aggregation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Currency the portfolio totals are reported in
    pub reporting_currency: Currency,

    /// Valuation date label; today when unset
    pub valuation_date: Option<NaiveDate>,

    /// Decimal places for PV in written reports
    pub price_decimal_places: usize,

    /// Decimal places for Delta and Vega in written reports
    pub greek_decimal_places: usize,

    /// Upper bound on input volatility
    pub max_volatility: f64,

    /// Upper bound on input time to expiry, in years
    pub max_time_to_expiry_years: f64,

    /// Lower bound on input interest rates
    pub min_rate: f64,

    /// Upper bound on input interest rates
    pub max_rate: f64,

    /// Trade count at which pricing switches to rayon
    pub parallel_threshold: usize,

    /// Log level
    pub log_level: String,

    /// File name suffix for per-trade results
    pub trade_sheet: String,

    /// File name suffix for the portfolio summary
    pub summary_sheet: String,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            reporting_currency: Currency::USD,
            valuation_date: None,
            price_decimal_places: 2,
            greek_decimal_places: 2,
            max_volatility: 1.0,
            max_time_to_expiry_years: 10.0,
            min_rate: -0.1,
            max_rate: 1.0,
            parallel_threshold: 100,
            log_level: "info".to_string(),
            trade_sheet: "Trade_Results".to_string(),
            summary_sheet: "Portfolio_Summary".to_string(),
        }
    }
}

impl RiskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the configuration for a CLI run.
    ///
    /// An explicit path must exist; the default path may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(&PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Every override that does not parse is collected into
    /// [`ConfigError::Validation`].
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        if let Some(value) = lookup("FXRISK_REPORTING_CURRENCY") {
            match value.parse() {
                Ok(currency) => self.reporting_currency = currency,
                Err(e) => errors.push(format!("FXRISK_REPORTING_CURRENCY: {}", e)),
            }
        }

        if let Some(value) = lookup("FXRISK_VALUATION_DATE") {
            match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Ok(date) => self.valuation_date = Some(date),
                Err(e) => errors.push(format!(
                    "FXRISK_VALUATION_DATE: '{}' is not a YYYY-MM-DD date ({})",
                    value.trim(),
                    e
                )),
            }
        }

        if let Some(value) = lookup("FXRISK_LOG_LEVEL") {
            self.log_level = value;
        }

        if let Some(value) = lookup("FXRISK_PARALLEL_THRESHOLD") {
            match value.trim().parse() {
                Ok(threshold) => self.parallel_threshold = threshold,
                Err(e) => errors.push(format!(
                    "FXRISK_PARALLEL_THRESHOLD: '{}' is not a count ({})",
                    value.trim(),
                    e
                )),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Returns the configured valuation date, or today's local date
    pub fn valuation_date(&self) -> NaiveDate {
        self.valuation_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.reporting_currency.is_notional_currency() {
            errors.push(format!(
                "Invalid reporting_currency '{}'. Must be USD or JPY",
                self.reporting_currency
            ));
        }

        if self.price_decimal_places > 10 || self.greek_decimal_places > 10 {
            errors.push("decimal places must not exceed 10".to_string());
        }

        if !(self.max_volatility > 0.0) {
            errors.push(format!(
                "max_volatility must be positive, got {}",
                self.max_volatility
            ));
        }

        if !(self.max_time_to_expiry_years > 0.0) {
            errors.push(format!(
                "max_time_to_expiry_years must be positive, got {}",
                self.max_time_to_expiry_years
            ));
        }

        if !(self.min_rate < self.max_rate) {
            errors.push(format!(
                "min_rate ({}) must be below max_rate ({})",
                self.min_rate, self.max_rate
            ));
        }

        if self.trade_sheet.trim().is_empty() || self.summary_sheet.trim().is_empty() {
            errors.push("trade_sheet and summary_sheet cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
