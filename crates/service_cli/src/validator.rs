//! Raw trade validation.
//!
//! Applies the input business rules to [`RawTrade`] records and builds
//! [`ValidatedTrade`]s. Each rejected record produces one message of the
//! form `Trade <id>: <reason>`.

use std::collections::HashSet;

use pricer_core::types::{Currency, CurrencyPair};
use pricer_models::instruments::fx::{OptionType, ValidatedTrade};
use tracing::{debug, info};

use crate::config::RiskConfig;
use crate::loader::RawTrade;

/// Validation outcome for a batch of raw trades.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Trades that passed every check, in input order
    pub valid: Vec<ValidatedTrade>,
    /// One message per rejected trade
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns whether every trade passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Input business rules.
#[derive(Debug, Clone)]
pub struct Validator {
    max_volatility: f64,
    max_time_to_expiry_years: f64,
    min_rate: f64,
    max_rate: f64,
}

impl Validator {
    /// Builds a validator from the configured bounds.
    pub fn new(config: &RiskConfig) -> Self {
        Self {
            max_volatility: config.max_volatility,
            max_time_to_expiry_years: config.max_time_to_expiry_years,
            min_rate: config.min_rate,
            max_rate: config.max_rate,
        }
    }

    /// Validates every record; never stops at the first failure.
    pub fn validate(&self, raw_trades: &[RawTrade]) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut seen = HashSet::new();

        for raw in raw_trades {
            let result = if seen.insert(raw.trade_id.as_str()) {
                self.validate_one(raw)
            } else {
                Err(format!("Trade {}: duplicate TradeID", raw.trade_id))
            };
            match result {
                Ok(trade) => report.valid.push(trade),
                Err(message) => {
                    debug!(trade_id = %raw.trade_id, %message, "Trade rejected");
                    report.errors.push(message);
                }
            }
        }

        info!(
            valid = report.valid.len(),
            rejected = report.errors.len(),
            "Validation complete"
        );
        report
    }

    fn validate_one(&self, raw: &RawTrade) -> Result<ValidatedTrade, String> {
        let reject = |reason: String| format!("Trade {}: {}", raw.trade_id, reason);

        if raw.trade_id.is_empty() {
            return Err(reject("TradeID is empty".to_string()));
        }

        let option_type: OptionType = match raw.option_type.as_str() {
            "CALL" => OptionType::Call,
            "PUT" => OptionType::Put,
            other => {
                return Err(reject(format!(
                    "Invalid OptionType '{}'. Must be one of: CALL, PUT",
                    other
                )))
            }
        };

        let currency_pair = parse_underlying(&raw.underlying).ok_or_else(|| {
            reject(format!(
                "Invalid Underlying '{}'. Must be one of: {}",
                raw.underlying,
                supported_pairs()
            ))
        })?;

        let notional_currency: Currency = raw
            .notional_currency
            .parse()
            .map_err(|e| reject(format!("Invalid NotionalCurrency: {}", e)))?;

        if !(raw.expiry > 0.0) {
            return Err(reject(format!("Expiry must be positive, got {}", raw.expiry)));
        }
        if raw.expiry > self.max_time_to_expiry_years {
            return Err(reject(format!(
                "Expiry {} exceeds maximum of {} years",
                raw.expiry, self.max_time_to_expiry_years
            )));
        }

        if !(raw.vol >= 0.0 && raw.vol <= self.max_volatility) {
            return Err(reject(format!(
                "Vol {} outside [0, {}]",
                raw.vol, self.max_volatility
            )));
        }

        for (name, rate) in [("RateDomestic", raw.rate_domestic), ("RateForeign", raw.rate_foreign)] {
            if !(rate >= self.min_rate && rate <= self.max_rate) {
                return Err(reject(format!(
                    "{} {} outside [{}, {}]",
                    name, rate, self.min_rate, self.max_rate
                )));
            }
        }

        ValidatedTrade::builder(raw.trade_id.as_str())
            .currency_pair(currency_pair)
            .option_type(option_type)
            .strike(raw.strike)
            .notional(raw.notional)
            .notional_currency(notional_currency)
            .spot(raw.spot)
            .volatility(raw.vol)
            .rate_domestic(raw.rate_domestic)
            .rate_foreign(raw.rate_foreign)
            .time_to_expiry(raw.expiry)
            .build()
            .map_err(|e| e.to_string())
    }
}

/// Normalises an underlying ("usd/jpy", "USD JPY") and accepts supported pairs only.
fn parse_underlying(underlying: &str) -> Option<CurrencyPair> {
    underlying
        .parse::<CurrencyPair>()
        .ok()
        .filter(CurrencyPair::is_supported)
}

fn supported_pairs() -> String {
    CurrencyPair::SUPPORTED
        .iter()
        .map(|pair| pair.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
