//! Validated FX option trade.

use pricer_core::types::{Currency, CurrencyPair, TradeId};

use super::error::{FieldViolation, TradeValidationError};
use super::option::OptionType;

/// A European FX option trade whose schema invariants hold.
///
/// Instances are only produced by [`ValidatedTradeBuilder::build`], which
/// guarantees:
///
/// - `strike > 0` and `spot > 0`
/// - `volatility >= 0`
/// - `time_to_expiry > 0`
/// - `notional != 0`
/// - `notional_currency` is USD or JPY
/// - every numeric field is finite
///
/// # Conventions
///
/// - Spot and strike are quoted as units of quote currency per 1 unit of base
/// - Rates are continuously compounded decimals (0.05 = 5%)
/// - Volatility is a decimal (0.20 = 20%)
/// - A negative notional denotes a short position
///
/// Fields are public for read access and for constructing edge cases in
/// tests; the pricing engine re-checks the bounds that gate formula validity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatedTrade {
    /// Unique identifier within a batch.
    pub trade_id: TradeId,
    /// Underlying currency pair (BASE/QUOTE).
    pub currency_pair: CurrencyPair,
    /// Call or Put.
    pub option_type: OptionType,
    /// Strike price (quote per base).
    pub strike: f64,
    /// Signed notional amount.
    pub notional: f64,
    /// Currency the notional (and therefore every priced metric) is expressed in.
    pub notional_currency: Currency,
    /// Spot exchange rate (quote per base).
    pub spot: f64,
    /// Volatility.
    pub volatility: f64,
    /// Domestic (quote currency) rate.
    pub rate_domestic: f64,
    /// Foreign (base currency) rate.
    pub rate_foreign: f64,
    /// Time to expiry in years.
    pub time_to_expiry: f64,
}

impl ValidatedTrade {
    /// Starts building a trade with the given identifier.
    pub fn builder(trade_id: impl Into<TradeId>) -> ValidatedTradeBuilder {
        ValidatedTradeBuilder::new(trade_id.into())
    }

    /// Returns `|notional|`.
    #[inline]
    pub fn notional_amount(&self) -> f64 {
        self.notional.abs()
    }

    /// Returns whether the position is short (negative notional).
    #[inline]
    pub fn is_short(&self) -> bool {
        self.notional < 0.0
    }
}

/// Builder for [`ValidatedTrade`].
///
/// Every field is required. [`build`](Self::build) checks all of them and
/// reports every violation at once.
#[derive(Debug, Clone)]
pub struct ValidatedTradeBuilder {
    trade_id: TradeId,
    currency_pair: Option<CurrencyPair>,
    option_type: Option<OptionType>,
    strike: Option<f64>,
    notional: Option<f64>,
    notional_currency: Option<Currency>,
    spot: Option<f64>,
    volatility: Option<f64>,
    rate_domestic: Option<f64>,
    rate_foreign: Option<f64>,
    time_to_expiry: Option<f64>,
}

impl ValidatedTradeBuilder {
    fn new(trade_id: TradeId) -> Self {
        Self {
            trade_id,
            currency_pair: None,
            option_type: None,
            strike: None,
            notional: None,
            notional_currency: None,
            spot: None,
            volatility: None,
            rate_domestic: None,
            rate_foreign: None,
            time_to_expiry: None,
        }
    }

    /// Sets the currency pair.
    pub fn currency_pair(mut self, pair: CurrencyPair) -> Self {
        self.currency_pair = Some(pair);
        self
    }

    /// Sets the option type.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Sets the strike.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the signed notional.
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the notional currency.
    pub fn notional_currency(mut self, currency: Currency) -> Self {
        self.notional_currency = Some(currency);
        self
    }

    /// Sets the spot rate.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the volatility.
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the domestic rate.
    pub fn rate_domestic(mut self, rate: f64) -> Self {
        self.rate_domestic = Some(rate);
        self
    }

    /// Sets the foreign rate.
    pub fn rate_foreign(mut self, rate: f64) -> Self {
        self.rate_foreign = Some(rate);
        self
    }

    /// Sets the time to expiry in years.
    pub fn time_to_expiry(mut self, years: f64) -> Self {
        self.time_to_expiry = Some(years);
        self
    }

    /// Validates all fields and produces the trade.
    ///
    /// # Errors
    ///
    /// Returns [`TradeValidationError`] listing each missing or invalid field.
    pub fn build(self) -> Result<ValidatedTrade, TradeValidationError> {
        let mut violations = Vec::new();

        let currency_pair = required(&mut violations, "currency_pair", self.currency_pair);
        let option_type = required(&mut violations, "option_type", self.option_type);

        let strike = number(&mut violations, "strike", self.strike, |v| v > 0.0, "must be positive");
        let notional = number(&mut violations, "notional", self.notional, |v| v != 0.0, "must be non-zero");

        let notional_currency = required(&mut violations, "notional_currency", self.notional_currency)
            .and_then(|ccy| {
                if ccy.is_notional_currency() {
                    Some(ccy)
                } else {
                    violations.push(FieldViolation::new(
                        "notional_currency",
                        format!("must be USD or JPY (got {})", ccy),
                    ));
                    None
                }
            });

        let spot = number(&mut violations, "spot", self.spot, |v| v > 0.0, "must be positive");
        let volatility = number(
            &mut violations,
            "volatility",
            self.volatility,
            |v| v >= 0.0,
            "must be non-negative",
        );
        let rate_domestic = number(&mut violations, "rate_domestic", self.rate_domestic, |_| true, "");
        let rate_foreign = number(&mut violations, "rate_foreign", self.rate_foreign, |_| true, "");
        let time_to_expiry = number(
            &mut violations,
            "time_to_expiry",
            self.time_to_expiry,
            |v| v > 0.0,
            "must be positive",
        );

        match (
            currency_pair,
            option_type,
            strike,
            notional,
            notional_currency,
            spot,
            volatility,
            rate_domestic,
            rate_foreign,
            time_to_expiry,
        ) {
            (
                Some(currency_pair),
                Some(option_type),
                Some(strike),
                Some(notional),
                Some(notional_currency),
                Some(spot),
                Some(volatility),
                Some(rate_domestic),
                Some(rate_foreign),
                Some(time_to_expiry),
            ) if violations.is_empty() => Ok(ValidatedTrade {
                trade_id: self.trade_id,
                currency_pair,
                option_type,
                strike,
                notional,
                notional_currency,
                spot,
                volatility,
                rate_domestic,
                rate_foreign,
                time_to_expiry,
            }),
            _ => Err(TradeValidationError {
                trade_id: self.trade_id,
                violations,
            }),
        }
    }
}

fn required<T>(violations: &mut Vec<FieldViolation>, field: &'static str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        violations.push(FieldViolation::new(field, "is missing"));
    }
    value
}

fn number(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: Option<f64>,
    accept: impl Fn(f64) -> bool,
    requirement: &str,
) -> Option<f64> {
    let value = required(violations, field, value)?;
    if !value.is_finite() {
        violations.push(FieldViolation::new(field, format!("must be finite (got {})", value)));
        return None;
    }
    if !accept(value) {
        violations.push(FieldViolation::new(field, format!("{} (got {})", requirement, value)));
        return None;
    }
    Some(value)
}
