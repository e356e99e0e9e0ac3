//! Garman-Kohlhagen pricing engine.

use crate::analytical::{GarmanKohlhagen, GarmanKohlhagenParams};
use crate::instruments::fx::ValidatedTrade;

use super::error::{PricingError, PricingErrorKind};
use super::priced::PricedTrade;

/// Stateless pricing engine for European FX options.
///
/// Pure and deterministic: identical inputs always yield bit-identical
/// outputs, so callers may price trades concurrently.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Currency, CurrencyPair};
/// use pricer_models::instruments::fx::{OptionType, ValidatedTrade};
/// use pricer_models::pricing::{PricingEngine, PricingErrorKind};
///
/// let mut trade = ValidatedTrade::builder("FX010")
///     .currency_pair(CurrencyPair::USDJPY)
///     .option_type(OptionType::Put)
///     .strike(150.0)
///     .notional(-1_000_000.0)
///     .notional_currency(Currency::JPY)
///     .spot(150.0)
///     .volatility(0.12)
///     .rate_domestic(0.001)
///     .rate_foreign(0.05)
///     .time_to_expiry(0.25)
///     .build()
///     .unwrap();
///
/// let engine = PricingEngine::new();
/// let priced = engine.price(&trade).unwrap();
/// assert!(priced.present_value > 0.0);
/// assert!(priced.delta > 0.0); // short put
///
/// trade.time_to_expiry = 0.0;
/// let err = engine.price(&trade).unwrap_err();
/// assert!(matches!(err.kind, PricingErrorKind::Expired { .. }));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    /// Creates a new pricing engine.
    pub fn new() -> Self {
        Self
    }

    /// Prices a single trade.
    ///
    /// # Errors
    ///
    /// - [`PricingErrorKind::Expired`] if `time_to_expiry <= 0`
    /// - [`PricingErrorKind::InvalidVolatility`] if `volatility < 0`
    /// - [`PricingErrorKind::InvalidParameters`] if spot or strike is not positive
    ///
    /// Expiry is checked before volatility.
    pub fn price(&self, trade: &ValidatedTrade) -> Result<PricedTrade, PricingError> {
        let params = GarmanKohlhagenParams::new(
            trade.spot,
            trade.strike,
            trade.rate_domestic,
            trade.rate_foreign,
            trade.volatility,
            trade.time_to_expiry,
        )
        .map_err(|e| PricingError::new(trade.trade_id.clone(), PricingErrorKind::from(e)))?;

        let model = GarmanKohlhagen::new(params);
        let scale = trade.notional_amount();

        Ok(PricedTrade {
            trade: trade.clone(),
            present_value: model.price(trade.option_type) * scale,
            delta: model.delta(trade.option_type) * trade.notional,
            vega: model.vega() * scale,
        })
    }

    /// Prices every trade independently, preserving input order.
    pub fn price_all(&self, trades: &[ValidatedTrade]) -> Vec<Result<PricedTrade, PricingError>> {
        trades.iter().map(|trade| self.price(trade)).collect()
    }
}
