//! Priced trade.

use pricer_core::types::{Currency, TradeId};

use crate::instruments::fx::ValidatedTrade;

/// A trade with its risk metrics in the notional currency.
///
/// - `present_value`: `|notional|` × unit price, never negative
/// - `delta`: `notional` × unit delta, so a short position flips the sign
/// - `vega`: `|notional|` × unit vega per 1 vol point, never negative
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricedTrade {
    /// The trade that was priced.
    pub trade: ValidatedTrade,
    /// Present value.
    pub present_value: f64,
    /// Spot delta.
    pub delta: f64,
    /// Vega per 1% volatility move.
    pub vega: f64,
}

impl PricedTrade {
    /// Returns the trade identifier.
    #[inline]
    pub fn trade_id(&self) -> &TradeId {
        &self.trade.trade_id
    }

    /// Returns the currency the metrics are expressed in.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.trade.notional_currency
    }
}
