//! Aggregation value types.

use std::fmt;

use chrono::NaiveDate;
use pricer_core::types::{Currency, TradeId};
use pricer_models::pricing::{PricedTrade, PricingErrorKind};

use crate::conversion::ConversionError;

/// A priced trade with its metrics expressed in the reporting currency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertedTrade {
    /// The trade and its notional-currency metrics.
    pub priced: PricedTrade,
    /// Currency of the converted metrics.
    pub reporting_currency: Currency,
    /// Factor applied to every metric.
    pub factor: f64,
    /// Present value in the reporting currency.
    pub present_value: f64,
    /// Delta in the reporting currency.
    pub delta: f64,
    /// Vega in the reporting currency.
    pub vega: f64,
}

impl ConvertedTrade {
    /// Applies `factor` to the metrics of `priced`.
    pub fn new(priced: PricedTrade, reporting_currency: Currency, factor: f64) -> Self {
        Self {
            present_value: priced.present_value * factor,
            delta: priced.delta * factor,
            vega: priced.vega * factor,
            priced,
            reporting_currency,
            factor,
        }
    }

    /// Returns the trade identifier.
    #[inline]
    pub fn trade_id(&self) -> &TradeId {
        self.priced.trade_id()
    }
}

/// Why a trade was excluded from the totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureReason {
    /// The pricing engine rejected the trade.
    Pricing(PricingErrorKind),
    /// No conversion factor was available.
    Conversion(ConversionError),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Pricing(kind) => write!(f, "pricing failed: {}", kind),
            FailureReason::Conversion(err) => write!(f, "conversion failed: {}", err),
        }
    }
}

/// A trade excluded from the portfolio totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregationFailure {
    /// Trade that failed.
    pub trade_id: TradeId,
    /// Reason for the failure.
    pub reason: FailureReason,
}

impl fmt::Display for AggregationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trade {}: {}", self.trade_id, self.reason)
    }
}

/// Running sums of converted metrics.
///
/// `combine` is associative with [`Totals::ZERO`] as identity, so partial
/// totals from parallel tasks may be merged in any grouping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Number of trades included.
    pub count: usize,
    /// Sum of present values.
    pub present_value: f64,
    /// Sum of deltas.
    pub delta: f64,
    /// Sum of vegas.
    pub vega: f64,
}

impl Totals {
    /// Identity element.
    pub const ZERO: Totals = Totals {
        count: 0,
        present_value: 0.0,
        delta: 0.0,
        vega: 0.0,
    };

    /// Totals of a single converted trade.
    pub fn of(trade: &ConvertedTrade) -> Self {
        Self {
            count: 1,
            present_value: trade.present_value,
            delta: trade.delta,
            vega: trade.vega,
        }
    }

    /// Merges two partial totals.
    #[inline]
    pub fn combine(self, other: Totals) -> Totals {
        Totals {
            count: self.count + other.count,
            present_value: self.present_value + other.present_value,
            delta: self.delta + other.delta,
            vega: self.vega + other.vega,
        }
    }
}

/// Portfolio-level risk in the reporting currency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioSummary {
    /// Trades included in the totals.
    pub trade_count: usize,
    /// Sum of converted present values.
    pub total_present_value: f64,
    /// Sum of converted deltas.
    pub total_delta: f64,
    /// Sum of converted vegas.
    pub total_vega: f64,
    /// Currency of the totals.
    pub reporting_currency: Currency,
    /// Trades excluded because pricing or conversion failed.
    pub failed_trade_count: usize,
    /// Valuation date label.
    pub valuation_date: NaiveDate,
}

impl PortfolioSummary {
    /// Builds a summary from totals.
    pub fn from_totals(
        totals: Totals,
        failed_trade_count: usize,
        reporting_currency: Currency,
        valuation_date: NaiveDate,
    ) -> Self {
        Self {
            trade_count: totals.count,
            total_present_value: totals.present_value,
            total_delta: totals.delta,
            total_vega: totals.vega,
            reporting_currency,
            failed_trade_count,
            valuation_date,
        }
    }

    /// Returns whether any trade failed.
    #[inline]
    pub fn has_failures(&self) -> bool {
        self.failed_trade_count > 0
    }
}

/// Output of an aggregation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregationResult {
    /// Portfolio totals.
    pub summary: PortfolioSummary,
    /// Successfully converted trades, in input order.
    pub converted: Vec<ConvertedTrade>,
    /// Excluded trades, in input order.
    pub failures: Vec<AggregationFailure>,
}
