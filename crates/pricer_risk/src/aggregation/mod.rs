//! Portfolio aggregation in a single reporting currency.
//!
//! The [`AggregationEngine`] converts each priced trade's PV, Delta and Vega
//! into the reporting currency and sums them. Trades that cannot be priced
//! or converted are recorded as [`AggregationFailure`]s and excluded from
//! the totals.

mod engine;
mod types;

pub use engine::AggregationEngine;
pub use types::{
    AggregationFailure, AggregationResult, ConvertedTrade, FailureReason, PortfolioSummary, Totals,
};
