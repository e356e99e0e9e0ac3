//! Per-trade pricing.
//!
//! [`PricingEngine`] applies the Garman-Kohlhagen model to a
//! [`ValidatedTrade`](crate::instruments::fx::ValidatedTrade) and scales the
//! unit results by the trade notional. All outputs are in the trade's
//! notional currency.

mod engine;
mod error;
mod priced;

pub use engine::PricingEngine;
pub use error::{PricingError, PricingErrorKind};
pub use priced::PricedTrade;
