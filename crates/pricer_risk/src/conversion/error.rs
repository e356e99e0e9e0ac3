//! Conversion error types.

use pricer_core::types::Currency;
use thiserror::Error;

/// Errors raised when a conversion factor cannot be produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversionError {
    /// No conversion path between the two currencies.
    #[error("Unsupported currency pair: {from} -> {to}")]
    UnsupportedCurrencyPair {
        /// Source currency
        from: Currency,
        /// Target currency
        to: Currency,
    },

    /// Spot rate cannot be used as a conversion rate.
    #[error("Invalid spot for conversion: {spot}")]
    InvalidSpot {
        /// The offending spot value
        spot: f64,
    },
}
