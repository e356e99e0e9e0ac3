//! Pricing errors.

use pricer_core::types::TradeId;
use thiserror::Error;

use crate::analytical::AnalyticalError;

/// Reason a trade could not be priced.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingErrorKind {
    /// Time to expiry is not positive.
    #[error("option has expired (T = {time_to_expiry})")]
    Expired {
        /// Offending time to expiry in years.
        time_to_expiry: f64,
    },

    /// Volatility is negative or not finite.
    #[error("invalid volatility (σ = {volatility})")]
    InvalidVolatility {
        /// Offending volatility.
        volatility: f64,
    },

    /// Spot or strike is not a positive finite number.
    #[error("invalid parameters: {message}")]
    InvalidParameters {
        /// Description of the offending parameter.
        message: String,
    },
}

impl From<AnalyticalError> for PricingErrorKind {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidExpiry { expiry } => PricingErrorKind::Expired {
                time_to_expiry: expiry,
            },
            AnalyticalError::InvalidVolatility { volatility } => {
                PricingErrorKind::InvalidVolatility { volatility }
            }
            other @ (AnalyticalError::InvalidSpot { .. } | AnalyticalError::InvalidStrike { .. }) => {
                PricingErrorKind::InvalidParameters {
                    message: other.to_string(),
                }
            }
        }
    }
}

/// Pricing failure for a single trade.
///
/// Never fatal to a batch: the aggregation layer records it and continues.
///
/// # Examples
/// ```
/// use pricer_core::types::TradeId;
/// use pricer_models::pricing::{PricingError, PricingErrorKind};
///
/// let err = PricingError::new(
///     TradeId::new("FX003"),
///     PricingErrorKind::Expired { time_to_expiry: 0.0 },
/// );
/// assert_eq!(err.to_string(), "Trade FX003: option has expired (T = 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Trade {trade_id}: {kind}")]
pub struct PricingError {
    /// What went wrong.
    pub kind: PricingErrorKind,
    /// Trade that failed.
    pub trade_id: TradeId,
}

impl PricingError {
    /// Creates a new pricing error.
    pub fn new(trade_id: TradeId, kind: PricingErrorKind) -> Self {
        Self { kind, trade_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_maps_to_expired() {
        let kind = PricingErrorKind::from(AnalyticalError::InvalidExpiry { expiry: -1.0 });
        assert_eq!(kind, PricingErrorKind::Expired { time_to_expiry: -1.0 });
    }

    #[test]
    fn test_volatility_maps_to_invalid_volatility() {
        let kind = PricingErrorKind::from(AnalyticalError::InvalidVolatility { volatility: -0.3 });
        assert_eq!(kind, PricingErrorKind::InvalidVolatility { volatility: -0.3 });
    }

    #[test]
    fn test_strike_maps_to_invalid_parameters() {
        let kind = PricingErrorKind::from(AnalyticalError::InvalidStrike { strike: 0.0 });
        assert!(matches!(kind, PricingErrorKind::InvalidParameters { ref message } if message.contains("strike")));
    }

    #[test]
    fn test_display_includes_trade_id() {
        let err = PricingError::new(
            TradeId::new("T-9"),
            PricingErrorKind::InvalidVolatility { volatility: -0.1 },
        );
        assert_eq!(err.to_string(), "Trade T-9: invalid volatility (σ = -0.1)");
    }
}
