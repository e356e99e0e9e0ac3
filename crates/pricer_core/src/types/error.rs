//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency and currency pair parsing

use thiserror::Error;

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Unknown currency code
/// - `ParseError`: Failed to parse a currency pair string
/// - `SameCurrency`: Base and quote currencies are the same
///
/// # Examples
/// ```
/// use pricer_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Failed to parse currency pair string.
    #[error("Currency pair parse error: {0}")]
    ParseError(String),

    /// Base and quote currencies are the same.
    #[error("Base and quote currencies are the same: {0}")]
    SameCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_currency_display() {
        let err = CurrencyError::UnknownCurrency("XYZ".to_string());
        assert_eq!(format!("{}", err), "Unknown currency: XYZ");
    }

    #[test]
    fn test_parse_error_display() {
        let err = CurrencyError::ParseError("EURO/USD".to_string());
        assert_eq!(format!("{}", err), "Currency pair parse error: EURO/USD");
    }

    #[test]
    fn test_same_currency_display() {
        let err = CurrencyError::SameCurrency("USD".to_string());
        assert_eq!(
            format!("{}", err),
            "Base and quote currencies are the same: USD"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err: Box<dyn std::error::Error> =
            Box::new(CurrencyError::UnknownCurrency("ABC".to_string()));
        assert!(err.to_string().contains("ABC"));
    }
}
