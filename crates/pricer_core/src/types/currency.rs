//! Currency types for financial calculations.
//!
//! This module provides ISO 4217 currency codes with parsing and
//! serialisation support.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert!(usd.is_notional_currency());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes.
///
/// Covers every currency that appears in a supported trade underlying.
/// Only USD and JPY are valid notional and reporting currencies; the
/// others exist so that pairs such as EUR/USD can be represented.
///
/// # Examples
///
/// ```
/// use pricer_core::types::currency::Currency;
///
/// assert_eq!(Currency::USD.code(), "USD");
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar
    USD,

    /// Euro
    EUR,

    /// British Pound Sterling
    GBP,

    /// Japanese Yen
    JPY,

    /// Swiss Franc
    CHF,

    /// Australian Dollar
    AUD,

    /// Canadian Dollar
    CAD,
}

impl Currency {
    /// All currencies known to the workspace.
    pub const ALL: [Currency; 7] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CHF,
        Currency::AUD,
        Currency::CAD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.code(), "USD");
    /// assert_eq!(Currency::JPY.code(), "JPY");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }

    /// Returns whether this currency may be used as a trade notional currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert!(Currency::USD.is_notional_currency());
    /// assert!(Currency::JPY.is_notional_currency());
    /// assert!(!Currency::EUR.is_notional_currency());
    /// ```
    #[inline]
    pub fn is_notional_currency(&self) -> bool {
        matches!(self, Currency::USD | Currency::JPY)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive, surrounding whitespace ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// let usd: Currency = " usd ".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// let result: Result<Currency, _> = "XYZ".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
