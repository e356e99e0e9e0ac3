//! Currency pair types for FX trades.
//!
//! A trade's underlying is recorded as BASE/QUOTE, e.g. `USD/JPY` means the
//! spot is quoted as units of JPY per 1 USD.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::USD, Currency::JPY).unwrap();
//! assert_eq!(pair.base(), Currency::USD);
//! assert_eq!(pair.quote(), Currency::JPY);
//! assert_eq!(pair.code(), "USD/JPY");
//!
//! // Slash, no slash and stray spaces are all accepted
//! let parsed: CurrencyPair = "usd jpy".parse().unwrap();
//! assert_eq!(parsed, pair);
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// A BASE/QUOTE currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyPair {
    /// Base currency (the unit being priced)
    base: Currency,
    /// Quote currency (the unit the price is expressed in)
    quote: Currency,
}

impl CurrencyPair {
    /// EUR/USD
    pub const EURUSD: CurrencyPair = CurrencyPair {
        base: Currency::EUR,
        quote: Currency::USD,
    };
    /// GBP/USD
    pub const GBPUSD: CurrencyPair = CurrencyPair {
        base: Currency::GBP,
        quote: Currency::USD,
    };
    /// USD/JPY
    pub const USDJPY: CurrencyPair = CurrencyPair {
        base: Currency::USD,
        quote: Currency::JPY,
    };
    /// AUD/USD
    pub const AUDUSD: CurrencyPair = CurrencyPair {
        base: Currency::AUD,
        quote: Currency::USD,
    };
    /// USD/CAD
    pub const USDCAD: CurrencyPair = CurrencyPair {
        base: Currency::USD,
        quote: Currency::CAD,
    };
    /// USD/CHF
    pub const USDCHF: CurrencyPair = CurrencyPair {
        base: Currency::USD,
        quote: Currency::CHF,
    };

    /// Pairs accepted on incoming trade records.
    pub const SUPPORTED: [CurrencyPair; 6] = [
        Self::EURUSD,
        Self::GBPUSD,
        Self::USDJPY,
        Self::AUDUSD,
        Self::USDCAD,
        Self::USDCHF,
    ];

    /// Creates a new currency pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and quote are the same.
    pub fn new(base: Currency, quote: Currency) -> Result<Self, CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, quote })
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns the pair code in standard format (BASE/QUOTE).
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.quote.code())
    }

    /// Returns whether the pair is one of [`CurrencyPair::SUPPORTED`].
    #[inline]
    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    /// Parses `BASE/QUOTE`, `BASEQUOTE` or `BASE QUOTE` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let normalised: String = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if normalised.len() != 6 || !normalised.is_ascii() {
            return Err(CurrencyError::ParseError(s.to_string()));
        }

        let base: Currency = normalised[..3].parse()?;
        let quote: Currency = normalised[3..].parse()?;
        Self::new(base, quote)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
