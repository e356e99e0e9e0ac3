//! USD/JPY conversion factors.

use pricer_core::types::{Currency, CurrencyPair};

use super::error::ConversionError;

/// Produces multiplicative factors from a trade's notional currency into the
/// reporting currency.
///
/// `spot` is always quoted as JPY per 1 USD:
///
/// | from → to  | factor   |
/// |------------|----------|
/// | USD → USD  | 1        |
/// | JPY → JPY  | 1        |
/// | JPY → USD  | 1 / spot |
/// | USD → JPY  | spot     |
///
/// # Examples
///
/// ```
/// use pricer_core::types::Currency;
/// use pricer_risk::conversion::CurrencyConverter;
///
/// let converter = CurrencyConverter::new();
/// let factor = converter.factor(Currency::JPY, Currency::USD, 150.0).unwrap();
/// assert!((15_000_000.0 * factor - 100_000.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Creates a new converter.
    pub fn new() -> Self {
        Self
    }

    /// Returns the factor converting amounts in `from` into `to`.
    ///
    /// Identity conversions return 1 without reading `spot`.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::UnsupportedCurrencyPair`] if either currency is
    ///   not USD or JPY
    /// - [`ConversionError::InvalidSpot`] if a cross conversion is requested
    ///   with a non-positive or non-finite spot
    pub fn factor(&self, from: Currency, to: Currency, spot: f64) -> Result<f64, ConversionError> {
        if !from.is_notional_currency() || !to.is_notional_currency() {
            return Err(ConversionError::UnsupportedCurrencyPair { from, to });
        }
        if from == to {
            return Ok(1.0);
        }
        if !(spot > 0.0) || !spot.is_finite() {
            return Err(ConversionError::InvalidSpot { spot });
        }

        match (from, to) {
            (Currency::JPY, Currency::USD) => Ok(1.0 / spot),
            (Currency::USD, Currency::JPY) => Ok(spot),
            _ => Err(ConversionError::UnsupportedCurrencyPair { from, to }),
        }
    }

    /// Like [`factor`](Self::factor), but a cross conversion is only allowed
    /// when `spot` is a USD/JPY quote, i.e. the trade's pair is USD/JPY.
    ///
    /// # Errors
    ///
    /// [`ConversionError::UnsupportedCurrencyPair`] for a cross conversion on
    /// any other pair, plus every error of [`factor`](Self::factor).
    pub fn factor_for_pair(
        &self,
        pair: CurrencyPair,
        from: Currency,
        to: Currency,
        spot: f64,
    ) -> Result<f64, ConversionError> {
        if from != to && pair != CurrencyPair::USDJPY {
            return Err(ConversionError::UnsupportedCurrencyPair { from, to });
        }
        self.factor(from, to, spot)
    }
}
