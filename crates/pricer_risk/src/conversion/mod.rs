//! Currency conversion into the reporting currency.
//!
//! Conversion uses the trade's own USD/JPY spot (JPY per 1 USD). Only USD and
//! JPY are convertible.

mod converter;
mod error;

pub use converter::CurrencyConverter;
pub use error::ConversionError;
