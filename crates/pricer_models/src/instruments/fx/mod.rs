//! Foreign exchange option trades.
//!
//! This module provides:
//! - [`OptionType`]: call or put
//! - [`ValidatedTrade`]: an FX option trade whose invariants have been checked
//! - [`ValidatedTradeBuilder`]: the validating factory for [`ValidatedTrade`]
//! - [`TradeValidationError`]: every field violation found during construction
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//! use pricer_models::instruments::fx::{OptionType, ValidatedTrade};
//!
//! let err = ValidatedTrade::builder("FX002")
//!     .currency_pair(CurrencyPair::EURUSD)
//!     .option_type(OptionType::Put)
//!     .strike(-1.0)
//!     .notional(1_000_000.0)
//!     .notional_currency(Currency::USD)
//!     .spot(1.10)
//!     .volatility(0.10)
//!     .rate_domestic(0.05)
//!     .rate_foreign(0.03)
//!     .time_to_expiry(0.0)
//!     .build()
//!     .unwrap_err();
//!
//! // Both violations are reported, not just the first
//! assert_eq!(err.violations.len(), 2);
//! ```

mod error;
mod option;
mod trade;

pub use error::{FieldViolation, TradeValidationError};
pub use option::{OptionType, OptionTypeParseError};
pub use trade::{ValidatedTrade, ValidatedTradeBuilder};
