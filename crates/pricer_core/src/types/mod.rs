//! Core financial types.
//!
//! This module provides:
//! - `currency`: ISO 4217 currency codes with metadata
//! - `currency_pair`: BASE/QUOTE currency pairs parsed from trade records
//! - `ids`: Strongly-typed trade identifiers
//! - `error`: Structured error types for currency parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Currency`] from `currency`
//! - [`CurrencyPair`] from `currency_pair`
//! - [`TradeId`] from `ids`
//! - [`CurrencyError`] from `error`

pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod ids;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::CurrencyError;
pub use ids::TradeId;
