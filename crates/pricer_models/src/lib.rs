//! # Pricer Models (L2: Business Logic)
//!
//! FX option trades, the Garman-Kohlhagen model and the per-trade pricing engine.
//!
//! This crate provides:
//! - Trade definitions: [`instruments::fx::ValidatedTrade`] built through a
//!   validating builder
//! - Analytical Garman-Kohlhagen formulas for European FX options
//! - [`pricing::PricingEngine`], turning a trade into a [`pricing::PricedTrade`]
//!   with PV, Delta and Vega in the notional currency
//!
//! ## Design Principles
//!
//! - **Pure functions**: pricing has no side effects and no shared state
//! - **Explicit validation**: invariants are checked once when a trade is built
//!   and re-checked where they gate formula validity
//! - **Builder pattern** for ergonomic trade construction
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//! use pricer_models::instruments::fx::{OptionType, ValidatedTrade};
//! use pricer_models::pricing::PricingEngine;
//!
//! let trade = ValidatedTrade::builder("FX001")
//!     .currency_pair(CurrencyPair::USDJPY)
//!     .option_type(OptionType::Call)
//!     .strike(100.0)
//!     .notional(1.0)
//!     .notional_currency(Currency::USD)
//!     .spot(100.0)
//!     .volatility(0.20)
//!     .rate_domestic(0.0)
//!     .rate_foreign(0.0)
//!     .time_to_expiry(1.0)
//!     .build()
//!     .unwrap();
//!
//! let priced = PricingEngine::new().price(&trade).unwrap();
//! assert!((priced.present_value - 7.9656).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod pricing;
