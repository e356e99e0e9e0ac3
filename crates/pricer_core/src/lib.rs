//! # pricer_core: Numeric Foundation for FX Option Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution primitives (`math::distributions`)
//! - Currency types: `Currency`, `CurrencyPair` (`types::currency`, `types::currency_pair`)
//! - Trade identifiers: `TradeId` (`types::ids`)
//! - Error types: `CurrencyError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: `erfc` for a full double precision normal CDF
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! // Normal distribution
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
//!
//! // Currency information
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert!(usd.is_notional_currency());
//!
//! let pair: CurrencyPair = "USD/JPY".parse().unwrap();
//! assert_eq!(pair.quote(), Currency::JPY);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Currency, CurrencyPair and TradeId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
