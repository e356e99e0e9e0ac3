//! # Pricer Risk (L4: Application)
//!
//! Multi-currency aggregation of priced FX option trades.
//!
//! This crate provides:
//! - [`conversion::CurrencyConverter`]: USD/JPY spot-based conversion factors
//! - [`aggregation::AggregationEngine`]: per-trade conversion into a reporting
//!   currency and portfolio totals, with failures recorded rather than thrown
//! - [`portfolio::value_portfolio`]: price-then-aggregate runner for a batch
//!   of validated trades
//! - Rayon-based parallelisation helpers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  conversion/  - CurrencyConverter       │
//! │  aggregation/ - AggregationEngine       │
//! │  portfolio/   - ValuationContext        │
//! │  parallel/    - Rayon utilities         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Garman-Kohlhagen PricingEngine         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_core::types::{Currency, CurrencyPair};
//! use pricer_models::instruments::fx::{OptionType, ValidatedTrade};
//! use pricer_risk::portfolio::{value_portfolio, ValuationContext};
//!
//! let trade = ValidatedTrade::builder("FX001")
//!     .currency_pair(CurrencyPair::USDJPY)
//!     .option_type(OptionType::Call)
//!     .strike(150.0)
//!     .notional(15_000_000.0)
//!     .notional_currency(Currency::JPY)
//!     .spot(150.0)
//!     .volatility(0.10)
//!     .rate_domestic(0.001)
//!     .rate_foreign(0.05)
//!     .time_to_expiry(0.5)
//!     .build()
//!     .unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
//! let context = ValuationContext::new(Currency::USD, date);
//! let result = value_portfolio(&[trade], &context);
//!
//! assert_eq!(result.summary.trade_count, 1);
//! assert_eq!(result.summary.failed_trade_count, 0);
//! assert_eq!(result.summary.reporting_currency, Currency::USD);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregation;
pub mod conversion;
pub mod parallel;
pub mod portfolio;

// Re-export commonly used types
pub use aggregation::{
    AggregationEngine, AggregationFailure, AggregationResult, ConvertedTrade, FailureReason,
    PortfolioSummary, Totals,
};
pub use conversion::{ConversionError, CurrencyConverter};
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
pub use portfolio::{value_portfolio, ValuationContext};
