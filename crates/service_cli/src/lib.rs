//! # fx-risk service layer
//!
//! Library half of the `fx-risk` binary: trade file loading, validation,
//! configuration, report writing and the command implementations that wire
//! them to the pricing and aggregation crates.
//!
//! ```text
//! loader → validator → PricingEngine → AggregationEngine → writer
//! ```

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod validator;
pub mod writer;

pub use config::{ConfigError, RiskConfig};
pub use error::{CliError, Result};
