//! Analytical pricing formulas for European FX options.
//!
//! This module provides closed-form solutions:
//! - Garman-Kohlhagen model for FX options (price, Delta, Vega)
//!
//! ## Design Principles
//!
//! - **Double precision** throughout, no rounding
//! - **Total over the valid domain**: zero volatility falls back to the
//!   deterministic discounted intrinsic value instead of dividing by zero
//! - **Numerical Stability**: Uses the erfc-based CDF from `pricer_core`

pub mod error;
pub mod garman_kohlhagen;

// Re-export main types at module level
pub use error::AnalyticalError;
pub use garman_kohlhagen::{GarmanKohlhagen, GarmanKohlhagenParams};
