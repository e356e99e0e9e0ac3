//! Validate command implementation
//!
//! Loads and validates a trade file without pricing it.

use std::path::Path;

use tracing::info;

use super::load_validated;
use crate::config::RiskConfig;
use crate::error::Result;

/// Run the validate command, returning the number of valid trades
pub fn run(input: &Path, config: &RiskConfig) -> Result<usize> {
    info!(input = %input.display(), "Validating trade file");
    let trades = load_validated(input, config)?;
    println!("All {} trades validated successfully", trades.len());
    Ok(trades.len())
}
