//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod price;
pub mod validate;

use std::path::Path;

use pricer_models::instruments::fx::ValidatedTrade;
use tracing::info;

use crate::config::RiskConfig;
use crate::error::{CliError, Result};
use crate::loader::load_trades;
use crate::validator::Validator;

/// Maximum number of validation errors echoed to the console.
pub const MAX_REPORTED_ERRORS: usize = 10;

/// Load and validate the input file, aborting on any validation error.
pub(crate) fn load_validated(input: &Path, config: &RiskConfig) -> Result<Vec<ValidatedTrade>> {
    let raw = load_trades(input)?;
    let report = Validator::new(config).validate(&raw);

    if !report.is_valid() {
        eprintln!("Validation failed with {} errors:", report.errors.len());
        for error in report.errors.iter().take(MAX_REPORTED_ERRORS) {
            eprintln!("  - {}", error);
        }
        if report.errors.len() > MAX_REPORTED_ERRORS {
            eprintln!(
                "  ... and {} more errors",
                report.errors.len() - MAX_REPORTED_ERRORS
            );
        }
        return Err(CliError::Validation(report.errors));
    }

    info!(count = report.valid.len(), "All trades validated");
    Ok(report.valid)
}
