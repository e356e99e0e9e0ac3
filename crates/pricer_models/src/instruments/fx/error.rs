//! Trade construction errors.

use std::fmt;

use pricer_core::types::TradeId;
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldViolation {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

impl FieldViolation {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Error returned by [`ValidatedTradeBuilder::build`](super::ValidatedTradeBuilder::build).
///
/// Lists every violated field rather than stopping at the first one.
///
/// # Examples
/// ```
/// use pricer_core::types::TradeId;
/// use pricer_models::instruments::fx::TradeValidationError;
///
/// let err = TradeValidationError {
///     trade_id: TradeId::new("FX001"),
///     violations: vec![],
/// };
/// assert!(err.to_string().starts_with("Trade FX001"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Trade {trade_id}: {}", join_violations(.violations))]
pub struct TradeValidationError {
    /// Identifier of the rejected trade.
    pub trade_id: TradeId,
    /// Every violation found, in field order.
    pub violations: Vec<FieldViolation>,
}

impl TradeValidationError {
    /// Returns whether the given field is among the violations.
    pub fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
