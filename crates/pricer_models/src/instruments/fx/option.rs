//! Option type (call or put).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// FX option type (Call or Put).
///
/// - Call: Right to buy base currency, sell quote currency
/// - Put: Right to sell base currency, buy quote currency
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::fx::OptionType;
///
/// assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("P".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert_eq!(OptionType::Put.to_string(), "PUT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OptionType {
    /// Right to buy base currency at strike price in quote currency.
    Call,
    /// Right to sell base currency at strike price in quote currency.
    Put,
}

impl OptionType {
    /// Returns whether this is a call option.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put option.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "CALL"),
            OptionType::Put => write!(f, "PUT"),
        }
    }
}

/// Error returned when an option type string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid option type: '{0}' (expected CALL or PUT)")]
pub struct OptionTypeParseError(pub String);

impl FromStr for OptionType {
    type Err = OptionTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CALL" | "C" => Ok(OptionType::Call),
            "PUT" | "P" => Ok(OptionType::Put),
            _ => Err(OptionTypeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("CALL".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" put ".parse::<OptionType>(), Ok(OptionType::Put));
        assert_eq!("c".parse::<OptionType>(), Ok(OptionType::Call));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "STRADDLE".parse::<OptionType>().unwrap_err();
        assert_eq!(err, OptionTypeParseError("STRADDLE".to_string()));
        assert!(err.to_string().contains("STRADDLE"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for option_type in [OptionType::Call, OptionType::Put] {
            assert_eq!(option_type.to_string().parse::<OptionType>(), Ok(option_type));
        }
    }

    #[test]
    fn test_predicates() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
    }
}
