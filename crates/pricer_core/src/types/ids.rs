//! Identifier types for trades.
//!
//! Trade identifiers are opaque strings carried through pricing and
//! aggregation for traceability and error reporting.

use std::fmt;

/// Unique identifier for a trade within a batch.
///
/// # Examples
///
/// ```
/// use pricer_core::types::TradeId;
///
/// let id = TradeId::new("FX001");
/// assert_eq!(id.as_str(), "FX001");
/// assert_eq!(id.to_string(), "FX001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TradeId(String);

impl TradeId {
    /// Creates a new trade ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TradeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trade_id_conversions() {
        let a = TradeId::from("T1");
        let b = TradeId::from("T1".to_string());
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "T1");
    }

    #[test]
    fn test_trade_id_hash() {
        let mut set = HashSet::new();
        set.insert(TradeId::new("T1"));
        set.insert(TradeId::new("T2"));
        set.insert(TradeId::new("T1"));
        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_trade_id_serialises_as_string() {
        let json = serde_json::to_string(&TradeId::new("FX042")).unwrap();
        assert_eq!(json, "\"FX042\"");
    }
}
