//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the price feed sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::decimal::{parse_amount, to_fixed};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── TokenSymbol ─────────────────────────────────────────────────────────────

/// Newtype for token/currency symbols (e.g. `"ETH"`, `"SWTH"`).
///
/// Symbols are case-sensitive and compared verbatim, the same way the feed keys them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenSymbol(String);

impl TokenSymbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty symbol marks a side that has not been assigned a token yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TokenSymbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for TokenSymbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TokenSymbol(s.to_string()))
    }
}

impl AsRef<str> for TokenSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for TokenSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TokenSymbol(s))
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// One of the two editable fields of the swap form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Source ("from") field.
    From,
    /// Destination ("to") field.
    To,
}

impl Side {
    /// The other field.
    pub fn opposite(&self) -> Side {
        match self {
            Side::From => Side::To,
            Side::To => Side::From,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::From => "from",
            Side::To => "to",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
