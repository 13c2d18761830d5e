//! Price domain — feed records, validation, latest-price normalization.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod state;
pub mod wire;

use crate::shared::TokenSymbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use convert::validate_records;
pub use state::{normalize, PriceBook, PriceTable, TokenSet};

/// A validated price quote for one currency at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: TokenSymbol,
    /// USD price, always positive.
    pub price: Decimal,
    pub date: DateTime<Utc>,
}

impl PriceRecord {
    pub fn new(currency: impl Into<TokenSymbol>, price: Decimal, date: DateTime<Utc>) -> Self {
        Self {
            currency: currency.into(),
            price,
            date,
        }
    }
}

// ─── RecordValidationError ───────────────────────────────────────────────────

/// Why a raw feed entry was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidationError {
    MissingCurrency,
    MissingPrice(String),
    NonPositivePrice(String, Decimal),
    MissingDate(String),
    InvalidDate(String, String),
}

impl RecordValidationError {
    /// The currency of the rejected record, when it had one.
    pub fn currency(&self) -> Option<&str> {
        match self {
            RecordValidationError::MissingCurrency => None,
            RecordValidationError::MissingPrice(c)
            | RecordValidationError::NonPositivePrice(c, _)
            | RecordValidationError::MissingDate(c)
            | RecordValidationError::InvalidDate(c, _) => Some(c),
        }
    }
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValidationError::MissingCurrency => write!(f, "Missing currency"),
            RecordValidationError::MissingPrice(c) => write!(f, "{}: missing price", c),
            RecordValidationError::NonPositivePrice(c, p) => {
                write!(f, "{}: price must be positive, got {}", c, p)
            }
            RecordValidationError::MissingDate(c) => write!(f, "{}: missing date", c),
            RecordValidationError::InvalidDate(c, d) => write!(f, "{}: invalid date {:?}", c, d),
        }
    }
}

impl std::error::Error for RecordValidationError {}
