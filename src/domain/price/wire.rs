//! Wire types for the price feed (REST).

use crate::shared::serde_util::{lenient_decimal, lenient_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single raw entry of the price feed.
///
/// Every field is optional: a record with a missing or mistyped field still
/// deserializes, and is rejected individually by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRecordResponse {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price: Option<Decimal>,
    /// ISO-8601 timestamp, e.g. `"2023-08-29T07:10:40.000Z"`.
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub date: Option<String>,
}

/// The full feed body: a flat JSON array, possibly with several entries per currency.
pub type PricesResponse = Vec<PriceRecordResponse>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_feed_array() {
        let json = r#"[
            {"currency":"BLUR","date":"2023-08-29T07:10:40.000Z","price":0.20811525423728813},
            {"currency":"bNEO","date":"2023-08-29T07:10:50.000Z","price":7.1282679}
        ]"#;
        let feed: PricesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[1].currency.as_deref(), Some("bNEO"));
        assert_eq!(feed[1].price, Some(Decimal::from_str("7.1282679").unwrap()));
        assert_eq!(feed[0].date.as_deref(), Some("2023-08-29T07:10:40.000Z"));
    }

    #[test]
    fn test_malformed_entry_does_not_fail_batch() {
        let json = r#"[
            {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93},
            {"currency":7,"price":"n/a"},
            {}
        ]"#;
        let feed: PricesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[1].currency, None);
        assert_eq!(feed[1].price, None);
        assert_eq!(feed[2], PriceRecordResponse::default());
    }
}
