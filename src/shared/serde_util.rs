//! Custom serde helpers for the price feed wire format.
//!
//! The feed is untyped JSON. These helpers turn a field of the wrong type into
//! `None` instead of failing the whole array, so validation can reject the single
//! record later.

/// Deserializes a price that may arrive as a JSON number or a numeric string.
///
/// Numbers in exponent form (`1.23e-5`) are accepted. `null`, booleans, objects
/// and non-numeric strings become `None`.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(serde_json::Number),
        Text(String),
        Other(IgnoredAny),
    }

    fn parse(text: &str) -> Option<Decimal> {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(n) => parse(&n.to_string()),
            RawPrice::Text(s) => parse(s.trim()),
            RawPrice::Other(_) => None,
        })
    }
}

/// Deserializes a string field, mapping any non-string JSON value to `None`.
pub mod lenient_string {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Text(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawText::deserialize(deserializer)? {
            RawText::Text(s) => Some(s),
            RawText::Other(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use std::str::FromStr;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::lenient_decimal::deserialize")]
        price: Option<Decimal>,
        #[serde(default, deserialize_with = "super::lenient_string::deserialize")]
        name: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_lenient_decimal_number() {
        let p = probe(r#"{"price": 1574.0444}"#);
        assert_eq!(p.price, Some(Decimal::from_str("1574.0444").unwrap()));
    }

    #[test]
    fn test_lenient_decimal_exponent_number() {
        let p = probe(r#"{"price": 1.23e-5}"#);
        assert_eq!(p.price, Some(Decimal::from_str("0.0000123").unwrap()));
    }

    #[test]
    fn test_lenient_decimal_numeric_string() {
        let p = probe(r#"{"price": " 0.5 "}"#);
        assert_eq!(p.price, Some(Decimal::from_str("0.5").unwrap()));
    }

    #[test]
    fn test_lenient_decimal_wrong_types_become_none() {
        assert_eq!(probe(r#"{"price": "abc"}"#).price, None);
        assert_eq!(probe(r#"{"price": null}"#).price, None);
        assert_eq!(probe(r#"{"price": true}"#).price, None);
        assert_eq!(probe(r#"{"price": {"v": 1}}"#).price, None);
        assert_eq!(probe(r#"{}"#).price, None);
    }

    #[test]
    fn test_lenient_string() {
        assert_eq!(probe(r#"{"name": "ETH"}"#).name.as_deref(), Some("ETH"));
        assert_eq!(probe(r#"{"name": 42}"#).name, None);
        assert_eq!(probe(r#"{}"#).name, None);
    }
}
