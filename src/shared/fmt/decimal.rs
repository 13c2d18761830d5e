//! Decimal formatting utilities for form fields and display strings.
//!
//! Handles `rust_decimal::Decimal` values with fixed decimal places (the form shows
//! amounts and rates with a constant number of digits) and lenient parsing of
//! user-typed amounts.

use rust_decimal::prelude::*;

/// Format a `Decimal` with exactly `decimals` fractional digits.
///
/// Rounds half away from zero, then pads with trailing zeros, so `200` at 6 places
/// becomes `"200.000000"` and `0.0000005` becomes `"0.000001"`.
pub fn to_fixed(value: &Decimal, decimals: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(decimals);
    rounded.to_string()
}

/// Parse a user-typed amount.
///
/// Accepts plain decimals (`"12.5"`) and exponent notation (`"1e3"`), ignoring
/// surrounding whitespace. Returns `None` for empty or non-numeric input.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_to_fixed_pads_trailing_zeros() {
        assert_eq!(to_fixed(&dec("200"), 6), "200.000000");
        assert_eq!(to_fixed(&dec("0.05"), 6), "0.050000");
        assert_eq!(to_fixed(&Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(&dec("1.2345675"), 6), "1.234568");
        assert_eq!(to_fixed(&dec("12.345"), 2), "12.35");
        assert_eq!(to_fixed(&dec("-12.345"), 2), "-12.35");
        assert_eq!(to_fixed(&dec("0.0000004"), 6), "0.000000");
    }

    #[test]
    fn test_to_fixed_never_prints_negative_zero() {
        assert_eq!(to_fixed(&dec("-0.0000001"), 6), "0.000000");
    }

    #[test]
    fn test_parse_amount_plain_and_whitespace() {
        assert_eq!(parse_amount("10"), Some(dec("10")));
        assert_eq!(parse_amount(" 2.5 "), Some(dec("2.5")));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_amount_scientific() {
        assert_eq!(parse_amount("1e3"), Some(dec("1000")));
        assert_eq!(parse_amount("2.5e-3"), Some(dec("0.0025")));
    }

    #[test]
    fn test_parse_amount_rejects_empty_and_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }
}
