//! Exchange calculator — rates and amount conversion over a price table.
//!
//! Every function here returns a display-ready string and never fails: when a
//! price is missing (or the math cannot be done) the result is the
//! "unavailable" sentinel instead of an error.
//!
//! Conversions cross-multiply through USD prices rather than through the rounded
//! rate, so `convert(convert(x, A, B), B, A)` only drifts from `x` by the two
//! 6-decimal roundings.

use crate::domain::price::PriceTable;
use crate::shared::{parse_amount, to_fixed, TokenSymbol};
use rust_decimal::Decimal;

/// Returned by [`rate`] and [`convert`] when a result is unavailable.
pub const UNAVAILABLE: &str = "0";

/// Returned by [`usd_value`] when a result is unavailable.
pub const USD_UNAVAILABLE: &str = "0.00";

/// Shown in place of a token price that is not in the table.
pub const PRICE_UNAVAILABLE: &str = "—";

/// Fractional digits for rates and converted amounts.
pub const AMOUNT_DECIMALS: u32 = 6;

/// Fractional digits for USD values.
pub const USD_DECIMALS: u32 = 2;

/// Units of `dst` that one unit of `src` is worth.
pub fn rate(table: &PriceTable, src: &TokenSymbol, dst: &TokenSymbol) -> String {
    rate_decimal(table, src, dst)
        .map(|r| to_fixed(&r, AMOUNT_DECIMALS))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Unrounded rate, `None` when either price is missing or zero.
pub fn rate_decimal(table: &PriceTable, src: &TokenSymbol, dst: &TokenSymbol) -> Option<Decimal> {
    let (src_price, dst_price) = table.pair(src, dst)?;
    src_price.checked_div(dst_price)
}

/// Convert a typed `amount` of `from` into `to`.
///
/// Empty or non-numeric amounts and unknown prices yield [`UNAVAILABLE`].
pub fn convert(table: &PriceTable, amount: &str, from: &TokenSymbol, to: &TokenSymbol) -> String {
    parse_amount(amount)
        .and_then(|value| convert_decimal(table, value, from, to))
        .map(|out| to_fixed(&out, AMOUNT_DECIMALS))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// `amount * price[from] / price[to]`, unrounded.
pub fn convert_decimal(
    table: &PriceTable,
    amount: Decimal,
    from: &TokenSymbol,
    to: &TokenSymbol,
) -> Option<Decimal> {
    let (from_price, to_price) = table.pair(from, to)?;
    amount.checked_mul(from_price)?.checked_div(to_price)
}

/// USD value of a typed amount of `symbol`, to 2 decimals.
pub fn usd_value(table: &PriceTable, amount: &str, symbol: &TokenSymbol) -> String {
    parse_amount(amount)
        .zip(table.get(symbol))
        .and_then(|(value, price)| value.checked_mul(price))
        .map(|usd| to_fixed(&usd, USD_DECIMALS))
        .unwrap_or_else(|| USD_UNAVAILABLE.to_string())
}

/// Token list price, e.g. `"$1645.93"`.
pub fn price_display(table: &PriceTable, symbol: &TokenSymbol) -> String {
    match table.get(symbol) {
        Some(price) => format!("${}", to_fixed(&price, USD_DECIMALS)),
        None => PRICE_UNAVAILABLE.to_string(),
    }
}
