//! Price state containers — latest price per token, built once per fetch.

use super::wire::{PriceRecordResponse, PricesResponse};
use super::{validate_records, PriceRecord};
use crate::error::SwapError;
use crate::shared::TokenSymbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

// ─── PriceTable ──────────────────────────────────────────────────────────────

/// Latest known price per token symbol. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceTable {
    prices: HashMap<TokenSymbol, Decimal>,
}

impl PriceTable {
    pub fn get(&self, symbol: &TokenSymbol) -> Option<Decimal> {
        self.prices.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &TokenSymbol) -> bool {
        self.prices.contains_key(symbol)
    }

    /// Both prices, or `None` when either is unknown.
    pub fn pair(&self, a: &TokenSymbol, b: &TokenSymbol) -> Option<(Decimal, Decimal)> {
        Some((self.get(a)?, self.get(b)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenSymbol, &Decimal)> {
        self.prices.iter()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(TokenSymbol, Decimal)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (TokenSymbol, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

// ─── TokenSet ────────────────────────────────────────────────────────────────

/// Distinct token symbols in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenSet {
    symbols: Vec<TokenSymbol>,
}

impl TokenSet {
    pub fn get(&self, index: usize) -> Option<&TokenSymbol> {
        self.symbols.get(index)
    }

    pub fn contains(&self, symbol: &TokenSymbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenSymbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[TokenSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a TokenSymbol;
    type IntoIter = std::slice::Iter<'a, TokenSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Reduce a batch of records to one price per currency.
///
/// A later record replaces the stored one only when its date is strictly later;
/// on an exact tie the record seen first wins.
pub fn normalize<I>(records: I) -> (PriceTable, TokenSet)
where
    I: IntoIterator<Item = PriceRecord>,
{
    let mut latest: HashMap<TokenSymbol, (Decimal, DateTime<Utc>)> = HashMap::new();
    let mut symbols: Vec<TokenSymbol> = Vec::new();

    for record in records {
        match latest.get_mut(&record.currency) {
            Some(entry) => {
                if record.date > entry.1 {
                    *entry = (record.price, record.date);
                }
            }
            None => {
                symbols.push(record.currency.clone());
                latest.insert(record.currency, (record.price, record.date));
            }
        }
    }

    let table = latest
        .into_iter()
        .map(|(symbol, (price, _))| (symbol, price))
        .collect();

    (table, TokenSet { symbols })
}

// ─── PriceBook ───────────────────────────────────────────────────────────────

/// The result of one successful fetch: prices plus selectable tokens.
///
/// Replaced wholesale on every refresh; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceBook {
    pub table: PriceTable,
    pub tokens: TokenSet,
}

impl PriceBook {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PriceRecord>,
    {
        let (table, tokens) = normalize(records);
        Self { table, tokens }
    }

    /// Validate a raw feed and normalize what survives.
    ///
    /// Rejected entries are logged and skipped.
    pub fn ingest(source: Vec<PriceRecordResponse>) -> Self {
        let received = source.len();
        let (records, rejected) = validate_records(source);

        for err in &rejected {
            tracing::warn!(currency = err.currency(), "Skipping price record: {}", err);
        }

        let book = Self::from_records(records);
        tracing::debug!(
            received,
            rejected = rejected.len(),
            tokens = book.tokens.len(),
            "Normalized price feed"
        );
        book
    }

    /// Parse a raw feed body (for hosts that fetch it themselves) and ingest it.
    pub fn from_json(body: &str) -> Result<Self, SwapError> {
        let feed: PricesResponse = serde_json::from_str(body)?;
        Ok(Self::ingest(feed))
    }

    pub fn price(&self, symbol: &TokenSymbol) -> Option<Decimal> {
        self.table.get(symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
