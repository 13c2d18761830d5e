//! Conversion: PriceRecordResponse → PriceRecord (TryFrom + validation).

use super::wire::PriceRecordResponse;
use super::{PriceRecord, RecordValidationError};
use crate::shared::TokenSymbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

impl TryFrom<PriceRecordResponse> for PriceRecord {
    type Error = RecordValidationError;

    fn try_from(source: PriceRecordResponse) -> Result<Self, Self::Error> {
        let currency = source
            .currency
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(RecordValidationError::MissingCurrency)?;

        let price = source
            .price
            .ok_or_else(|| RecordValidationError::MissingPrice(currency.clone()))?;
        if price <= Decimal::ZERO {
            return Err(RecordValidationError::NonPositivePrice(currency, price));
        }

        let raw_date = source
            .date
            .ok_or_else(|| RecordValidationError::MissingDate(currency.clone()))?;
        let date = DateTime::parse_from_rfc3339(raw_date.trim())
            .map(|d| d.with_timezone(&Utc))
            .map_err(|_| RecordValidationError::InvalidDate(currency.clone(), raw_date))?;

        Ok(PriceRecord {
            currency: TokenSymbol::new(currency),
            price,
            date,
        })
    }
}

/// Validate a whole feed, keeping input order.
///
/// Returns the valid records and the rejections, one per malformed entry.
pub fn validate_records(
    source: Vec<PriceRecordResponse>,
) -> (Vec<PriceRecord>, Vec<RecordValidationError>) {
    let mut records = Vec::with_capacity(source.len());
    let mut errors = Vec::new();

    for raw in source {
        match PriceRecord::try_from(raw) {
            Ok(record) => records.push(record),
            Err(err) => errors.push(err),
        }
    }

    (records, errors)
}
