//! Database models for exchange rates.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use exchanger_core::currencies::Currency;
use exchanger_core::fx::ExchangeRate;
use rust_decimal::Decimal;

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::exchange_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExchangeRateDB {
    pub id: i32,
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::exchange_rates)]
pub struct NewExchangeRateDB {
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: String,
}

/// One rate joined with both of its currencies, as loaded by raw SQL.
#[derive(QueryableByName, Debug, Clone)]
pub struct ExchangeRateRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub rate: String,
    #[diesel(sql_type = Integer)]
    pub base_id: i32,
    #[diesel(sql_type = Text)]
    pub base_code: String,
    #[diesel(sql_type = Text)]
    pub base_name: String,
    #[diesel(sql_type = Text)]
    pub base_sign: String,
    #[diesel(sql_type = Integer)]
    pub target_id: i32,
    #[diesel(sql_type = Text)]
    pub target_code: String,
    #[diesel(sql_type = Text)]
    pub target_name: String,
    #[diesel(sql_type = Text)]
    pub target_sign: String,
}

pub(crate) fn parse_rate(raw: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(raw)
        .map_err(|e| StorageError::SerializationError(format!("invalid stored rate '{}': {}", raw, e)))
}

impl TryFrom<ExchangeRateRow> for ExchangeRate {
    type Error = StorageError;

    fn try_from(row: ExchangeRateRow) -> Result<Self, Self::Error> {
        Ok(ExchangeRate {
            id: row.id,
            rate: parse_rate(&row.rate)?,
            base_currency: Currency {
                id: row.base_id,
                name: row.base_name,
                code: row.base_code,
                sign: row.base_sign,
            },
            target_currency: Currency {
                id: row.target_id,
                name: row.target_name,
                code: row.target_code,
                sign: row.target_sign,
            },
        })
    }
}

impl ExchangeRateDB {
    /// Attaches the already-resolved currencies to a freshly written row.
    pub fn into_domain(
        self,
        base: &Currency,
        target: &Currency,
    ) -> Result<ExchangeRate, StorageError> {
        Ok(ExchangeRate {
            id: self.id,
            base_currency: base.clone(),
            target_currency: target.clone(),
            rate: parse_rate(&self.rate)?,
        })
    }
}
