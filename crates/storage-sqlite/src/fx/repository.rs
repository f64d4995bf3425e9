use exchanger_core::currencies::Currency;
use exchanger_core::fx::{ExchangeRate, FxError, FxRepositoryTrait};
use exchanger_core::{Error, Result};

use super::model::{ExchangeRateDB, ExchangeRateRow, NewExchangeRateDB};
use crate::db::{self, DbPool, WriteHandle};
use crate::errors::{is_unique_violation, IntoCore, StorageError};
use crate::schema::exchange_rates;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

const SELECT_RATES: &str = "
    SELECT er.id AS id,
           er.rate AS rate,
           bc.id AS base_id,
           bc.code AS base_code,
           bc.full_name AS base_name,
           bc.sign AS base_sign,
           tc.id AS target_id,
           tc.code AS target_code,
           tc.full_name AS target_name,
           tc.sign AS target_sign
    FROM exchange_rates er
    INNER JOIN currencies bc ON er.base_currency_id = bc.id
    INNER JOIN currencies tc ON er.target_currency_id = tc.id";

#[derive(Clone)]
pub struct FxRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FxRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn rows_to_rates(rows: Vec<ExchangeRateRow>) -> Result<Vec<ExchangeRate>> {
    rows.into_iter()
        .map(|row| ExchangeRate::try_from(row).map_err(Error::from))
        .collect()
}

#[async_trait]
impl FxRepositoryTrait for FxRepository {
    async fn list_exchange_rates(&self) -> Result<Vec<ExchangeRate>> {
        db::read(&self.pool, |conn| {
            let query = format!("{} ORDER BY er.id", SELECT_RATES);
            let rows: Vec<ExchangeRateRow> = sql_query(query)
                .load(conn)
                .into_core()?;
            rows_to_rates(rows)
        })
        .await
    }

    async fn get_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
    ) -> Result<Option<ExchangeRate>> {
        let base_code = base_code.to_string();
        let target_code = target_code.to_string();
        db::read(&self.pool, move |conn| {
            let query = format!("{} WHERE bc.code = ? AND tc.code = ?", SELECT_RATES);
            let row: Option<ExchangeRateRow> = sql_query(query)
                .bind::<Text, _>(&base_code)
                .bind::<Text, _>(&target_code)
                .get_result(conn)
                .optional()
                .into_core()?;
            row.map(|r| ExchangeRate::try_from(r).map_err(Error::from))
                .transpose()
        })
        .await
    }

    async fn insert_exchange_rate(
        &self,
        base: &Currency,
        target: &Currency,
        rate: Decimal,
    ) -> Result<ExchangeRate> {
        let base = base.clone();
        let target = target.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ExchangeRate> {
                let new_rate = NewExchangeRateDB {
                    base_currency_id: base.id,
                    target_currency_id: target.id,
                    rate: rate.to_string(),
                };

                let inserted = diesel::insert_into(exchange_rates::table)
                    .values(&new_rate)
                    .returning(ExchangeRateDB::as_returning())
                    .get_result(conn)
                    .map_err(|e| {
                        if is_unique_violation(&e) {
                            Error::from(FxError::RateAlreadyExists {
                                from: base.code.clone(),
                                to: target.code.clone(),
                            })
                        } else {
                            Error::from(StorageError::from(e))
                        }
                    })?;
                Ok(inserted.into_domain(&base, &target)?)
            })
            .await
    }

    async fn update_exchange_rate(
        &self,
        base: &Currency,
        target: &Currency,
        rate: Decimal,
    ) -> Result<Option<ExchangeRate>> {
        let base = base.clone();
        let target = target.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<ExchangeRate>> {
                let updated = diesel::update(
                    exchange_rates::table
                        .filter(exchange_rates::base_currency_id.eq(base.id))
                        .filter(exchange_rates::target_currency_id.eq(target.id)),
                )
                .set(exchange_rates::rate.eq(rate.to_string()))
                .returning(ExchangeRateDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?;

                match updated {
                    Some(row) => Ok(Some(row.into_domain(&base, &target)?)),
                    None => Ok(None),
                }
            })
            .await
    }
}
