use exchanger_core::currencies::{
    Currency, CurrencyError, CurrencyRepositoryTrait, NewCurrency,
};
use exchanger_core::Result;

use super::model::{CurrencyDB, NewCurrencyDB};
use crate::db::{self, DbPool, WriteHandle};
use crate::errors::{is_unique_violation, IntoCore, StorageError};
use crate::schema::currencies;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct CurrencyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CurrencyRepository { pool, writer }
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    async fn list_currencies(&self) -> Result<Vec<Currency>> {
        db::read(&self.pool, |conn| {
            let rows = currencies::table
                .order(currencies::id.asc())
                .select(CurrencyDB::as_select())
                .load::<CurrencyDB>(conn)
                .into_core()?;
            Ok(rows.into_iter().map(Currency::from).collect())
        })
        .await
    }

    async fn get_currency_by_code(&self, code: &str) -> Result<Option<Currency>> {
        let code = code.to_string();
        db::read(&self.pool, move |conn| {
            let row = currencies::table
                .filter(currencies::code.eq(&code))
                .select(CurrencyDB::as_select())
                .first::<CurrencyDB>(conn)
                .optional()
                .into_core()?;
            Ok(row.map(Currency::from))
        })
        .await
    }

    async fn insert_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Currency> {
                let new_currency_db: NewCurrencyDB = new_currency.into();
                let code = new_currency_db.code.clone();

                let inserted = diesel::insert_into(currencies::table)
                    .values(&new_currency_db)
                    .returning(CurrencyDB::as_returning())
                    .get_result(conn)
                    .map_err(|e| {
                        if is_unique_violation(&e) {
                            exchanger_core::Error::from(CurrencyError::AlreadyExists(code))
                        } else {
                            exchanger_core::Error::from(StorageError::from(e))
                        }
                    })?;
                Ok(Currency::from(inserted))
            })
            .await
    }
}
