//! In-memory store used by unit tests in place of the SQLite repositories.

use crate::currencies::{Currency, CurrencyError, CurrencyRepositoryTrait, NewCurrency};
use crate::errors::{Error, Result};
use crate::fx::{ExchangeRate, FxError, FxRepositoryTrait};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Tables {
    currencies: Vec<Currency>,
    // (id, base currency id, target currency id, rate)
    rates: Vec<(i32, i32, i32, Decimal)>,
}

/// Both repositories over one shared set of tables, so rates can join currencies.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    rate_lookups: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the given `(code, name, sign)` currencies.
    pub fn with_currencies(currencies: &[(&str, &str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables.lock().unwrap();
            for (code, name, sign) in currencies {
                let id = tables.currencies.len() as i32 + 1;
                tables.currencies.push(Currency {
                    id,
                    name: name.to_string(),
                    code: code.to_string(),
                    sign: sign.to_string(),
                });
            }
        }
        store
    }

    /// Inserts a rate directly, bypassing the ledger's validation.
    pub fn put_rate(&self, base_code: &str, target_code: &str, rate: Decimal) {
        let mut tables = self.tables.lock().unwrap();
        let base_id = find_by_code(&tables, base_code).unwrap().id;
        let target_id = find_by_code(&tables, target_code).unwrap().id;
        let id = tables.rates.len() as i32 + 1;
        tables.rates.push((id, base_id, target_id, rate));
    }

    pub fn currency_count(&self) -> usize {
        self.tables.lock().unwrap().currencies.len()
    }

    pub fn rate_count(&self) -> usize {
        self.tables.lock().unwrap().rates.len()
    }

    /// Number of `get_exchange_rate` calls served so far.
    pub fn rate_lookups(&self) -> usize {
        self.rate_lookups.load(Ordering::SeqCst)
    }
}

fn find_by_code<'a>(tables: &'a Tables, code: &str) -> Option<&'a Currency> {
    tables.currencies.iter().find(|c| c.code == code)
}

fn find_by_id(tables: &Tables, id: i32) -> Result<Currency> {
    tables
        .currencies
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| Error::Unexpected(format!("dangling currency id {}", id)))
}

fn join(tables: &Tables, row: &(i32, i32, i32, Decimal)) -> Result<ExchangeRate> {
    let (id, base_id, target_id, rate) = *row;
    Ok(ExchangeRate {
        id,
        base_currency: find_by_id(tables, base_id)?,
        target_currency: find_by_id(tables, target_id)?,
        rate,
    })
}

#[async_trait]
impl CurrencyRepositoryTrait for InMemoryStore {
    async fn list_currencies(&self) -> Result<Vec<Currency>> {
        Ok(self.tables.lock().unwrap().currencies.clone())
    }

    async fn get_currency_by_code(&self, code: &str) -> Result<Option<Currency>> {
        Ok(find_by_code(&self.tables.lock().unwrap(), code).cloned())
    }

    async fn insert_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        let mut tables = self.tables.lock().unwrap();
        if find_by_code(&tables, &new_currency.code).is_some() {
            return Err(CurrencyError::AlreadyExists(new_currency.code).into());
        }
        let currency = Currency {
            id: tables.currencies.len() as i32 + 1,
            name: new_currency.name,
            code: new_currency.code,
            sign: new_currency.sign,
        };
        tables.currencies.push(currency.clone());
        Ok(currency)
    }
}

#[async_trait]
impl FxRepositoryTrait for InMemoryStore {
    async fn list_exchange_rates(&self) -> Result<Vec<ExchangeRate>> {
        let tables = self.tables.lock().unwrap();
        tables.rates.iter().map(|row| join(&tables, row)).collect()
    }

    async fn get_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
    ) -> Result<Option<ExchangeRate>> {
        self.rate_lookups.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        let (Some(base), Some(target)) = (
            find_by_code(&tables, base_code),
            find_by_code(&tables, target_code),
        ) else {
            return Ok(None);
        };
        tables
            .rates
            .iter()
            .find(|(_, b, t, _)| *b == base.id && *t == target.id)
            .map(|row| join(&tables, row))
            .transpose()
    }

    async fn insert_exchange_rate(
        &self,
        base: &Currency,
        target: &Currency,
        rate: Decimal,
    ) -> Result<ExchangeRate> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .rates
            .iter()
            .any(|(_, b, t, _)| *b == base.id && *t == target.id)
        {
            return Err(FxError::RateAlreadyExists {
                from: base.code.clone(),
                to: target.code.clone(),
            }
            .into());
        }
        let row = (tables.rates.len() as i32 + 1, base.id, target.id, rate);
        tables.rates.push(row);
        join(&tables, &row)
    }

    async fn update_exchange_rate(
        &self,
        base: &Currency,
        target: &Currency,
        rate: Decimal,
    ) -> Result<Option<ExchangeRate>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(row) = tables
            .rates
            .iter_mut()
            .find(|(_, b, t, _)| *b == base.id && *t == target.id)
        else {
            return Ok(None);
        };
        row.3 = rate;
        let row = *row;
        join(&tables, &row).map(Some)
    }
}
