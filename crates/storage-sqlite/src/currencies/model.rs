//! Database models for currencies.

use diesel::prelude::*;
use exchanger_core::currencies::{Currency, NewCurrency};

/// Database model for currencies. The display name lives in `full_name`.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::currencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub id: i32,
    pub code: String,
    pub full_name: String,
    pub sign: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::currencies)]
pub struct NewCurrencyDB {
    pub code: String,
    pub full_name: String,
    pub sign: String,
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            id: db.id,
            name: db.full_name,
            code: db.code,
            sign: db.sign,
        }
    }
}

impl From<NewCurrency> for NewCurrencyDB {
    fn from(domain: NewCurrency) -> Self {
        Self {
            code: domain.code,
            full_name: domain.name,
            sign: domain.sign,
        }
    }
}
