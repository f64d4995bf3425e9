//! SQLite storage implementation for the exchange rate ledger.

mod model;
mod repository;

pub use model::{ExchangeRateDB, ExchangeRateRow, NewExchangeRateDB};
pub use repository::FxRepository;
