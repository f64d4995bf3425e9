use super::currencies_model::{Currency, NewCurrency};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for currency storage.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    /// All currencies ordered by id. An empty store yields an empty vector.
    async fn list_currencies(&self) -> Result<Vec<Currency>>;
    async fn get_currency_by_code(&self, code: &str) -> Result<Option<Currency>>;
    /// Inserts a currency and returns it with the store-assigned id.
    /// A duplicate code fails with `CurrencyError::AlreadyExists`.
    async fn insert_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
}

/// Trait defining the contract for the currency directory.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    async fn get_all_currencies(&self) -> Result<Vec<Currency>>;
    async fn get_currency_by_code(&self, code: &str) -> Result<Currency>;
    async fn add_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
}
