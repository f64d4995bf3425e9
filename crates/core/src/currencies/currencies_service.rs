use super::currencies_errors::CurrencyError;
use super::currencies_model::{Currency, NewCurrency};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Currency directory backed by a `CurrencyRepositoryTrait` implementation.
#[derive(Clone)]
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    async fn get_all_currencies(&self) -> Result<Vec<Currency>> {
        let currencies = self.repository.list_currencies().await?;
        if currencies.is_empty() {
            return Err(CurrencyError::NoneFound.into());
        }
        Ok(currencies)
    }

    async fn get_currency_by_code(&self, code: &str) -> Result<Currency> {
        self.repository
            .get_currency_by_code(code)
            .await?
            .ok_or_else(|| CurrencyError::NotFound(code.to_string()).into())
    }

    async fn add_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        new_currency.validate()?;

        let currency = self.repository.insert_currency(new_currency).await?;
        log::info!("Added currency {} (id {})", currency.code, currency.id);
        Ok(currency)
    }
}
