use super::fx_model::{CurrencyConversion, ExchangeRate};
use crate::currencies::Currency;
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait defining the contract for exchange rate storage.
#[async_trait]
pub trait FxRepositoryTrait: Send + Sync {
    /// All rates ordered by id, each with both currencies joined in.
    async fn list_exchange_rates(&self) -> Result<Vec<ExchangeRate>>;
    /// Rate for the exact ordered pair, looked up by code.
    async fn get_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
    ) -> Result<Option<ExchangeRate>>;
    /// A duplicate ordered pair fails with `FxError::RateAlreadyExists`.
    async fn insert_exchange_rate(
        &self,
        base: &Currency,
        target: &Currency,
        rate: Decimal,
    ) -> Result<ExchangeRate>;
    /// Returns `None` when the ordered pair has no row. Never inserts.
    async fn update_exchange_rate(
        &self,
        base: &Currency,
        target: &Currency,
        rate: Decimal,
    ) -> Result<Option<ExchangeRate>>;
}

/// Trait defining the contract for the rate ledger.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    async fn get_all_exchange_rates(&self) -> Result<Vec<ExchangeRate>>;
    async fn get_exchange_rate(&self, base_code: &str, target_code: &str) -> Result<ExchangeRate>;
    async fn add_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
        rate: Decimal,
    ) -> Result<ExchangeRate>;
    async fn update_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
        rate: Decimal,
    ) -> Result<ExchangeRate>;
}

/// Trait defining the contract for currency conversion.
#[async_trait]
pub trait ConversionServiceTrait: Send + Sync {
    async fn convert_currency(
        &self,
        from_code: &str,
        to_code: &str,
        amount: Decimal,
    ) -> Result<CurrencyConversion>;
}
