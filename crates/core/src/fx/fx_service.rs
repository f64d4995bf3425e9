use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use super::fx_traits::{FxRepositoryTrait, FxServiceTrait};
use crate::currencies::{Currency, CurrencyServiceTrait};
use crate::errors::{Result, ValidationError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Rate ledger: CRUD over directed currency-pair rates.
#[derive(Clone)]
pub struct FxService {
    repository: Arc<dyn FxRepositoryTrait>,
    currency_service: Arc<dyn CurrencyServiceTrait>,
}

impl FxService {
    pub fn new(
        repository: Arc<dyn FxRepositoryTrait>,
        currency_service: Arc<dyn CurrencyServiceTrait>,
    ) -> Self {
        Self {
            repository,
            currency_service,
        }
    }

    fn validate_rate(rate: Decimal) -> Result<()> {
        if rate <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Exchange rate must be greater than zero, got {}",
                rate
            ))
            .into());
        }
        Ok(())
    }

    /// Resolves both codes to stored currencies, base first.
    async fn resolve_pair(&self, base_code: &str, target_code: &str) -> Result<(Currency, Currency)> {
        let base = self.currency_service.get_currency_by_code(base_code).await?;
        let target = self
            .currency_service
            .get_currency_by_code(target_code)
            .await?;
        Ok((base, target))
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn get_all_exchange_rates(&self) -> Result<Vec<ExchangeRate>> {
        let rates = self.repository.list_exchange_rates().await?;
        if rates.is_empty() {
            return Err(FxError::NoneFound.into());
        }
        Ok(rates)
    }

    async fn get_exchange_rate(&self, base_code: &str, target_code: &str) -> Result<ExchangeRate> {
        self.repository
            .get_exchange_rate(base_code, target_code)
            .await?
            .ok_or_else(|| FxError::rate_not_found(base_code, target_code).into())
    }

    async fn add_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
        rate: Decimal,
    ) -> Result<ExchangeRate> {
        Self::validate_rate(rate)?;
        if base_code == target_code {
            return Err(ValidationError::InvalidInput(format!(
                "Base and target currency must differ, got {}/{}",
                base_code, target_code
            ))
            .into());
        }

        let (base, target) = self.resolve_pair(base_code, target_code).await?;
        let created = self
            .repository
            .insert_exchange_rate(&base, &target, rate)
            .await?;

        log::info!(
            "Added exchange rate {}/{} = {} (id {})",
            base_code,
            target_code,
            rate,
            created.id
        );
        Ok(created)
    }

    async fn update_exchange_rate(
        &self,
        base_code: &str,
        target_code: &str,
        rate: Decimal,
    ) -> Result<ExchangeRate> {
        Self::validate_rate(rate)?;

        let (base, target) = self.resolve_pair(base_code, target_code).await?;
        let updated = self
            .repository
            .update_exchange_rate(&base, &target, rate)
            .await?
            .ok_or_else(|| FxError::rate_not_found(base_code, target_code))?;

        log::info!(
            "Updated exchange rate {}/{} = {} (id {})",
            base_code,
            target_code,
            rate,
            updated.id
        );
        Ok(updated)
    }
}
