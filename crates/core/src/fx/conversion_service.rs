use super::fx_errors::FxError;
use super::fx_model::CurrencyConversion;
use super::fx_traits::{ConversionServiceTrait, FxRepositoryTrait};
use crate::constants::DEFAULT_ANCHOR_CURRENCY;
use crate::currencies::CurrencyServiceTrait;
use crate::errors::{Result, ValidationError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// One way of deriving a rate between two currencies from the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateStrategy {
    /// Stored rate for `from -> to`.
    Direct,
    /// Reciprocal of the stored rate for `to -> from`.
    Inverse,
    /// `rate(anchor -> to) / rate(anchor -> from)`.
    Bridge,
}

impl RateStrategy {
    /// Resolution order. The first strategy that yields a rate wins.
    pub const ORDERED: [RateStrategy; 3] = [
        RateStrategy::Direct,
        RateStrategy::Inverse,
        RateStrategy::Bridge,
    ];
}

impl fmt::Display for RateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateStrategy::Direct => "direct",
            RateStrategy::Inverse => "inverse",
            RateStrategy::Bridge => "bridge",
        };
        f.write_str(name)
    }
}

/// Conversion resolver. Finds an effective rate through direct, inverse or
/// single-hop bridged lookup and applies it to the amount.
#[derive(Clone)]
pub struct ConversionService {
    currency_service: Arc<dyn CurrencyServiceTrait>,
    repository: Arc<dyn FxRepositoryTrait>,
    anchor_currency: String,
}

impl ConversionService {
    pub fn new(
        currency_service: Arc<dyn CurrencyServiceTrait>,
        repository: Arc<dyn FxRepositoryTrait>,
    ) -> Self {
        Self {
            currency_service,
            repository,
            anchor_currency: DEFAULT_ANCHOR_CURRENCY.to_string(),
        }
    }

    /// Sets the currency used as the bridge for cross rates.
    pub fn with_anchor_currency(mut self, anchor_currency: impl Into<String>) -> Self {
        self.anchor_currency = anchor_currency.into();
        self
    }

    pub fn anchor_currency(&self) -> &str {
        &self.anchor_currency
    }

    async fn stored_rate(&self, base_code: &str, target_code: &str) -> Result<Option<Decimal>> {
        Ok(self
            .repository
            .get_exchange_rate(base_code, target_code)
            .await?
            .map(|rate| rate.rate))
    }

    /// Effective rate for `from -> to` under a single strategy, or `None` when the
    /// rates that strategy needs are not in the ledger.
    async fn rate_for(
        &self,
        strategy: RateStrategy,
        from_code: &str,
        to_code: &str,
    ) -> Result<Option<Decimal>> {
        match strategy {
            RateStrategy::Direct => self.stored_rate(from_code, to_code).await,
            RateStrategy::Inverse => match self.stored_rate(to_code, from_code).await? {
                Some(reverse) => divide(Decimal::ONE, reverse).map(Some),
                None => Ok(None),
            },
            RateStrategy::Bridge => {
                let anchor = self.anchor_currency.as_str();
                let Some(anchor_to_from) = self.stored_rate(anchor, from_code).await? else {
                    return Ok(None);
                };
                let Some(anchor_to_target) = self.stored_rate(anchor, to_code).await? else {
                    return Ok(None);
                };
                divide(anchor_to_target, anchor_to_from).map(Some)
            }
        }
    }
}

fn divide(numerator: Decimal, denominator: Decimal) -> Result<Decimal> {
    numerator.checked_div(denominator).ok_or_else(|| {
        FxError::ConversionError(format!("cannot divide {} by {}", numerator, denominator)).into()
    })
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn convert_currency(
        &self,
        from_code: &str,
        to_code: &str,
        amount: Decimal,
    ) -> Result<CurrencyConversion> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Amount must be greater than zero, got {}",
                amount
            ))
            .into());
        }

        let base_currency = self.currency_service.get_currency_by_code(from_code).await?;
        let target_currency = self.currency_service.get_currency_by_code(to_code).await?;

        for strategy in RateStrategy::ORDERED {
            let Some(rate) = self.rate_for(strategy, from_code, to_code).await? else {
                continue;
            };

            let converted_amount = amount.checked_mul(rate).ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "Amount {} is too large to convert at rate {}",
                    amount, rate
                ))
            })?;

            log::debug!(
                "Converted {} {} -> {} using {} rate {}",
                amount,
                from_code,
                to_code,
                strategy,
                rate
            );

            return Ok(CurrencyConversion {
                base_currency,
                target_currency,
                rate,
                amount,
                converted_amount,
            });
        }

        Err(FxError::rate_not_found(from_code, to_code).into())
    }
}
