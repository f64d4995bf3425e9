use crate::constants::CURRENCY_CODE_LENGTH;
use crate::currencies::Currency;
use crate::errors::Result;
use crate::fx::fx_errors::FxError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A directed rate: one unit of `base_currency` buys `rate` units of `target_currency`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: i32,
    pub base_currency: Currency,
    pub target_currency: Currency,
    pub rate: Decimal,
}

/// Result of a single conversion. `rate` is the effective rate that was applied,
/// which may be inverted or bridged rather than stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversion {
    pub base_currency: Currency,
    pub target_currency: Currency,
    pub rate: Decimal,
    pub amount: Decimal,
    pub converted_amount: Decimal,
}

/// Ordered pair of currency codes, as written in `/exchangeRate/USDEUR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    pub base: String,
    pub target: String,
}

impl CurrencyPair {
    /// Splits a concatenated pair such as `USDEUR` into its two codes.
    /// Anything other than exactly two three-character codes is rejected.
    pub fn parse(pair: &str) -> Result<Self> {
        let chars: Vec<char> = pair.chars().collect();
        if chars.len() != CURRENCY_CODE_LENGTH * 2 {
            return Err(FxError::InvalidCurrencyPair(format!(
                "'{}' must be two {}-letter currency codes",
                pair, CURRENCY_CODE_LENGTH
            ))
            .into());
        }

        let (base, target) = chars.split_at(CURRENCY_CODE_LENGTH);
        Ok(Self {
            base: base.iter().collect(),
            target: target.iter().collect(),
        })
    }
}
