use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Exchange rate {from}/{to} not found")]
    RateNotFound { from: String, to: String },

    #[error("No exchange rates found")]
    NoneFound,

    #[error("Exchange rate {from}/{to} already exists")]
    RateAlreadyExists { from: String, to: String },

    #[error("Invalid currency pair: {0}")]
    InvalidCurrencyPair(String),

    #[error("Currency conversion error: {0}")]
    ConversionError(String),
}

impl FxError {
    pub fn rate_not_found(from: &str, to: &str) -> Self {
        FxError::RateNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
