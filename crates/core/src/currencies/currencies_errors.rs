use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("Currency '{0}' not found")]
    NotFound(String),

    #[error("No currencies found")]
    NoneFound,

    #[error("Currency '{0}' already exists")]
    AlreadyExists(String),
}
