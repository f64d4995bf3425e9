//! Currency directory - domain models, services, and traits.

mod currencies_errors;
mod currencies_model;
mod currencies_service;
mod currencies_traits;


pub use currencies_errors::CurrencyError;
pub use currencies_model::{Currency, NewCurrency};
pub use currencies_service::CurrencyService;
pub use currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
