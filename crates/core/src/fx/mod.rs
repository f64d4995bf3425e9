//! FX (Foreign Exchange) module - rate ledger, conversion resolver, models and traits.

mod conversion_service;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;


pub use conversion_service::{ConversionService, RateStrategy};
pub use fx_errors::FxError;
pub use fx_model::{CurrencyConversion, CurrencyPair, ExchangeRate};
pub use fx_service::FxService;
pub use fx_traits::{ConversionServiceTrait, FxRepositoryTrait, FxServiceTrait};
