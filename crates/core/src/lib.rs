//! Exchanger Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the exchange service: the
//! currency directory, the exchange rate ledger and the conversion resolver.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod currencies;
pub mod errors;
pub mod fx;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
