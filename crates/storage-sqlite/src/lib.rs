//! SQLite storage implementation for Exchanger.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `exchanger-core` and contains:
//! - Database connection pooling and the single writer actor
//! - Diesel migrations, including the seeded currencies
//! - Repository implementations for currencies and exchange rates
//!
//! ```text
//!     exchanger-core (domain, traits)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod currencies;
pub mod fx;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use currencies::CurrencyRepository;
pub use fx::FxRepository;

// Re-export from exchanger-core for convenience
pub use exchanger_core::errors::{DatabaseError, Error, Result};
