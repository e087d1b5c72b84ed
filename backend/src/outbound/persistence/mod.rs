//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and domain types;
//! row structs (`models.rs`) and table definitions (`schema.rs`) never leave
//! this module. Connections come from a `bb8` pool through `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselJournalRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/journaly")).await?;
//! let journals = DieselJournalRepository::new(pool);
//! # let _ = journals;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_journal_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_journal_repository::DieselJournalRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
