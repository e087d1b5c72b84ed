//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: process-local repositories sharing one store.
//! - **security**: Argon2id password hashing.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business rules.

pub mod memory;
pub mod persistence;
pub mod security;
