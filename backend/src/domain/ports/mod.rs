//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`JournalCommand`, `JournalQuery`, `LoginService`,
//! `SignupService`) are what inbound adapters call. Driven ports
//! (`JournalRepository`, `UserRepository`, `PasswordHasher`) are what the
//! services call and outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod journal_command;
mod journal_query;
mod journal_repository;
mod login_service;
mod password_hasher;
mod signup_service;
mod user_repository;

#[cfg(test)]
pub use journal_command::MockJournalCommand;
pub use journal_command::{
    CreateJournalRequest, DeleteJournalRequest, DeleteJournalResponse, JournalCommand,
};
#[cfg(test)]
pub use journal_query::MockJournalQuery;
pub use journal_query::JournalQuery;
#[cfg(test)]
pub use journal_repository::MockJournalRepository;
pub use journal_repository::{JournalRepository, JournalRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
