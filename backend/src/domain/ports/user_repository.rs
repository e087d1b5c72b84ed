//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::UserAccount;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already uses this email.
        DuplicateEmail { email: String } => "email {email} is already registered",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account. Fails with `DuplicateEmail` if the email is taken.
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError>;

    /// Look up an account by exact email match.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;
}
