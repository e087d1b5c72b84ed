//! Driven port for journal storage.
//!
//! Every lookup and delete takes the owning [`UserId`] so adapters can only
//! ever touch rows that belong to the caller.

use async_trait::async_trait;

use crate::domain::{Journal, JournalId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by journal repository adapters.
    pub enum JournalRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "journal repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "journal repository query failed: {message}",
        /// The journal references a user that does not exist.
        UnknownOwner { user_id: String } => "journal owner {user_id} does not exist",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Persist a new journal.
    async fn insert(&self, journal: &Journal) -> Result<(), JournalRepositoryError>;

    /// All journals owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Journal>, JournalRepositoryError>;

    /// The journal with `id` if, and only if, `user_id` owns it.
    async fn find_owned(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<Option<Journal>, JournalRepositoryError>;

    /// Delete the journal with `id` owned by `user_id`, returning the number of
    /// rows removed (zero or one).
    async fn delete_owned(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<u64, JournalRepositoryError>;
}
