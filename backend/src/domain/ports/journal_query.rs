//! Driving port for journal reads.
//!
//! Lookups never reveal whether an id exists under another owner: a foreign
//! id looks exactly like a missing one.

use async_trait::async_trait;

use crate::domain::{Error, Journal, JournalId, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalQuery: Send + Sync {
    /// Journals owned by `user_id`, newest first.
    async fn list_journals(&self, user_id: &UserId) -> Result<Vec<Journal>, Error>;

    /// A single journal owned by `user_id`, or `None`.
    async fn get_journal(&self, id: &JournalId, user_id: &UserId)
    -> Result<Option<Journal>, Error>;
}
