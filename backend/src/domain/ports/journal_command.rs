//! Driving port for journal mutations.

use async_trait::async_trait;

use crate::domain::{Error, Journal, JournalId, UserId};

/// Raw journal input; the service validates title and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJournalRequest {
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteJournalRequest {
    pub id: JournalId,
    pub user_id: UserId,
}

/// Outcome of an owner-scoped delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteJournalResponse {
    /// Rows removed: one on success, zero when nothing matched.
    pub deleted_count: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalCommand: Send + Sync {
    /// Validate and store a new journal for `request.user_id`.
    async fn create_journal(&self, request: CreateJournalRequest) -> Result<Journal, Error>;

    /// Remove a journal if the caller owns it. Repeated calls are no-ops.
    async fn delete_journal(
        &self,
        request: DeleteJournalRequest,
    ) -> Result<DeleteJournalResponse, Error>;
}
