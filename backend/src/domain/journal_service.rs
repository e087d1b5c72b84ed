//! Journal domain service.
//!
//! Implements the journal driving ports on top of a [`JournalRepository`],
//! applying the owner filter and stamping timestamps from an injected clock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    CreateJournalRequest, DeleteJournalRequest, DeleteJournalResponse, JournalCommand,
    JournalQuery, JournalRepository, JournalRepositoryError,
};
use crate::domain::{
    Error, Journal, JournalDraft, JournalId, JournalValidationError, UserId,
};

fn map_repository_error(error: JournalRepositoryError) -> Error {
    match error {
        JournalRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("journal repository unavailable: {message}"))
        }
        JournalRepositoryError::Query { message } => {
            Error::internal(format!("journal repository error: {message}"))
        }
        JournalRepositoryError::UnknownOwner { user_id } => {
            Error::invalid_request(format!("user {user_id} does not exist"))
                .with_details(json!({ "field": "userId", "code": "unknown_user" }))
        }
    }
}

fn map_validation_error(error: JournalValidationError) -> Error {
    let (field, code) = match error {
        JournalValidationError::InvalidId => ("id", "invalid_id"),
        JournalValidationError::EmptyTitle => ("title", "empty_title"),
        JournalValidationError::EmptyContent => ("content", "empty_content"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// Owner-scoped journal service implementing [`JournalCommand`] and
/// [`JournalQuery`].
#[derive(Clone)]
pub struct JournalService<R> {
    journal_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> JournalService<R> {
    pub fn new(journal_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            journal_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> JournalCommand for JournalService<R>
where
    R: JournalRepository,
{
    async fn create_journal(&self, request: CreateJournalRequest) -> Result<Journal, Error> {
        let CreateJournalRequest {
            title,
            content,
            user_id,
        } = request;
        let draft =
            JournalDraft::try_from_parts(&title, &content, user_id).map_err(map_validation_error)?;
        let journal = Journal::from_draft(JournalId::random(), draft, self.clock.utc());

        self.journal_repo
            .insert(&journal)
            .await
            .map_err(map_repository_error)?;
        Ok(journal)
    }

    async fn delete_journal(
        &self,
        request: DeleteJournalRequest,
    ) -> Result<DeleteJournalResponse, Error> {
        let deleted_count = self
            .journal_repo
            .delete_owned(&request.id, &request.user_id)
            .await
            .map_err(map_repository_error)?;
        Ok(DeleteJournalResponse { deleted_count })
    }
}

#[async_trait]
impl<R> JournalQuery for JournalService<R>
where
    R: JournalRepository,
{
    async fn list_journals(&self, user_id: &UserId) -> Result<Vec<Journal>, Error> {
        self.journal_repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn get_journal(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<Option<Journal>, Error> {
        let found = self
            .journal_repo
            .find_owned(id, user_id)
            .await
            .map_err(map_repository_error)?;
        // Ownership is checked again here as well as in the adapter query.
        Ok(found.filter(|journal| journal.is_owned_by(user_id)))
    }
}

#[cfg(test)]
#[path = "journal_service_tests.rs"]
mod tests;
