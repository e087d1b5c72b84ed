//! PostgreSQL-backed `JournalRepository` using Diesel.
//!
//! Every read and delete filters on both `id` and `user_id` in SQL, so rows
//! belonging to other users never leave the database.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JournalRepository, JournalRepositoryError};
use crate::domain::{Journal, JournalContent, JournalId, JournalTitle, UserId};

use super::diesel_basic_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{JournalRow, NewJournalRow};
use super::pool::{DbPool, PoolError};
use super::schema::journals;

/// Diesel-backed implementation of the journal repository port.
#[derive(Clone)]
pub struct DieselJournalRepository {
    pool: DbPool,
}

impl DieselJournalRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JournalRepositoryError {
    map_basic_pool_error(error, JournalRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> JournalRepositoryError {
    map_basic_diesel_error(
        error,
        JournalRepositoryError::query,
        JournalRepositoryError::connection,
    )
}

fn row_to_journal(row: JournalRow) -> Result<Journal, JournalRepositoryError> {
    let JournalRow {
        id,
        user_id,
        title,
        content,
        created_at,
        updated_at,
    } = row;
    let title = JournalTitle::new(title)
        .map_err(|err| JournalRepositoryError::query(format!("stored journal {id}: {err}")))?;
    let content = JournalContent::new(content)
        .map_err(|err| JournalRepositoryError::query(format!("stored journal {id}: {err}")))?;
    Ok(Journal::restore(
        JournalId::from_uuid(id),
        title,
        content,
        UserId::from_uuid(user_id),
        created_at,
        updated_at,
    ))
}

#[async_trait]
impl JournalRepository for DieselJournalRepository {
    async fn insert(&self, journal: &Journal) -> Result<(), JournalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewJournalRow {
            id: *journal.id().as_uuid(),
            user_id: *journal.user_id().as_uuid(),
            title: journal.title().as_ref(),
            content: journal.content().as_ref(),
            created_at: journal.created_at(),
            updated_at: journal.updated_at(),
        };

        diesel::insert_into(journals::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| match constraint_violation(&err) {
                Some(ConstraintViolation::ForeignKey) => {
                    JournalRepositoryError::unknown_owner(journal.user_id().to_string())
                }
                _ => map_diesel_error(err),
            })
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Journal>, JournalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JournalRow> = journals::table
            .filter(journals::user_id.eq(user_id.as_uuid()))
            .order((journals::created_at.desc(), journals::id.desc()))
            .select(JournalRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_journal).collect()
    }

    async fn find_owned(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<Option<Journal>, JournalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = journals::table
            .filter(journals::id.eq(id.as_uuid()))
            .filter(journals::user_id.eq(user_id.as_uuid()))
            .select(JournalRow::as_select())
            .first::<JournalRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_journal).transpose()
    }

    async fn delete_owned(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<u64, JournalRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            journals::table
                .filter(journals::id.eq(id.as_uuid()))
                .filter(journals::user_id.eq(user_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    fn row(title: &str, content: &str) -> JournalRow {
        let now = Utc::now();
        JournalRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_owned(),
            content: content.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    fn rows_convert_to_domain() {
        let source = row("Day 1", "Hello");
        let journal = row_to_journal(source.clone()).expect("valid row");
        assert_eq!(journal.id().as_uuid(), &source.id);
        assert_eq!(journal.user_id().as_uuid(), &source.user_id);
        assert_eq!(journal.title().as_ref(), "Day 1");
    }

    #[rstest]
    #[case("", "Hello")]
    #[case("Day 1", " ")]
    fn corrupt_rows_become_query_errors(#[case] title: &str, #[case] content: &str) {
        let error = row_to_journal(row(title, content)).expect_err("invalid row");
        assert!(matches!(error, JournalRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, JournalRepositoryError::connection("timed out"));
    }
}
