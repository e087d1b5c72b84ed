//! PostgreSQL-backed `UserRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, PasswordHash, User, UserAccount, UserId, UserName};

use super::diesel_basic_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserPersistenceError> {
    let UserRow {
        id,
        email,
        password_hash,
        name,
    } = row;
    let corrupt = |err: crate::domain::UserValidationError| {
        UserPersistenceError::query(format!("stored user {id}: {err}"))
    };
    let email = EmailAddress::new(email).map_err(corrupt)?;
    let name = name.map(UserName::new).transpose().map_err(corrupt)?;
    Ok(UserAccount::new(
        User::new(UserId::from_uuid(id), email, name),
        PasswordHash::new(password_hash),
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user = account.user();
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            email: user.email().as_ref(),
            password_hash: account.password_hash().as_str(),
            name: user.name().map(AsRef::as_ref),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| match constraint_violation(&err) {
                Some(ConstraintViolation::Unique) => {
                    UserPersistenceError::duplicate_email(user.email().as_ref())
                }
                _ => map_diesel_error(err),
            })
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn row(email: &str, name: Option<&str>) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            name: name.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Ada"))]
    fn rows_convert_to_accounts(#[case] name: Option<&str>) {
        let account = row_to_account(row("ada@example.com", name)).expect("valid row");
        assert_eq!(account.user().email().as_ref(), "ada@example.com");
        assert_eq!(account.user().name().map(AsRef::as_ref), name);
        assert_eq!(account.password_hash().as_str(), "$argon2id$stub");
    }

    #[rstest]
    fn corrupt_email_becomes_query_error() {
        let error = row_to_account(row("not-an-email", None)).expect_err("invalid row");
        assert!(matches!(error, UserPersistenceError::Query { .. }));
    }
}
