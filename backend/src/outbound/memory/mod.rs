//! In-process adapters for the user and journal repository ports.
//!
//! Used when no database URL is configured and throughout the HTTP tests.
//! Both repositories share one [`InMemoryStore`] so journal inserts can check
//! that the owning user exists, mirroring the foreign key in PostgreSQL.
//! Contents are lost when the process exits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    JournalRepository, JournalRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{Journal, JournalId, UserAccount, UserId};

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, UserAccount>,
    journals: HashMap<JournalId, Journal>,
}

/// Shared backing store for the in-memory repositories. Cloning shares state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository view over the user records.
    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            store: self.clone(),
        }
    }

    /// Repository view over the journal records.
    pub fn journals(&self) -> InMemoryJournalRepository {
        InMemoryJournalRepository {
            store: self.clone(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

/// [`UserRepository`] backed by an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut state = self.store.lock().map_err(UserPersistenceError::query)?;
        let email = account.user().email();
        if state.users.values().any(|existing| existing.user().email() == email) {
            return Err(UserPersistenceError::duplicate_email(email.as_ref()));
        }
        state.users.insert(*account.user().id(), account.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let state = self.store.lock().map_err(UserPersistenceError::query)?;
        Ok(state
            .users
            .values()
            .find(|account| account.user().email().as_ref() == email)
            .cloned())
    }
}

/// [`JournalRepository`] backed by an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryJournalRepository {
    store: InMemoryStore,
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn insert(&self, journal: &Journal) -> Result<(), JournalRepositoryError> {
        let mut state = self.store.lock().map_err(JournalRepositoryError::query)?;
        if !state.users.contains_key(journal.user_id()) {
            return Err(JournalRepositoryError::unknown_owner(
                journal.user_id().to_string(),
            ));
        }
        state.journals.insert(*journal.id(), journal.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Journal>, JournalRepositoryError> {
        let state = self.store.lock().map_err(JournalRepositoryError::query)?;
        let mut owned: Vec<Journal> = state
            .journals
            .values()
            .filter(|journal| journal.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().as_uuid().cmp(a.id().as_uuid()))
        });
        Ok(owned)
    }

    async fn find_owned(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<Option<Journal>, JournalRepositoryError> {
        let state = self.store.lock().map_err(JournalRepositoryError::query)?;
        Ok(state
            .journals
            .get(id)
            .filter(|journal| journal.is_owned_by(user_id))
            .cloned())
    }

    async fn delete_owned(
        &self,
        id: &JournalId,
        user_id: &UserId,
    ) -> Result<u64, JournalRepositoryError> {
        let mut state = self.store.lock().map_err(JournalRepositoryError::query)?;
        let owned = state
            .journals
            .get(id)
            .is_some_and(|journal| journal.is_owned_by(user_id));
        if owned {
            state.journals.remove(id);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}
