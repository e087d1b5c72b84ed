//! Builders wiring domain services to storage adapters.

use std::sync::Arc;

use mockable::DefaultClock;

use backend::domain::ports::{JournalRepository, UserRepository};
use backend::domain::{JournalService, UserCredentialService};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryStore;
use backend::outbound::persistence::{DieselJournalRepository, DieselUserRepository};
use backend::outbound::security::Argon2PasswordHasher;

use super::ServerConfig;

fn state_from_repositories<J, U>(journals: Arc<J>, users: Arc<U>) -> HttpState
where
    J: JournalRepository + 'static,
    U: UserRepository + 'static,
{
    let journal_service = Arc::new(JournalService::new(journals, Arc::new(DefaultClock)));
    let credential_service = Arc::new(UserCredentialService::new(
        users,
        Arc::new(Argon2PasswordHasher::new()),
    ));
    HttpState::new(
        journal_service.clone(),
        journal_service,
        credential_service.clone(),
        credential_service,
    )
}

/// Build handler state backed by PostgreSQL when a pool is configured,
/// otherwise by a process-local in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => state_from_repositories(
            Arc::new(DieselJournalRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
        ),
        None => {
            let store = InMemoryStore::new();
            state_from_repositories(Arc::new(store.journals()), Arc::new(store.users()))
        }
    }
}
