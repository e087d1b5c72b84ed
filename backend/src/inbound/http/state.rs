//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see driving
//! ports, so they stay testable without any storage.

use std::sync::Arc;

use crate::domain::ports::{JournalCommand, JournalQuery, LoginService, SignupService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub journals: Arc<dyn JournalCommand>,
    pub journals_query: Arc<dyn JournalQuery>,
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{JournalService, UserCredentialService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryStore;
    /// use backend::outbound::security::Argon2PasswordHasher;
    /// use mockable::DefaultClock;
    ///
    /// let store = InMemoryStore::new();
    /// let journals = Arc::new(JournalService::new(
    ///     Arc::new(store.journals()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let credentials = Arc::new(UserCredentialService::new(
    ///     Arc::new(store.users()),
    ///     Arc::new(Argon2PasswordHasher::new()),
    /// ));
    /// let state = HttpState::new(journals.clone(), journals, credentials.clone(), credentials);
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        journals: Arc<dyn JournalCommand>,
        journals_query: Arc<dyn JournalQuery>,
        signup: Arc<dyn SignupService>,
        login: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            journals,
            journals_query,
            signup,
            login,
        }
    }
}
