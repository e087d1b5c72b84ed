//! Request-scoped correlation identifier.
//!
//! The identifier lives in Tokio task-local storage so errors raised deep in
//! the service layer can pick it up without threading it through every call.
//! Task-locals do not follow `tokio::spawn` or `spawn_blocking`; wrap such work
//! in [`TraceId::scope`] to carry the identifier across.

use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT_TRACE: TraceId;
}

/// Correlation identifier attached to a single inbound request.
///
/// # Examples
/// ```
/// use backend::domain::TraceId;
///
/// async fn log_current() {
///     if let Some(id) = TraceId::current() {
///         tracing::info!(trace_id = %id, "handling request");
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The identifier currently in scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT_TRACE.try_with(|id| *id).ok()
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Run `fut` with `trace_id` installed as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = TraceId::generate();
    /// let seen = TraceId::scope(id, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT_TRACE.scope(trace_id, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scope_exposes_identifier() {
        let id = TraceId::generate();
        let seen = TraceId::scope(id, async { TraceId::current() }).await;
        assert_eq!(seen, Some(id));
    }

    #[tokio::test]
    async fn nothing_in_scope_by_default() {
        assert!(TraceId::current().is_none());
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("nil uuid parses");
        assert_eq!(id.as_uuid(), &Uuid::nil());
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-a-trace".parse::<TraceId>().is_err());
    }
}
