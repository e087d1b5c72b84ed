//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::http::Uri;
use backend::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Validate configured origins. An empty list or a `*` entry allows any
    /// origin.
    pub fn parse(origins: Vec<String>) -> std::io::Result<Self> {
        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            return Ok(Self::Any);
        }
        for origin in &origins {
            let uri: Uri = origin.parse().map_err(|err| {
                std::io::Error::other(format!("invalid CORS origin `{origin}`: {err}"))
            })?;
            if uri.scheme().is_none() || uri.host().is_none() {
                return Err(std::io::Error::other(format!(
                    "CORS origin `{origin}` must include a scheme and host"
                )));
            }
        }
        Ok(Self::List(origins))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origins: CorsOrigins,
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cors_origins: CorsOrigins) -> Self {
        Self {
            bind_addr,
            cors_origins,
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database pool. Without one the in-memory adapters are used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![])]
    #[case(vec!["*".to_owned()])]
    #[case(vec!["http://localhost:3000".to_owned(), "*".to_owned()])]
    fn wildcard_or_empty_allows_any(#[case] origins: Vec<String>) {
        assert_eq!(CorsOrigins::parse(origins).expect("valid"), CorsOrigins::Any);
    }

    #[rstest]
    fn explicit_origins_are_kept() {
        let origins = vec!["http://localhost:3000".to_owned()];
        assert_eq!(
            CorsOrigins::parse(origins.clone()).expect("valid"),
            CorsOrigins::List(origins)
        );
    }

    #[rstest]
    #[case("localhost:3000")]
    #[case("not a uri")]
    fn malformed_origins_are_rejected(#[case] origin: &str) {
        assert!(CorsOrigins::parse(vec![origin.to_owned()]).is_err());
    }
}
