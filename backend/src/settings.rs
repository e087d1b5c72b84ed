//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `JOURNALY_*` environment variables and an
//! optional config file, in the usual OrthoConfig precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address used when `bind_addr` is not configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
/// Pool size used when `db_max_connections` is not configured.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Runtime settings for the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOURNALY")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// PostgreSQL connection string. Without it the server keeps data in
    /// memory only.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = DEFAULT_DB_MAX_CONNECTIONS)]
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    /// Allowed CORS origins, comma-separated in the environment. Empty allows
    /// any origin.
    #[ortho_config(default = Vec::new())]
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_owned()
}

fn default_db_max_connections() -> u32 {
    DEFAULT_DB_MAX_CONNECTIONS
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl ServerSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.trim();
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Allowed CORS origins with blank entries dropped. Empty means any origin.
    pub fn cors_allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
