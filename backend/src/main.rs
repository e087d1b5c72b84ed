//! Backend entry-point: loads settings, prepares storage and serves the REST
//! API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::ServerSettings;
use server::{CorsOrigins, ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let bind_addr = settings.bind_addr()?;
    let cors_origins = CorsOrigins::parse(settings.cors_allowed_origins())?;
    let mut config = ServerConfig::new(bind_addr, cors_origins);

    match settings.database_url() {
        Some(database_url) => {
            run_pending_migrations(database_url)
                .await
                .wrap_err("failed to apply database migrations")?;
            let pool_config =
                PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to create database pool")?;
            info!(
                max_connections = settings.db_max_connections(),
                "using PostgreSQL storage"
            );
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("no database URL configured; journals and accounts are kept in memory only");
        }
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(Some(make_metrics()?));
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "journaly backend listening");
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated unexpectedly")
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("journaly")
        .endpoint("/metrics")
        .build()
        .map_err(|err| color_eyre::eyre::eyre!("failed to configure Prometheus metrics: {err}"))
}
