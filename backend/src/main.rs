//! Customer inquiry server entry-point: loads settings, picks the record
//! store, and serves the HTTP API.

mod server;

use std::io;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use customer_inquiry::config::InquirySettings;
use customer_inquiry::inbound::http::health::HealthState;
use customer_inquiry::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Translate settings into a server configuration, opening the database pool
/// when a URL is configured.
async fn server_config(settings: &InquirySettings) -> io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let lookup_timeout = settings.lookup_timeout().map_err(io::Error::other)?;
    let config = ServerConfig::new(bind_addr).with_lookup_timeout(lookup_timeout);

    if let Some(database_url) = settings.database_url() {
        let max_size = settings.pool_max_size().map_err(io::Error::other)?;
        let pool_config = PoolConfig::new(database_url)
            .with_max_size(max_size)
            .with_connection_timeout(lookup_timeout);
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
        return Ok(config.with_db_pool(pool));
    }

    Ok(match settings.seed_path() {
        Some(path) => config.with_seed_path(path),
        None => config,
    })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = InquirySettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
