use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat};
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use service::{catalog::CatalogService, seed};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, graphql, routes};

/// Initialize logging in the configured format
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from the config file when present, otherwise from
/// defaults overridden by `SERVER_HOST`, `SERVER_PORT`,
/// `TOKIO_WORKER_THREADS` and `DATABASE_URL`.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = configs::config_path();
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate()
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")));
    }

    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    if let Some(w) = env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
        cfg.server.worker_threads = Some(w);
    }
    cfg.database.url = models::db::DATABASE_URL.clone();
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.server.host, cfg.server.port);
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Connect, migrate, seed and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;

    match seed::seed_catalog(&db, &cfg.seed).await {
        Ok(report) => info!(?report, "seed finished"),
        Err(e) => warn!(error = %e, "seeding failed; continuing with existing data"),
    }
    let catalog = CatalogService::with_db(db);

    let schema = graphql::build_schema(catalog);
    Ok(routes::build_router(schema, build_cors()))
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
