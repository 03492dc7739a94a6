use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use service::{records::domain::ValidationPolicy, runtime};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Load `config.toml` (or `CONFIG_PATH`); without a file, fall back to
/// `SERVER_HOST`, `SERVER_PORT` and `DATABASE_URL`.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let loaded = if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        AppConfig::from_env()
    };
    loaded.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn load_bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Connect, migrate, and serve with an already validated configuration.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_env(&cfg.server.static_dir).await?;

    // one pool for the whole process
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    } else {
        warn!(event = "migrations_skipped", "database.run_migrations is off; schema must already exist");
    }

    let policy = ValidationPolicy { require_subject_on_create: cfg.records.require_subject_on_create };
    let state = ServerState::new(db, policy).map_err(StartupError::from)?;
    let app: Router = routes::build_router(state, &cfg.server);

    // Bind and serve
    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, legacy_get_delete = cfg.server.legacy_get_delete, "starting gradebook server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
