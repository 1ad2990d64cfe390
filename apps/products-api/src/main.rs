//! Products API - REST server for the product catalog

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{DatabaseConnection, connect_from_config, connect_lazy, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Single eager connection attempt. If PostgreSQL is unreachable the API
/// keeps serving on a lazy pool: store-backed routes answer 500 and `/ready`
/// reports 503 until the database comes up. Only a malformed URL is fatal.
async fn connect_database(config: &Config) -> eyre::Result<DatabaseConnection> {
    let db = match connect_from_config(config.database.clone()).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "Could not connect to PostgreSQL, serving without it");
            return Ok(connect_lazy(config.database.clone()).await?);
        }
    };

    if let Err(e) = run_migrations::<Migrator>(&db, config.app.name).await {
        error!(error = %e, "Database migrations failed");
    }

    Ok(db)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_database(&config).await?;
    let state = AppState { config, db };

    let app = api::app(&state)?;

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting Products API on port {}",
        state.config.server.port
    );

    let db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL connections");
            if let Err(e) = db.close().await {
                error!(error = %e, "Failed to close PostgreSQL pool");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
