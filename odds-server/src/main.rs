use anyhow::{Context, Result};
use tracing::info;

use odds_server::config::{MissionFile, ServerConfig};
use odds_server::logging::init_tracing;
use odds_server::routes::SqliteRouteStore;
use odds_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info");

    let settings = ServerConfig::from_env().context("failed to read server settings")?;

    let mission = MissionFile::load(&settings.mission).with_context(|| {
        format!(
            "failed to load mission configuration from {}",
            settings.mission.display()
        )
    })?;
    let config = mission
        .engine_config()
        .context("invalid mission configuration")?;

    let routes = SqliteRouteStore::open(&mission.routes_db).with_context(|| {
        format!(
            "failed to open route database {}",
            mission.routes_db.display()
        )
    })?;

    info!(
        departure = %config.departure,
        arrival = %config.arrival,
        autonomy = config.autonomy,
        routes_db = %routes.path().display(),
        "mission loaded"
    );

    let app = create_router(AppState::new(routes, config));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(addr = %settings.bind_addr, "mission odds server listening");
    info!("  GET  /health         - Health check");
    info!("  POST /travel         - Evaluate an empire plan (JSON body)");
    info!("  POST /travel/upload  - Evaluate an uploaded empire plan file");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
