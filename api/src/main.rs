use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use ak_api::{create_app, telemetry, AppState};
use ak_infra::FileInfrastructure;
use ak_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting Authkeep API server");

    let infrastructure = FileInfrastructure::from_config(&config)
        .await
        .context("Failed to open record files")?;
    let cleanup_task = infrastructure.cleanup.clone().start_background_task();

    let app_state = web::Data::new(AppState::new(infrastructure.session, &config));
    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    info!(address = %bind_address, "Server listening");
    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    if let Some(handle) = cleanup_task {
        handle.abort();
    }
    info!("Server stopped");
    Ok(())
}
