use axum_helpers::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    api::companies::init_indexes(&db).await?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("OfertMatch API shutdown complete");
    Ok(())
}
