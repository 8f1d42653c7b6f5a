mod app;
mod config;
mod error;
mod route;
mod state;

use std::sync::Arc;

use axum::serve;
use ruta_directions::openrouteservice::OpenRouteServiceClient;
use tracing::{Level, info};

use crate::app::app;
use crate::config::ServerConfig;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::env()?;
    info!("Directions provider: {:?}", config.directions);

    let state = Arc::new(AppState {
        directions: OpenRouteServiceClient::new(config.directions)?,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    serve(listener, app(state)).await?;

    Ok(())
}
