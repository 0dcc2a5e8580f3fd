// SPDX-License-Identifier: MIT

//! Classdex API Server
//!
//! Tracks students, activity templates, and point awards for classroom
//! gamification, persisting every collection as a flat JSON file.

use classdex::{config::Config, db::JsonStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, data_dir = %config.data_dir, "Starting Classdex API");

    // Open the document store. Failure to create the data directory aborts
    // startup; everything past this point recovers at the request boundary.
    let store = JsonStore::open(&config.data_dir)
        .await
        .expect("Failed to create data directory");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = classdex::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("classdex=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
