// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training Tracker API Server
//!
//! REST API for athletes and their training sessions, backed by either an
//! in-memory store or DynamoDB depending on configuration.

use std::sync::Arc;
use training_tracker::{config::Config, db, services::seed, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        backend = ?config.storage_backend,
        "Starting Training Tracker API"
    );

    // Connect the configured storage backend
    let store = db::connect(&config)
        .await
        .expect("Failed to initialize storage backend");

    if config.seed_demo_data {
        seed::seed_demo_data(&store)
            .await
            .expect("Failed to seed demo data");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = training_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("training_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
