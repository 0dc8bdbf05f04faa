//! AI Club Site Backend
//!
//! Serves the club's seeded records over a read-only JSON API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aiclub_backend::config::{Config, LogFormat};
use aiclub_backend::storage::{seed, MemStorage, SeedData};
use aiclub_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting AI Club Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Load seed snapshot
    let seed = match &config.seed_path {
        Some(path) => {
            tracing::info!("Loading seed data from {:?}", path);
            SeedData::from_json_file(path)?
        }
        None => {
            tracing::info!("Using built-in seed data");
            seed::builtin()
        }
    };

    let store = Arc::new(MemStorage::from_seed(seed).await?);
    let counts = store.counts().await;
    tracing::info!(
        "Seeded {} team members, {} events, {} articles, {} achievements",
        counts.team_members,
        counts.events,
        counts.articles,
        counts.achievements
    );

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
