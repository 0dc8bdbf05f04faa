//! AI Club Site Backend
//!
//! A read-only REST backend serving team, event, article and achievement records from memory.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod storage;

use std::sync::Arc;

use axum::{extract::State, http::HeaderValue, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use storage::{CollectionCounts, MemStorage};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStorage>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin(state.config.cors_origin.as_deref()))
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Team
        .route("/team", get(api::list_team_members))
        .route("/team/{id}", get(api::get_team_member))
        // Events
        .route("/events", get(api::list_events))
        .route("/events/{id}", get(api::get_event))
        // Articles
        .route("/articles", get(api::list_articles))
        .route("/articles/featured", get(api::get_featured_article))
        .route("/articles/{id}", get(api::get_article))
        // Achievements
        .route("/achievements", get(api::list_achievements))
        .route("/achievements/{id}", get(api::get_achievement));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_origin(origin: Option<&str>) -> AllowOrigin {
    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CORS origin: {}", e);
            AllowOrigin::any()
        }
        None => AllowOrigin::any(),
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub counts: CollectionCounts,
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        counts: state.store.counts().await,
    })
}

#[cfg(test)]
mod tests;
