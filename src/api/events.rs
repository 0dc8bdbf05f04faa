//! Event API endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use super::{found, ApiQuery, ApiResult};
use crate::models::{CategoryFilter, Event};
use crate::AppState;

/// Query parameters for listing events.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub year: Option<String>,
}

/// GET /api/events - List events, optionally by year.
pub async fn list_events(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<EventsQuery>,
) -> ApiResult<Vec<Event>> {
    let year = CategoryFilter::parse(params.year.as_deref());

    let events = state
        .store
        .list_events(&year)
        .await
        .map_err(|e| e.or_fetch_failure("events"))?;

    Ok(Json(events))
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Event> {
    let event = state
        .store
        .get_event(&id)
        .await
        .map_err(|e| e.or_fetch_failure("event"))?;

    found(event, "Event not found")
}
