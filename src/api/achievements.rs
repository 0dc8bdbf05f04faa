//! Achievement API endpoints.

use axum::extract::{Path, State};
use axum::Json;

use super::{found, ApiResult};
use crate::models::Achievement;
use crate::AppState;

/// GET /api/achievements - List all achievements.
pub async fn list_achievements(State(state): State<AppState>) -> ApiResult<Vec<Achievement>> {
    let achievements = state
        .store
        .list_achievements()
        .await
        .map_err(|e| e.or_fetch_failure("achievements"))?;

    Ok(Json(achievements))
}

/// GET /api/achievements/:id - Get a single achievement.
pub async fn get_achievement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Achievement> {
    let achievement = state
        .store
        .get_achievement(&id)
        .await
        .map_err(|e| e.or_fetch_failure("achievement"))?;

    found(achievement, "Achievement not found")
}
