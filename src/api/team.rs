//! Team member API endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use super::{found, ApiQuery, ApiResult};
use crate::models::{CategoryFilter, TeamMember};
use crate::AppState;

/// Query parameters for listing team members.
#[derive(Debug, Default, Deserialize)]
pub struct TeamQuery {
    pub category: Option<String>,
}

/// GET /api/team - List team members, optionally by category.
pub async fn list_team_members(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TeamQuery>,
) -> ApiResult<Vec<TeamMember>> {
    let category = CategoryFilter::parse(params.category.as_deref());

    let members = state
        .store
        .list_team_members(&category)
        .await
        .map_err(|e| e.or_fetch_failure("team members"))?;

    Ok(Json(members))
}

/// GET /api/team/:id - Get a single team member.
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TeamMember> {
    let member = state
        .store
        .get_team_member(&id)
        .await
        .map_err(|e| e.or_fetch_failure("team member"))?;

    found(member, "Team member not found")
}
