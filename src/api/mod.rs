//! REST API module.
//!
//! Read-only routes over the four site collections. Successful responses are bare JSON.

mod achievements;
mod articles;
mod events;
mod team;

pub use achievements::*;
pub use articles::*;
pub use events::*;
pub use team::*;

use axum::extract::{FromRequestParts, Query};
use axum::Json;

use crate::errors::AppError;

/// Query string extractor whose rejection uses the JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Handler result: a JSON body or an error response.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Turn an optional record into a body or a 404 with `message`.
fn found<T>(record: Option<T>, message: &str) -> ApiResult<T> {
    record
        .map(Json)
        .ok_or_else(|| AppError::NotFound(message.to_string()))
}
