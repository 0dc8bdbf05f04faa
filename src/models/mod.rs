//! Data models for the AI Club site.
//!
//! Field names serialize in camelCase to match what the frontend consumes.

mod achievement;
mod article;
mod event;
mod filter;
mod member;

pub use achievement::*;
pub use article::*;
pub use event::*;
pub use filter::*;
pub use member::*;

use crate::errors::AppError;

/// Reject blank required text fields.
pub(crate) fn require_text(entity: &str, field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "{} {} is required",
            entity, field
        )));
    }
    Ok(())
}
