//! Business layer between the HTTP controllers and the repositories.
//!
//! Services translate wire status codes into the typed enum, map missing
//! rows to not-found errors, and shape models into response DTOs.

pub mod age_bracket;
pub mod category;
pub mod contract;
pub mod event;
pub mod user;
pub mod venue;

use entity::prelude::ItemStatus;
use sea_orm::ActiveEnum;

use crate::error::AppError;

/// Resolves a wire status code into [`ItemStatus`], rejecting codes outside
/// the enum.
pub(crate) fn status_from_code(code: i32) -> Result<ItemStatus, AppError> {
    ItemStatus::try_from_value(&code)
        .map_err(|_| AppError::BadRequest(format!("Invalid status: {code}")))
}
