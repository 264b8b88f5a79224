use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Standard error body: the error's name plus a human-readable message.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub name: String,
    pub message: String,
}

/// Error body for failed payload validation, carrying every field error.
#[derive(Serialize, ToSchema)]
pub struct InvalidItemDto {
    pub name: String,
    pub message: String,
    pub errors: Vec<FieldError>,
}
