//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler. Operational
//! errors (bad input, missing rows, failed validation) map to 4xx responses with
//! a `{name, message}` body; infrastructure errors (database, configuration) are
//! logged server-side and surface as a generic 500.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{
    error::config::ConfigError,
    model::api::{ErrorDto, InvalidItemDto},
    validation::FieldError,
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    ///
    /// Only reachable during startup; aborts the process.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// A write payload failed structural validation.
    ///
    /// Results in 400 Bad Request carrying the full list of field errors so
    /// clients can report every problem at once.
    #[error("invalid item")]
    InvalidItem(Vec<FieldError>),
}

impl AppError {
    fn body(name: &str, message: impl Into<String>) -> Json<ErrorDto> {
        Json(ErrorDto {
            name: name.to_string(),
            message: message.into(),
        })
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors keep their message; server-side failures are logged and the
/// client only sees a generic body, so no internals leak through the API.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Self::body("not found", message)).into_response()
            }
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Self::body("bad request", message)).into_response()
            }
            Self::InvalidItem(errors) => (
                StatusCode::BAD_REQUEST,
                Json(InvalidItemDto {
                    name: "invalid item".to_string(),
                    message: "Invalid Item Error".to_string(),
                    errors,
                }),
            )
                .into_response(),
            Self::DbErr(err) => {
                error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Self::body("internal", "Internal server error"),
                )
                    .into_response()
            }
            Self::ConfigErr(err) => {
                error!("Configuration error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Self::body("internal", "Internal server error"),
                )
                    .into_response()
            }
            Self::IoErr(err) => {
                error!("I/O error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Self::body("internal", "Internal server error"),
                )
                    .into_response()
            }
        }
    }
}
