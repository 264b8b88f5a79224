//! HTTP request handlers.
//!
//! Controllers stay thin: parse the raw query string into typed list
//! parameters, validate write payloads against the table schema, and hand
//! off to the service layer.

pub mod age_bracket;
pub mod category;
pub mod contract;
pub mod event;
pub mod user;
pub mod venue;

use serde::de::DeserializeOwned;

use crate::{
    error::AppError,
    query::params::QueryParams,
    validation::{
        bounds::{Bounds, BoundsValidator},
        cluster::ValidationCluster,
        schema::TableSchema,
        validator::SchemaValidator,
    },
};

/// Decodes the raw query string into list parameters, resolving column
/// names against the table schema.
pub(crate) fn parse_list_query(raw: Option<&str>, schema: &'static TableSchema) -> QueryParams {
    let pairs = url::form_urlencoded::parse(raw.unwrap_or("").as_bytes()).into_owned();

    QueryParams::from_pairs(pairs, schema)
}

/// Validates a write payload against the table schema and deserializes it
/// into the typed params.
///
/// Non-object bodies are rejected outright; structural or range violations
/// come back as one invalid-item error carrying the per-field list.
pub(crate) fn validate_payload<T: DeserializeOwned>(
    schema: &'static TableSchema,
    payload: serde_json::Value,
) -> Result<T, AppError> {
    if !payload.is_object() {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }

    let errors = ValidationCluster::new()
        .with(SchemaValidator::new(schema))
        .with(BoundsValidator::new(schema, Bounds::default()))
        .run(&payload);

    if !errors.is_empty() {
        return Err(AppError::InvalidItem(errors));
    }

    serde_json::from_value(payload).map_err(|err| AppError::BadRequest(err.to_string()))
}
