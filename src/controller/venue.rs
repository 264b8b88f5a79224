use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::{parse_list_query, validate_payload},
    error::AppError,
    model::{
        api::{ErrorDto, InvalidItemDto},
        venue::{SaveVenueParams, VenueDto},
    },
    query::table::Table,
    service::venue::VenueService,
    state::AppState,
    util::parse::parse_id_from_string,
};

/// Tag for grouping venue endpoints in OpenAPI documentation
pub static VENUE_TAG: &str = "locais";

/// List venues, shaped by the standard list query string.
#[utoipa::path(
    get,
    path = "/locais",
    tag = VENUE_TAG,
    params(
        ("limit" = Option<i64>, Query, description = "Rows per page, 1 to 149 (default: 10)"),
        ("offset" = Option<i64>, Query, description = "Rows to skip (default: 0)"),
        ("select" = Option<String>, Query, description = "Comma-separated columns to return"),
        ("orderBy" = Option<String>, Query, description = "Column to sort by, repeatable"),
        ("order" = Option<String>, Query, description = "asc or desc per orderBy entry"),
        ("search" = Option<String>, Query, description = "Full-text search term"),
        ("search_on" = Option<String>, Query, description = "Columns the search runs over, repeatable"),
        ("search_mode" = Option<u8>, Query, description = "Search mode code 1-4 (default: 3, boolean mode)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved venues", body = Vec<VenueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venues(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_list_query(raw.as_deref(), Table::Local.schema());

    let rows = VenueService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get a venue by id. Soft-deleted rows are treated as missing.
#[utoipa::path(
    get,
    path = "/locais/{id}",
    tag = VENUE_TAG,
    params(
        ("id" = i64, Path, description = "Venue id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved venue", body = VenueDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    let venue = VenueService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(venue)))
}

/// Create a venue after schema validation.
#[utoipa::path(
    post,
    path = "/locais",
    tag = VENUE_TAG,
    request_body = SaveVenueParams,
    responses(
        (status = 200, description = "Successfully created venue", body = VenueDto),
        (status = 400, description = "Payload failed validation", body = InvalidItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_venue(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let params: SaveVenueParams = validate_payload(Table::Local.schema(), payload)?;

    let venue = VenueService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(venue)))
}

/// Replace a venue. Full-body update with the same validation as a create.
#[utoipa::path(
    put,
    path = "/locais/{id}",
    tag = VENUE_TAG,
    params(
        ("id" = i64, Path, description = "Venue id")
    ),
    request_body = SaveVenueParams,
    responses(
        (status = 200, description = "Successfully updated venue", body = VenueDto),
        (status = 400, description = "Invalid id or payload", body = InvalidItemDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;
    let params: SaveVenueParams = validate_payload(Table::Local.schema(), payload)?;

    let venue = VenueService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(venue)))
}

/// Soft-delete a venue; the body is `true` on success.
#[utoipa::path(
    delete,
    path = "/locais/{id}",
    tag = VENUE_TAG,
    params(
        ("id" = i64, Path, description = "Venue id")
    ),
    responses(
        (status = 200, description = "Successfully deleted venue", body = bool),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    VenueService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(true)))
}
