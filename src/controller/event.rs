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
        event::{EventDto, SaveEventParams},
    },
    query::table::Table,
    service::event::EventService,
    state::AppState,
    util::parse::parse_id_from_string,
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "eventos";

/// List events, shaped by the standard list query string. `categorias`
/// accepts a category id and matches events whose category list contains
/// it.
#[utoipa::path(
    get,
    path = "/eventos",
    tag = EVENT_TAG,
    params(
        ("limit" = Option<i64>, Query, description = "Rows per page, 1 to 149 (default: 10)"),
        ("offset" = Option<i64>, Query, description = "Rows to skip (default: 0)"),
        ("select" = Option<String>, Query, description = "Comma-separated columns to return"),
        ("orderBy" = Option<String>, Query, description = "Column to sort by, repeatable"),
        ("order" = Option<String>, Query, description = "asc or desc per orderBy entry"),
        ("search" = Option<String>, Query, description = "Full-text search term"),
        ("search_on" = Option<String>, Query, description = "Columns the search runs over, repeatable"),
        ("search_mode" = Option<u8>, Query, description = "Search mode code 1-4 (default: 3, boolean mode)"),
        ("categorias" = Option<i64>, Query, description = "Match events whose category list contains this id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_list_query(raw.as_deref(), Table::Eventos.schema());

    let rows = EventService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get an event by id. Soft-deleted rows are treated as missing.
#[utoipa::path(
    get,
    path = "/eventos/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Create an event after schema validation.
#[utoipa::path(
    post,
    path = "/eventos",
    tag = EVENT_TAG,
    request_body = SaveEventParams,
    responses(
        (status = 200, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Payload failed validation", body = InvalidItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let params: SaveEventParams = validate_payload(Table::Eventos.schema(), payload)?;

    let event = EventService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Replace an event. Full-body update with the same validation as a create.
#[utoipa::path(
    put,
    path = "/eventos/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    request_body = SaveEventParams,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid id or payload", body = InvalidItemDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;
    let params: SaveEventParams = validate_payload(Table::Eventos.schema(), payload)?;

    let event = EventService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Soft-delete an event; the body is `true` on success.
#[utoipa::path(
    delete,
    path = "/eventos/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Successfully deleted event", body = bool),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    EventService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(true)))
}
