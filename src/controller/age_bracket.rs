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
        age_bracket::{AgeBracketDto, SaveAgeBracketParams},
        api::{ErrorDto, InvalidItemDto},
    },
    query::table::Table,
    service::age_bracket::AgeBracketService,
    state::AppState,
    util::parse::parse_id_from_string,
};

/// Tag for grouping age bracket endpoints in OpenAPI documentation
pub static AGE_BRACKET_TAG: &str = "faixa_etaria";

/// List age brackets, shaped by the standard list query string.
#[utoipa::path(
    get,
    path = "/faixa_etaria",
    tag = AGE_BRACKET_TAG,
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
        (status = 200, description = "Successfully retrieved age brackets", body = Vec<AgeBracketDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_age_brackets(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_list_query(raw.as_deref(), Table::FaixaEtaria.schema());

    let rows = AgeBracketService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get an age bracket by id. Soft-deleted rows are treated as missing.
#[utoipa::path(
    get,
    path = "/faixa_etaria/{id}",
    tag = AGE_BRACKET_TAG,
    params(
        ("id" = i64, Path, description = "Age bracket id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved age bracket", body = AgeBracketDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Age bracket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_age_bracket_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    let bracket = AgeBracketService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(bracket)))
}

/// Create an age bracket after schema validation.
#[utoipa::path(
    post,
    path = "/faixa_etaria",
    tag = AGE_BRACKET_TAG,
    request_body = SaveAgeBracketParams,
    responses(
        (status = 200, description = "Successfully created age bracket", body = AgeBracketDto),
        (status = 400, description = "Payload failed validation", body = InvalidItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_age_bracket(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let params: SaveAgeBracketParams = validate_payload(Table::FaixaEtaria.schema(), payload)?;

    let bracket = AgeBracketService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(bracket)))
}

/// Replace an age bracket. Full-body update with the same validation as a
/// create.
#[utoipa::path(
    put,
    path = "/faixa_etaria/{id}",
    tag = AGE_BRACKET_TAG,
    params(
        ("id" = i64, Path, description = "Age bracket id")
    ),
    request_body = SaveAgeBracketParams,
    responses(
        (status = 200, description = "Successfully updated age bracket", body = AgeBracketDto),
        (status = 400, description = "Invalid id or payload", body = InvalidItemDto),
        (status = 404, description = "Age bracket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_age_bracket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;
    let params: SaveAgeBracketParams = validate_payload(Table::FaixaEtaria.schema(), payload)?;

    let bracket = AgeBracketService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(bracket)))
}

/// Soft-delete an age bracket; the body is `true` on success.
#[utoipa::path(
    delete,
    path = "/faixa_etaria/{id}",
    tag = AGE_BRACKET_TAG,
    params(
        ("id" = i64, Path, description = "Age bracket id")
    ),
    responses(
        (status = 200, description = "Successfully deleted age bracket", body = bool),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Age bracket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_age_bracket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    AgeBracketService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(true)))
}
