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
        category::{CategoryDto, SaveCategoryParams},
    },
    query::table::Table,
    service::category::CategoryService,
    state::AppState,
    util::parse::parse_id_from_string,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "categorias";

/// List categories.
///
/// Returns live categories shaped by the query string: `limit` and `offset`
/// page the result, `select` narrows the returned columns, `orderBy`/`order`
/// sort, `search`/`search_on`/`search_mode` run a full-text match, and any
/// other known column filters by equality (repeated values become an IN
/// list).
///
/// # Returns
/// - `200 OK` - Matching rows
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categorias",
    tag = CATEGORY_TAG,
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
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_list_query(raw.as_deref(), Table::Categorias.schema());

    let rows = CategoryService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get a category by id.
///
/// Soft-deleted rows are treated as missing.
///
/// # Returns
/// - `200 OK` - The category
/// - `400 Bad Request` - Id is not a positive integer
/// - `404 Not Found` - No live category with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categorias/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    let category = CategoryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Create a category.
///
/// The payload is validated against the table schema before anything is
/// written; violations come back as a per-field error list.
///
/// # Returns
/// - `200 OK` - The created category
/// - `400 Bad Request` - Payload fails validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/categorias",
    tag = CATEGORY_TAG,
    request_body = SaveCategoryParams,
    responses(
        (status = 200, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Payload failed validation", body = InvalidItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let params: SaveCategoryParams = validate_payload(Table::Categorias.schema(), payload)?;

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Replace a category.
///
/// Full-body update; the payload passes the same validation as a create.
///
/// # Returns
/// - `200 OK` - The updated category
/// - `400 Bad Request` - Invalid id or payload
/// - `404 Not Found` - No live category with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/categorias/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    request_body = SaveCategoryParams,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid id or payload", body = InvalidItemDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;
    let params: SaveCategoryParams = validate_payload(Table::Categorias.schema(), payload)?;

    let category = CategoryService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Soft-delete a category.
///
/// The row is flipped to the deleted status and disappears from every read
/// path; the body is `true` on success.
///
/// # Returns
/// - `200 OK` - Deleted
/// - `400 Bad Request` - Id is not a positive integer
/// - `404 Not Found` - No live category with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Successfully deleted category", body = bool),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(true)))
}
