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
        user::{SaveUserParams, UserDto},
    },
    query::table::Table,
    service::user::UserService,
    state::AppState,
    util::parse::parse_id_from_string,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "usuarios";

/// List users, shaped by the standard list query string. `categorias`
/// accepts a category id and matches users whose category list contains it.
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = USER_TAG,
    params(
        ("limit" = Option<i64>, Query, description = "Rows per page, 1 to 149 (default: 10)"),
        ("offset" = Option<i64>, Query, description = "Rows to skip (default: 0)"),
        ("select" = Option<String>, Query, description = "Comma-separated columns to return"),
        ("orderBy" = Option<String>, Query, description = "Column to sort by, repeatable"),
        ("order" = Option<String>, Query, description = "asc or desc per orderBy entry"),
        ("search" = Option<String>, Query, description = "Full-text search term"),
        ("search_on" = Option<String>, Query, description = "Columns the search runs over, repeatable"),
        ("search_mode" = Option<u8>, Query, description = "Search mode code 1-4 (default: 3, boolean mode)"),
        ("categorias" = Option<i64>, Query, description = "Match users whose category list contains this id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_list_query(raw.as_deref(), Table::Usuarios.schema());

    let rows = UserService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get a user by id. Soft-deleted rows are treated as missing.
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Create a user after schema validation.
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = USER_TAG,
    request_body = SaveUserParams,
    responses(
        (status = 200, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Payload failed validation", body = InvalidItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let params: SaveUserParams = validate_payload(Table::Usuarios.schema(), payload)?;

    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Replace a user. Full-body update with the same validation as a create.
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = SaveUserParams,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid id or payload", body = InvalidItemDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;
    let params: SaveUserParams = validate_payload(Table::Usuarios.schema(), payload)?;

    let user = UserService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Soft-delete a user; the body is `true` on success.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = bool),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(true)))
}
