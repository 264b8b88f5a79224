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
        contract::{ContractDto, SaveContractParams},
    },
    query::table::Table,
    service::contract::ContractService,
    state::AppState,
    util::parse::parse_id_from_string,
};

/// Tag for grouping contract endpoints in OpenAPI documentation
pub static CONTRACT_TAG: &str = "contratos";

/// List contracts, shaped by the standard list query string.
#[utoipa::path(
    get,
    path = "/contratos",
    tag = CONTRACT_TAG,
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
        (status = 200, description = "Successfully retrieved contracts", body = Vec<ContractDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contracts(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_list_query(raw.as_deref(), Table::Contrato.schema());

    let rows = ContractService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Get a contract by id. Soft-deleted rows are treated as missing.
#[utoipa::path(
    get,
    path = "/contratos/{id}",
    tag = CONTRACT_TAG,
    params(
        ("id" = i64, Path, description = "Contract id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved contract", body = ContractDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contract_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    let contract = ContractService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Create a contract after schema validation.
#[utoipa::path(
    post,
    path = "/contratos",
    tag = CONTRACT_TAG,
    request_body = SaveContractParams,
    responses(
        (status = 200, description = "Successfully created contract", body = ContractDto),
        (status = 400, description = "Payload failed validation", body = InvalidItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contract(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let params: SaveContractParams = validate_payload(Table::Contrato.schema(), payload)?;

    let contract = ContractService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Replace a contract. Full-body update with the same validation as a
/// create.
#[utoipa::path(
    put,
    path = "/contratos/{id}",
    tag = CONTRACT_TAG,
    params(
        ("id" = i64, Path, description = "Contract id")
    ),
    request_body = SaveContractParams,
    responses(
        (status = 200, description = "Successfully updated contract", body = ContractDto),
        (status = 400, description = "Invalid id or payload", body = InvalidItemDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;
    let params: SaveContractParams = validate_payload(Table::Contrato.schema(), payload)?;

    let contract = ContractService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Soft-delete a contract; the body is `true` on success.
#[utoipa::path(
    delete,
    path = "/contratos/{id}",
    tag = CONTRACT_TAG,
    params(
        ("id" = i64, Path, description = "Contract id")
    ),
    responses(
        (status = 200, description = "Successfully deleted contract", body = bool),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id_from_string(&id)?;

    ContractService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(true)))
}
