use crate::error::AppError;

/// Parses a path segment as a positive row id. Rejects zero, negatives, and
/// anything non-numeric before a query is ever built.
pub fn parse_id_from_string(value: &str) -> Result<i64, AppError> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid id: {value}"))),
    }
}
