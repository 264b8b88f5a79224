use serde_json::Value;

use crate::validation::{
    schema::{FieldKind, TableSchema},
    ErrorCode, FieldError, Validator,
};

/// Inclusive lower / exclusive upper bound applied to every numeric field,
/// and length range for every text field.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: -1,
            max: 832_901_803_928,
        }
    }
}

/// Range checks over a payload that already passed structural validation.
///
/// Numbers must satisfy `min <= value < max`; string lengths must fall inside
/// `[min, max]`. Fields that are absent or of the wrong type are skipped here;
/// [`super::validator::SchemaValidator`] reports those.
pub struct BoundsValidator {
    schema: &'static TableSchema,
    bounds: Bounds,
}

impl BoundsValidator {
    pub fn new(schema: &'static TableSchema, bounds: Bounds) -> Self {
        Self { schema, bounds }
    }

    fn check_number(&self, key: &str, value: i64, errors: &mut Vec<FieldError>) {
        if value < self.bounds.min {
            errors.push(FieldError::new(
                key,
                format!("`{key}` should be at least {}", self.bounds.min),
                ErrorCode::Minimum,
            ));
        } else if value >= self.bounds.max {
            errors.push(FieldError::new(
                key,
                format!("`{key}` should be below {}", self.bounds.max),
                ErrorCode::InvalidValue,
            ));
        }
    }

    fn check_text(&self, key: &str, value: &str, errors: &mut Vec<FieldError>) {
        let len = value.chars().count() as i64;
        if len < self.bounds.min {
            errors.push(FieldError::new(
                key,
                format!("`{key}` should be at least {} characters", self.bounds.min),
                ErrorCode::MinLength,
            ));
        } else if len > self.bounds.max {
            errors.push(FieldError::new(
                key,
                format!("`{key}` should be at most {} characters", self.bounds.max),
                ErrorCode::MaxLength,
            ));
        }
    }
}

impl Validator for BoundsValidator {
    fn validate(&self, payload: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (name, kind) in self.schema.payload_fields() {
            let Some(value) = payload.get(name) else {
                continue;
            };

            match kind {
                FieldKind::Integer => {
                    if let Some(n) = value.as_i64() {
                        self.check_number(name, n, &mut errors);
                    }
                }
                FieldKind::Text => {
                    if let Some(s) = value.as_str() {
                        self.check_text(name, s, &mut errors);
                    }
                }
                FieldKind::Bool | FieldKind::IntArray | FieldKind::Object(_) => {}
            }
        }

        errors
    }
}
