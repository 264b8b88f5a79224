use serde_json::Value;

use crate::validation::{
    schema::{FieldKind, TableSchema},
    ErrorCode, FieldError, Validator,
};

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer => "number",
        FieldKind::Text => "string",
        FieldKind::Bool => "boolean",
        FieldKind::IntArray => "number array",
        FieldKind::Object(_) => "object",
    }
}

/// Checks a write payload against a table schema: every expected key must be
/// present and carry a value of the declared kind. Nested object kinds are
/// validated recursively with a dot-separated path in the reported key.
pub struct SchemaValidator {
    schema: &'static TableSchema,
}

impl SchemaValidator {
    pub fn new(schema: &'static TableSchema) -> Self {
        Self { schema }
    }

    fn matches(kind: FieldKind, value: &Value) -> bool {
        match kind {
            FieldKind::Integer => value.is_number(),
            FieldKind::Text => value.is_string(),
            // Clients storing flags as 0/1 are accepted alongside true/false.
            FieldKind::Bool => {
                value.is_boolean()
                    || value.as_i64().map(|n| n == 0 || n == 1).unwrap_or(false)
            }
            FieldKind::IntArray => value
                .as_array()
                .map(|items| items.iter().all(Value::is_number))
                .unwrap_or(false),
            FieldKind::Object(_) => value.is_object(),
        }
    }

    fn check_object(
        schema: &'static TableSchema,
        payload: &Value,
        path: &str,
        errors: &mut Vec<FieldError>,
    ) {
        for (name, kind) in schema.payload_fields() {
            let key = if path.is_empty() {
                (*name).to_string()
            } else {
                format!("{path}.{name}")
            };

            let Some(value) = payload.get(name) else {
                errors.push(FieldError::new(
                    key.clone(),
                    format!("missing key `{key}`"),
                    ErrorCode::MissingKeys,
                ));
                continue;
            };

            if value.is_null() {
                errors.push(FieldError::new(
                    key.clone(),
                    format!("`{key}` should not be null"),
                    ErrorCode::Null,
                ));
                continue;
            }

            if !Self::matches(*kind, value) {
                errors.push(FieldError::new(
                    key.clone(),
                    format!("`{name}` should be `{}` in `{key}`", kind_name(*kind)),
                    ErrorCode::Invalid,
                ));
                continue;
            }

            if let FieldKind::Object(nested) = kind {
                Self::check_object(nested, value, &key, errors);
            }
        }
    }
}

impl Validator for SchemaValidator {
    fn validate(&self, payload: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();
        Self::check_object(self.schema, payload, "", &mut errors);
        errors
    }
}
