//! Structural validation of write payloads.
//!
//! Every table declares a static [`schema::TableSchema`] describing its fields.
//! One generic routine ([`validator::SchemaValidator`]) checks incoming JSON
//! against that schema, [`bounds::BoundsValidator`] enforces numeric ranges and
//! string lengths, and [`cluster::ValidationCluster`] runs any number of
//! validators and unions their findings. Validation never aborts on the first
//! problem; the full error list goes back to the client.

pub mod bounds;
pub mod cluster;
pub mod schema;
pub mod validator;

use serde::Serialize;
use utoipa::ToSchema;

/// Error codes carried by [`FieldError`]. Discriminants are explicit and
/// wire-stable; gaps belong to retired codes and stay unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    MissingKeys = 1,
    Null = 2,
    Invalid = 4,
    InvalidValue = 5,
    MinLength = 6,
    MaxLength = 7,
    Minimum = 9,
}

/// One validation finding, addressed to a single payload field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Dot-separated path of the offending field (`"endereco.cidade"`).
    pub key: String,
    pub message: String,
    pub code: u16,
}

impl FieldError {
    pub fn new(key: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            code: code as u16,
        }
    }
}

/// A single validation pass over a JSON payload.
pub trait Validator {
    /// Returns every problem found; an empty vec means the payload passed.
    fn validate(&self, payload: &serde_json::Value) -> Vec<FieldError>;
}
