use serde_json::Value;

use crate::validation::{FieldError, Validator};

/// Runs a set of validators over one payload and unions their error lists.
#[derive(Default)]
pub struct ValidationCluster {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn run(&self, payload: &Value) -> Vec<FieldError> {
        self.validators
            .iter()
            .flat_map(|v| v.validate(payload))
            .collect()
    }
}
