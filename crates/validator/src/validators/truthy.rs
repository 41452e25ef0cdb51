//! Truthiness validator — the engine's notion of "required".

use serde_json::Value;

use crate::constraint::Constraint;
use crate::core::{Validate, ValidationError};

/// Validates that a value is truthy.
///
/// Fails on `null`, `false`, numeric zero, the empty string, a string of
/// only whitespace, the string `"0"`, an empty array, and an empty
/// object. Everything else passes.
///
/// A field carrying this validator derives the `required` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truthy;

impl Truthy {
    /// Creates a truthiness validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => {
                let trimmed = s.trim();
                !trimmed.is_empty() && trimmed != "0"
            }
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

impl Validate for Truthy {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        if Self::is_truthy(input) {
            Ok(())
        } else {
            Err(ValidationError::new("required", "A value is required"))
        }
    }

    fn name(&self) -> &str {
        "truthy"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Required)
    }
}
