//! String length validator.
//!
//! Length is measured in Unicode scalar values, not bytes.

use serde_json::Value;

use crate::constraint::Constraint;
use crate::core::{Validate, ValidationError};

/// Validates that a string's length lies within bounds.
///
/// `max` of `None` means no upper limit; a field deriving attributes
/// from such a validator gets `minlength` but no `maxlength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLength {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive); `None` for unbounded.
    pub max: Option<usize>,
}

impl StringLength {
    /// Creates a length validator with both bounds.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    /// Creates a lower-bound-only length validator.
    #[must_use]
    pub fn min(min: usize) -> Self {
        Self { min, max: None }
    }
}

impl Validate for StringLength {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        let Some(s) = input.as_str() else {
            return Err(ValidationError::new("string_type", "Value must be a string"));
        };

        let actual = s.chars().count();
        if actual < self.min {
            return Err(ValidationError::new(
                "string_length_min",
                "String is too short",
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", actual.to_string()));
        }
        if let Some(max) = self.max
            && actual > max
        {
            return Err(ValidationError::new(
                "string_length_max",
                "String is too long",
            )
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "string_length"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Length {
            min: self.min,
            max: self.max,
        })
    }
}
