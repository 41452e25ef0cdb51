//! Numeric step validator.

use serde_json::Value;

use crate::constraint::Constraint;
use crate::core::{Validate, ValidationError};
use crate::validators::coerce_f64;

/// Tolerance for the floating-point remainder check.
const EPSILON: f64 = 1e-9;

/// Validates that a numeric value is a whole number of steps away from a
/// base value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Step size.
    pub step: f64,
    /// Base the stepping starts from.
    pub base: f64,
}

impl Step {
    /// Creates a step validator counting from zero.
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self { step, base: 0.0 }
    }

    /// Creates a step validator counting from `base`.
    #[must_use]
    pub fn with_base(step: f64, base: f64) -> Self {
        Self { step, base }
    }
}

impl Validate for Step {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        let Some(value) = coerce_f64(input) else {
            return Err(ValidationError::new("numeric_type", "Value must be a number"));
        };

        let steps = (value - self.base) / self.step;
        if (steps - steps.round()).abs() < EPSILON {
            Ok(())
        } else {
            Err(ValidationError::new("step", "Value is not on the step grid")
                .with_param("step", self.step.to_string())
                .with_param("base", self.base.to_string())
                .with_param("actual", value.to_string()))
        }
    }

    fn name(&self) -> &str {
        "step"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Step { value: self.step })
    }
}
