//! Numeric bound validators.

use serde_json::Value;

use crate::constraint::Constraint;
use crate::core::{Validate, ValidationError};
use crate::validators::coerce_f64;

fn numeric_or_err(input: &Value) -> Result<f64, ValidationError> {
    coerce_f64(input).ok_or_else(|| {
        ValidationError::new("numeric_type", "Value must be a number")
    })
}

// ============================================================================
// GREATER THAN
// ============================================================================

/// Validates that a numeric value does not fall below a lower bound.
///
/// Inclusive by default, matching the semantics of the `min` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreaterThan {
    /// Lower bound.
    pub min: f64,
    /// Whether a value equal to the bound passes.
    pub inclusive: bool,
}

impl GreaterThan {
    /// Creates an inclusive lower-bound validator.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self { min, inclusive: true }
    }

    /// Creates an exclusive lower-bound validator.
    #[must_use]
    pub fn exclusive(min: f64) -> Self {
        Self { min, inclusive: false }
    }
}

impl Validate for GreaterThan {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        let value = numeric_or_err(input)?;
        let ok = if self.inclusive { value >= self.min } else { value > self.min };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::new("greater_than", "Value is below the minimum")
                .with_param("min", self.min.to_string())
                .with_param("actual", value.to_string()))
        }
    }

    fn name(&self) -> &str {
        "greater_than"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Min { value: self.min })
    }
}

// ============================================================================
// LESS THAN
// ============================================================================

/// Validates that a numeric value does not exceed an upper bound.
///
/// Inclusive by default, matching the semantics of the `max` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessThan {
    /// Upper bound.
    pub max: f64,
    /// Whether a value equal to the bound passes.
    pub inclusive: bool,
}

impl LessThan {
    /// Creates an inclusive upper-bound validator.
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self { max, inclusive: true }
    }

    /// Creates an exclusive upper-bound validator.
    #[must_use]
    pub fn exclusive(max: f64) -> Self {
        Self { max, inclusive: false }
    }
}

impl Validate for LessThan {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        let value = numeric_or_err(input)?;
        let ok = if self.inclusive { value <= self.max } else { value < self.max };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::new("less_than", "Value is above the maximum")
                .with_param("max", self.max.to_string())
                .with_param("actual", value.to_string()))
        }
    }

    fn name(&self) -> &str {
        "less_than"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Max { value: self.max })
    }
}

// ============================================================================
// BETWEEN
// ============================================================================

/// Validates that a numeric value lies within inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Between {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Between {
    /// Creates an inclusive range validator.
    ///
    /// Bounds are taken as given; a reversed range simply never matches.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Validate for Between {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        let value = numeric_or_err(input)?;
        if value >= self.min && value <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new("between", "Value is out of range")
                .with_param("min", self.min.to_string())
                .with_param("max", self.max.to_string())
                .with_param("actual", value.to_string()))
        }
    }

    fn name(&self) -> &str {
        "between"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Between {
            min: self.min,
            max: self.max,
        })
    }
}
