//! Error types for validation failures
//!
//! A validation failure is data, not a fault: validators return a
//! structured [`ValidationError`] which the owning field captures and
//! surfaces through its error accessor. All string fields use
//! `Cow<'static, str>` for zero-allocation in the common case of static
//! error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with support for nested errors and
/// parameterized messages.
///
/// # Examples
///
/// ```rust,ignore
/// use formwork_validator::core::ValidationError;
///
/// let error = ValidationError::new("string_length_min", "String is too short")
///     .with_param("min", "5")
///     .with_param("actual", "3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "string_length_min", "pattern_mismatch", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional field path for errors raised inside nested structures.
    ///
    /// Examples: "user.email", "address.zip"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    /// Example: `[("min", "5"), ("actual", "3")]`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested validation errors, used by the chain and each combinators.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors (including nested).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens this error and all nested errors into a single list
    /// (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        if !self.nested.is_empty() {
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(!error.has_nested());
    }

    #[test]
    fn error_with_field() {
        let error = ValidationError::new("required", "Value is required").with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn nested_errors_counted() {
        let error = ValidationError::new("chain_failed", "2 constraints failed").with_nested(vec![
            ValidationError::new("required", "Value is required"),
            ValidationError::new("pattern_mismatch", "Does not match"),
        ]);

        assert_eq!(error.nested.len(), 2);
        assert_eq!(error.total_error_count(), 3);
    }

    #[test]
    fn flatten_is_depth_first() {
        let error = ValidationError::new("root", "Root").with_nested(vec![
            ValidationError::new("child1", "Child 1")
                .with_nested(vec![ValidationError::new("grandchild", "Grandchild")]),
            ValidationError::new("child2", "Child 2"),
        ]);

        let codes: Vec<&str> = error.flatten().iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, vec!["root", "child1", "grandchild", "child2"]);
    }

    #[test]
    fn display_includes_params() {
        let error = ValidationError::new("between", "Out of range")
            .with_param("min", "1")
            .with_param("max", "10");
        assert_eq!(error.to_string(), "between: Out of range (min=1, max=10)");
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("required", "Value is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn serializes_without_empty_slots() {
        let error = ValidationError::new("required", "Value is required");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"required\""));
        assert!(!json.contains("nested"));
        assert!(!json.contains("params"));
        assert!(!json.contains("field"));
    }
}
