//! Each combinator — validates every element of a collection.

use std::sync::Arc;

use serde_json::Value;

use crate::core::{Validate, ValidationError};

/// Applies an inner validator to every element of a collection.
///
/// Arrays are validated element by element. A string with a configured
/// delimiter is split into substrings first, each validated as a string.
/// Any other input is treated as a single-element collection.
///
/// All failures are collected into one `each_failed` error carrying the
/// per-element errors (tagged with their index) as nested errors.
#[derive(Clone)]
pub struct Each {
    inner: Arc<dyn Validate>,
    delimiter: Option<String>,
}

impl Each {
    /// Wraps a validator to run per element.
    pub fn new(inner: impl Validate + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
            delimiter: None,
        }
    }

    /// Wraps a validator to run per substring of a delimited string.
    pub fn delimited(inner: impl Validate + 'static, delimiter: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(inner),
            delimiter: Some(delimiter.into()),
        }
    }

    /// The inner validator applied to each element.
    ///
    /// Attribute derivation unwraps the collection semantics through
    /// this accessor and inspects the element-level constraints.
    #[must_use]
    pub fn validator(&self) -> &dyn Validate {
        self.inner.as_ref()
    }

    /// The configured delimiter, if any.
    #[must_use]
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    fn elements(&self, input: &Value) -> Vec<Value> {
        match (input, &self.delimiter) {
            (Value::Array(items), _) => items.clone(),
            (Value::String(s), Some(delimiter)) => s
                .split(delimiter.as_str())
                .map(|part| Value::String(part.to_owned()))
                .collect(),
            _ => vec![input.clone()],
        }
    }
}

impl std::fmt::Debug for Each {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Each")
            .field("inner", &self.inner.name())
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

impl Validate for Each {
    fn validate(&self, input: &Value, context: Option<&Value>) -> Result<(), ValidationError> {
        let elements = self.elements(input);
        let total = elements.len();
        let mut errors: Vec<ValidationError> = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            if let Err(e) = self.inner.validate(element, context) {
                errors.push(e.with_param("index", index.to_string()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "each_failed",
                format!("{} of {} elements failed validation", errors.len(), total),
            )
            .with_param("failed_count", errors.len().to_string())
            .with_param("total_count", total.to_string())
            .with_nested(errors))
        }
    }

    fn name(&self) -> &str {
        "each"
    }

    fn as_each(&self) -> Option<&Each> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{StringLength, Truthy};
    use serde_json::json;

    #[test]
    fn all_array_elements_valid() {
        let each = Each::new(StringLength::new(2, 5));
        assert!(each.validate(&json!(["ab", "abc", "abcde"]), None).is_ok());
    }

    #[test]
    fn failing_elements_reported_with_indices() {
        let each = Each::new(StringLength::new(3, 5));
        let err = each.validate(&json!(["abc", "x", "y"]), None).unwrap_err();

        assert_eq!(err.code, "each_failed");
        assert_eq!(err.param("failed_count"), Some("2"));
        assert_eq!(err.param("total_count"), Some("3"));
        assert_eq!(err.nested.len(), 2);
        assert_eq!(err.nested[0].param("index"), Some("1"));
        assert_eq!(err.nested[1].param("index"), Some("2"));
    }

    #[test]
    fn delimited_string_is_split_and_validated() {
        let each = Each::delimited(StringLength::new(2, 10), ",");
        assert!(each.validate(&json!("ab,cde,fg"), None).is_ok());

        let err = each.validate(&json!("ab,c,de"), None).unwrap_err();
        assert_eq!(err.param("failed_count"), Some("1"));
        assert_eq!(err.nested[0].param("index"), Some("1"));
    }

    #[test]
    fn scalar_without_delimiter_is_a_single_element() {
        let each = Each::new(Truthy::new());
        assert!(each.validate(&json!("present"), None).is_ok());
        assert!(each.validate(&json!(""), None).is_err());
    }

    #[test]
    fn empty_array_passes() {
        let each = Each::new(Truthy::new());
        assert!(each.validate(&json!([]), None).is_ok());
    }

    #[test]
    fn exposes_inner_validator() {
        let each = Each::new(Truthy::new());
        assert!(each.as_each().is_some());
        assert_eq!(each.validator().name(), "truthy");
        assert!(each.delimiter().is_none());

        let delimited = Each::delimited(Truthy::new(), ";");
        assert_eq!(delimited.delimiter(), Some(";"));
    }
}
