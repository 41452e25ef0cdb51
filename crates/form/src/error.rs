/// Error type for form construction and lookup operations.
///
/// Validation failures are *not* errors — they are data, captured on the
/// failing field and read back through its error accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Field or group name is empty or whitespace-only.
    #[error("field name is empty")]
    EmptyName,

    /// An array-suffixed field name was given a non-array default value.
    #[error("default value for array field `{name}` must be an array; received {received}")]
    InvalidDefaultValue { name: String, received: String },

    /// A field with the given name is not registered in the form.
    #[error("field `{name}` was not found in the form")]
    FieldNotFound { name: String },
}

impl FormError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::EmptyName | Self::InvalidDefaultValue { .. } => "construction",
            Self::FieldNotFound { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::EmptyName => "FORM_EMPTY_NAME",
            Self::InvalidDefaultValue { .. } => "FORM_INVALID_DEFAULT",
            Self::FieldNotFound { .. } => "FORM_FIELD_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(FormError::EmptyName.to_string(), "field name is empty");

        let err = FormError::InvalidDefaultValue {
            name: "tags[]".into(),
            received: "string".into(),
        };
        assert_eq!(
            err.to_string(),
            "default value for array field `tags[]` must be an array; received string"
        );

        let err = FormError::FieldNotFound { name: "email".into() };
        assert_eq!(err.to_string(), "field `email` was not found in the form");
    }

    #[test]
    fn categories() {
        assert_eq!(FormError::EmptyName.category(), "construction");
        assert_eq!(
            FormError::InvalidDefaultValue {
                name: String::new(),
                received: String::new(),
            }
            .category(),
            "construction"
        );
        assert_eq!(
            FormError::FieldNotFound { name: String::new() }.category(),
            "lookup"
        );
    }

    #[test]
    fn codes_are_unique() {
        let invalid_default = FormError::InvalidDefaultValue {
            name: String::new(),
            received: String::new(),
        };
        let not_found = FormError::FieldNotFound { name: String::new() };
        let codes = [
            FormError::EmptyName.code(),
            invalid_default.code(),
            not_found.code(),
        ];

        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
        assert!(codes.iter().all(|c| c.starts_with("FORM_")));
    }
}
