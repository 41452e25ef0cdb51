//! Regular expression pattern validator.

use regex::Regex;
use serde_json::Value;

use crate::constraint::Constraint;
use crate::core::{Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// The pattern string is kept verbatim so it can be projected into an
/// HTML `pattern` attribute, which expects an undelimited, unflagged
/// expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    html: String,
}

impl Pattern {
    /// Compiles a pattern validator.
    ///
    /// Returns the underlying compile error for an invalid expression.
    pub fn new(pattern: impl AsRef<str>) -> Result<Self, regex::Error> {
        let pattern = pattern.as_ref();
        Ok(Self {
            regex: Regex::new(pattern)?,
            html: pattern.to_owned(),
        })
    }

    /// The HTML-flavored pattern string.
    #[must_use]
    pub fn html_pattern(&self) -> &str {
        &self.html
    }

    fn matches(&self, input: &Value) -> Option<bool> {
        match input {
            Value::String(s) => Some(self.regex.is_match(s)),
            // Raw numeric input is matched against its decimal rendering.
            Value::Number(n) => Some(self.regex.is_match(&n.to_string())),
            _ => None,
        }
    }
}

impl Validate for Pattern {
    fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
        match self.matches(input) {
            Some(true) => Ok(()),
            Some(false) => Err(ValidationError::new(
                "pattern_mismatch",
                "Value does not match the expected pattern",
            )
            .with_param("pattern", self.html.clone())),
            None => Err(ValidationError::new(
                "pattern_type",
                "Only strings and numbers can be pattern-matched",
            )),
        }
    }

    fn name(&self) -> &str {
        "pattern"
    }

    fn constraint(&self) -> Option<Constraint> {
        Some(Constraint::Pattern {
            html: self.html.clone(),
        })
    }
}
