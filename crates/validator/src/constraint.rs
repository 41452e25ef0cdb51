//! Declarative constraint descriptors exposed by validators.
//!
//! Each validator kind that has a presentational counterpart exposes one
//! of these variants through [`Validate::constraint`]. Attribute
//! derivation in the form engine matches on the variant instead of on
//! concrete validator identity, keeping the dispatch closed.
//!
//! [`Validate::constraint`]: crate::core::Validate::constraint

use serde::{Deserialize, Serialize};

/// A constraint a validator enforces, described as pure data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// Value must be truthy (non-null, non-false, non-empty).
    Required,

    /// String must match the given pattern.
    ///
    /// `html` is the HTML-flavored pattern string, suitable for a
    /// `pattern` attribute (no delimiters, no flags).
    Pattern { html: String },

    /// Numeric value must not be below the bound.
    Min { value: f64 },

    /// Numeric value must not exceed the bound.
    Max { value: f64 },

    /// Numeric value must lie within the inclusive bounds.
    Between { min: f64, max: f64 },

    /// String length bounds; `max` of `None` means no upper limit.
    Length { min: usize, max: Option<usize> },

    /// Numeric value must be a whole number of steps from the base.
    Step { value: f64 },
}
