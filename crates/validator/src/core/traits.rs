//! Core trait implemented by every validator.

use serde_json::Value;

use crate::combinators::{Chain, Each};
use crate::constraint::Constraint;
use crate::core::ValidationError;

/// The capability consumed by the form engine.
///
/// Validators operate on dynamically shaped [`serde_json::Value`] trees:
/// the engine binds whatever the raw input contains, so the input type
/// cannot be fixed at compile time. A validator either accepts the value
/// or returns a structured [`ValidationError`] describing the failure.
///
/// The `context` carries the whole raw value tree of the form being
/// validated, so cross-field rules (e.g. password confirmation) can see
/// sibling values.
///
/// # Examples
///
/// ```rust,ignore
/// use formwork_validator::core::{Validate, ValidationError};
/// use serde_json::Value;
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     fn validate(&self, input: &Value, _context: Option<&Value>) -> Result<(), ValidationError> {
///         match input.as_str() {
///             Some(s) if !s.is_empty() => Ok(()),
///             _ => Err(ValidationError::new("non_empty", "String must not be empty")),
///         }
///     }
/// }
/// ```
pub trait Validate: Send + Sync {
    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the failure otherwise
    fn validate(&self, input: &Value, context: Option<&Value>) -> Result<(), ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used for debugging and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The declarative constraint this validator enforces, if it maps to
    /// one of the known constraint kinds.
    ///
    /// Attribute derivation switches on this discriminator instead of on
    /// concrete validator identity. Validators with no presentational
    /// counterpart return `None` (the default).
    fn constraint(&self) -> Option<Constraint> {
        None
    }

    /// Returns `self` as a [`Chain`] when this validator is one.
    ///
    /// Attribute derivation uses this to walk the chain's members in
    /// order. Non-chain validators return `None` (the default).
    fn as_chain(&self) -> Option<&Chain> {
        None
    }

    /// Returns `self` as an [`Each`] wrapper when this validator is one.
    ///
    /// Attribute derivation unwraps the per-element wrapper and derives
    /// from its inner validator. Non-wrapper validators return `None`
    /// (the default).
    fn as_each(&self) -> Option<&Each> {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================
