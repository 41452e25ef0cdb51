//! # formwork-validator
//!
//! Constraint validators and combinators for the formwork form engine.
//!
//! Validators implement [`Validate`](core::Validate) over dynamically
//! shaped [`serde_json::Value`] input and return a structured
//! [`ValidationError`](core::ValidationError) on failure. Validators
//! that map to a presentational constraint expose it through
//! [`Constraint`](constraint::Constraint), which the form engine
//! projects into attribute metadata (required, min/max, pattern,
//! minlength/maxlength, step).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use formwork_validator::prelude::*;
//! use serde_json::json;
//!
//! let username = Chain::new()
//!     .with(Truthy::new())
//!     .with(StringLength::new(3, 20));
//!
//! assert!(username.validate(&json!("alice"), None).is_ok());
//! assert!(username.validate(&json!(""), None).is_err());
//! ```

pub mod combinators;
pub mod constraint;
pub mod core;
pub mod validators;

pub mod prelude {
    pub use crate::combinators::{Chain, ChainLink, Each};
    pub use crate::constraint::Constraint;
    pub use crate::core::{Validate, ValidationError};
    pub use crate::validators::{Between, GreaterThan, LessThan, Pattern, StringLength, Step, Truthy};
}
