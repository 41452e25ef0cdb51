//! Built-in constraint validators.
//!
//! These are the validator kinds the form engine knows how to project
//! into presentation attributes: truthiness (`required`), pattern
//! matching, numeric bounds, string length bounds, and numeric step.

mod length;
mod pattern;
mod range;
mod step;
mod truthy;

pub use length::StringLength;
pub use pattern::Pattern;
pub use range::{Between, GreaterThan, LessThan};
pub use step::Step;
pub use truthy::Truthy;

use serde_json::Value;

/// Coerces a JSON value to a float for the numeric validators.
///
/// Raw form input frequently arrives as strings, so numeric strings are
/// accepted alongside actual numbers.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
