//! The filter capability applied before validation.

use serde_json::Value;

/// Transforms a raw bound value into the value that gets validated and
/// stored.
///
/// Filters have no error contract: whatever they return is the field's
/// filtered value. Any `Fn(Value) -> Value` closure is a filter.
pub trait Filter: Send + Sync {
    /// Transforms the value.
    fn transform(&self, value: Value) -> Value;
}

impl<F> Filter for F
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn transform(&self, value: Value) -> Value {
        self(value)
    }
}
