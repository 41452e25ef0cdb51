//! The atomic bindable, filterable, validatable unit.

use std::sync::Arc;

use serde_json::Value;

use formwork_validator::core::{Validate, ValidationError};

use crate::attributes::{self, AttributeMap};
use crate::error::FormError;
use crate::filter::Filter;
use crate::path;
use crate::select::Select;

/// A named input with an optional filter, an optional validator, a
/// default value, and a derived constraint-attribute set.
///
/// A `Field` built from its definition is a *template*: binding a
/// value with [`Field::with_value`] returns a new bound copy and leaves
/// the template untouched, so one definition can serve any number of
/// validation passes.
#[derive(Clone)]
pub struct Field {
    name: String,
    label: Option<String>,
    tooltip: Option<String>,
    break_on_failure: bool,
    default_value: Value,
    filter: Option<Arc<dyn Filter>>,
    validator: Option<Arc<dyn Validate>>,
    select: Option<Select>,
    attributes: Vec<AttributeMap>,
    raw_value: Value,
    value: Value,
    context: Option<Value>,
    errors: Vec<ValidationError>,
}

impl Field {
    /// Starts building a field with the given declared name.
    ///
    /// The name may use `[key]` segments for nesting and a trailing `[]`
    /// for array fields: `user[address][street]`, `tags[]`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            name: name.into(),
            label: None,
            tooltip: None,
            break_on_failure: false,
            default_value: None,
            filter: None,
            validator: None,
            select: None,
        }
    }

    /// The declared field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The tooltip or help text, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Whether a failure of this field stops the enclosing scan.
    #[must_use]
    pub fn is_break_on_failure(&self) -> bool {
        self.break_on_failure
    }

    /// The filtered value bound by the last [`Field::with_value`].
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The raw value bound by the last [`Field::with_value`], verbatim.
    #[must_use]
    pub fn raw_value(&self) -> &Value {
        &self.raw_value
    }

    /// The default value from the field definition.
    ///
    /// An array field without an explicit default reports an empty
    /// array, never null.
    #[must_use]
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// The dropdown payload, if any.
    #[must_use]
    pub fn select(&self) -> Option<&Select> {
        self.select.as_ref()
    }

    /// The derived constraint-attribute set.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeMap] {
        &self.attributes
    }

    /// Whether the field is required, read from attribute slot 0.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.attributes
            .first()
            .and_then(|attrs| attrs.get("required"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Errors captured by the last failed [`Field::is_valid`] call.
    #[must_use]
    pub fn last_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns a new field carrying the bound value.
    ///
    /// The raw value is stored verbatim; the filtered value is the
    /// filter's output when a filter is set, the raw value otherwise.
    /// The context (typically the whole raw input tree) is handed to the
    /// validator on [`Field::is_valid`]. The receiver is not modified.
    #[must_use]
    pub fn with_value(&self, value: Value, context: Option<Value>) -> Self {
        let mut bound = self.clone();
        bound.value = match &self.filter {
            Some(filter) => filter.transform(value.clone()),
            None => value.clone(),
        };
        bound.raw_value = value;
        bound.context = context;
        bound.errors.clear();
        bound
    }

    /// Runs the validator against the bound filtered value.
    ///
    /// Always true when no validator is set. On failure the validator's
    /// error is captured into this field's error slot.
    pub fn is_valid(&mut self) -> bool {
        self.errors.clear();
        let Some(validator) = &self.validator else {
            return true;
        };

        match validator.validate(&self.value, self.context.as_ref()) {
            Ok(()) => true,
            Err(error) => {
                self.errors.push(error);
                false
            }
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("break_on_failure", &self.break_on_failure)
            .field("default_value", &self.default_value)
            .field("has_filter", &self.filter.is_some())
            .field("validator", &self.validator.as_ref().map(|v| v.name()))
            .field("value", &self.value)
            .field("raw_value", &self.raw_value)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Field`].
///
/// Construction is fallible: an empty name or an invalid default for an
/// array field is rejected at [`FieldBuilder::build`].
pub struct FieldBuilder {
    name: String,
    label: Option<String>,
    tooltip: Option<String>,
    break_on_failure: bool,
    default_value: Option<Value>,
    filter: Option<Arc<dyn Filter>>,
    validator: Option<Arc<dyn Validate>>,
    select: Option<Select>,
}

impl FieldBuilder {
    /// Sets the human-readable label.
    #[must_use = "builder methods must be chained or built"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the tooltip or help text.
    #[must_use = "builder methods must be chained or built"]
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Makes a failure of this field stop the enclosing scan.
    #[must_use = "builder methods must be chained or built"]
    pub fn break_on_failure(mut self, break_on_failure: bool) -> Self {
        self.break_on_failure = break_on_failure;
        self
    }

    /// Sets the default value.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Sets the filter applied before validation.
    #[must_use = "builder methods must be chained or built"]
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Sets the validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn validator(mut self, validator: impl Validate + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Attaches a dropdown payload.
    #[must_use = "builder methods must be chained or built"]
    pub fn select(mut self, select: Select) -> Self {
        self.select = Some(select);
        self
    }

    /// Builds the field, deriving its attribute set from the validator.
    ///
    /// # Errors
    ///
    /// [`FormError::EmptyName`] for an empty or whitespace-only name;
    /// [`FormError::InvalidDefaultValue`] for an array-suffixed name
    /// whose explicit default is not an array.
    pub fn build(self) -> Result<Field, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::EmptyName);
        }

        let is_array = path::is_array_name(&self.name);
        let default_value = match self.default_value {
            Some(value) if is_array && !value.is_array() => {
                return Err(FormError::InvalidDefaultValue {
                    name: self.name,
                    received: json_type_name(&value).to_owned(),
                });
            }
            Some(value) => value,
            None if is_array => Value::Array(Vec::new()),
            None => Value::Null,
        };

        let attributes = attributes::derive(
            &self.name,
            is_array,
            &default_value,
            self.validator.as_deref(),
        );

        Ok(Field {
            name: self.name,
            label: self.label,
            tooltip: self.tooltip,
            break_on_failure: self.break_on_failure,
            default_value,
            filter: self.filter,
            validator: self.validator,
            select: self.select,
            attributes,
            raw_value: Value::Null,
            value: Value::Null,
            context: None,
            errors: Vec::new(),
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
