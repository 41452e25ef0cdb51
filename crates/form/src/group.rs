//! A named collection of fields validated as one unit.

use serde_json::Value;

use formwork_validator::core::ValidationError;

use crate::error::FormError;
use crate::field::Field;
use crate::path;
use crate::tree;

/// An ordered set of fields under a shared name.
///
/// Children are addressed by their own full declared names
/// (`address[street]`, not `street`); the group's name is only used to
/// strip the common prefix when reassembling its nested value.
///
/// Like [`Field`], a group is a template: [`FieldGroup::with_value`]
/// returns a bound copy. The group's break flag is *derived*: it
/// reflects the child whose failure most recently stopped a scan.
#[derive(Debug, Clone)]
pub struct FieldGroup {
    name: String,
    label: Option<String>,
    tooltip: Option<String>,
    break_on_failure: bool,
    fields: Vec<Field>,
    errors: Vec<ValidationError>,
}

impl FieldGroup {
    /// Creates an empty group with the given declared name.
    ///
    /// # Errors
    ///
    /// [`FormError::EmptyName`] for an empty or whitespace-only name.
    pub fn new(name: impl Into<String>) -> Result<Self, FormError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FormError::EmptyName);
        }
        Ok(Self {
            name,
            label: None,
            tooltip: None,
            break_on_failure: false,
            fields: Vec::new(),
            errors: Vec::new(),
        })
    }

    /// Sets the human-readable label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the tooltip or help text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Returns a copy with the given field appended.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns a copy with all given fields appended.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Replaces the owned field set.
    pub fn set_fields(&mut self, fields: Vec<Field>) {
        self.fields = fields;
    }

    /// The declared group name.
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

    /// The children in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Whether the last validation pass was stopped by a child that
    /// carries the break flag.
    #[must_use]
    pub fn is_break_on_failure(&self) -> bool {
        self.break_on_failure
    }

    /// Errors merged from failing children on the last validation pass.
    #[must_use]
    pub fn last_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns a new group with every child bound to its slice of the
    /// given tree.
    ///
    /// Children look up their own full dot path, so the tree must be
    /// nested the same way the raw input is. An absent (null) or empty
    /// tree leaves all children unbound and returns an unchanged copy.
    #[must_use]
    pub fn with_value(&self, value: &Value, context: Option<&Value>) -> Self {
        if is_absent(value) {
            return self.clone();
        }

        let mut bound = self.clone();
        bound.fields = self
            .fields
            .iter()
            .map(|field| {
                let slice = tree::get_or_null(&path::to_path(field.name()), value);
                field.with_value(slice, context.cloned())
            })
            .collect();
        bound
    }

    /// Validates every child in declaration order.
    ///
    /// A failing child's errors are merged into the group's own slot.
    /// When the failing child carries the break flag the scan stops
    /// there and the group adopts the flag; other failures accumulate.
    pub fn is_valid(&mut self) -> bool {
        self.errors.clear();
        self.break_on_failure = false;

        for field in &mut self.fields {
            if field.is_valid() {
                continue;
            }
            self.errors.extend_from_slice(field.last_errors());
            if field.is_break_on_failure() {
                self.break_on_failure = true;
                break;
            }
        }

        self.errors.is_empty()
    }

    /// The group's nested filtered value, reassembled from its children.
    #[must_use]
    pub fn value(&self) -> Value {
        self.collect(Field::value)
    }

    /// The group's nested raw value, reassembled from its children.
    #[must_use]
    pub fn raw_value(&self) -> Value {
        self.collect(Field::raw_value)
    }

    /// The group's nested default value, reassembled from its children.
    #[must_use]
    pub fn default_value(&self) -> Value {
        self.collect(Field::default_value)
    }

    fn collect<'a>(&'a self, pick: impl Fn(&'a Field) -> &'a Value) -> Value {
        let prefix = format!("{}.", path::to_path(&self.name));
        let pairs = self
            .fields
            .iter()
            .map(|field| {
                let child_path = path::to_path(field.name());
                let stripped = child_path
                    .strip_prefix(&prefix)
                    .map_or(child_path.clone(), ToOwned::to_owned);
                (stripped, pick(field).clone())
            })
            .collect();
        tree::expand(&pairs)
    }
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
