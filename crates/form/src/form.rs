//! Top-level orchestration across fields and groups.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use formwork_validator::core::ValidationError;

use crate::error::FormError;
use crate::field::Field;
use crate::group::FieldGroup;
use crate::path;
use crate::tree;

/// A form child: a single field or a whole group, validated uniformly.
#[derive(Debug, Clone)]
pub enum FormChild {
    Field(Field),
    Group(FieldGroup),
}

impl FormChild {
    /// The child's declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.name(),
            Self::Group(group) => group.name(),
        }
    }

    /// The human-readable label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Field(field) => field.label(),
            Self::Group(group) => group.label(),
        }
    }

    /// Whether a failure of this child stops the form's scan. For a
    /// group this is the derived flag from its last validation pass.
    #[must_use]
    pub fn is_break_on_failure(&self) -> bool {
        match self {
            Self::Field(field) => field.is_break_on_failure(),
            Self::Group(group) => group.is_break_on_failure(),
        }
    }

    /// Errors captured by the last validation pass.
    #[must_use]
    pub fn last_errors(&self) -> &[ValidationError] {
        match self {
            Self::Field(field) => field.last_errors(),
            Self::Group(group) => group.last_errors(),
        }
    }

    /// The bound filtered value (a group reassembles its nested tree).
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::Field(field) => field.value().clone(),
            Self::Group(group) => group.value(),
        }
    }

    /// The bound raw value.
    #[must_use]
    pub fn raw_value(&self) -> Value {
        match self {
            Self::Field(field) => field.raw_value().clone(),
            Self::Group(group) => group.raw_value(),
        }
    }

    fn is_valid(&mut self) -> bool {
        match self {
            Self::Field(field) => field.is_valid(),
            Self::Group(group) => group.is_valid(),
        }
    }
}

impl From<Field> for FormChild {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<FieldGroup> for FormChild {
    fn from(group: FieldGroup) -> Self {
        Self::Group(group)
    }
}

/// The validation entry point: holds children, takes one raw input
/// tree, and drives a break-aware validation pass over all of them.
///
/// Every pass rebuilds the valid/invalid views, the aggregate errors,
/// and the reassembled value tree from scratch; nothing accumulates
/// across passes.
#[derive(Debug, Clone, Default)]
pub struct Form {
    children: IndexMap<String, FormChild>,
    raw_values: Value,
    values: Option<Value>,
    fields_valid: Vec<String>,
    fields_invalid: Vec<String>,
    errors: Vec<ValidationError>,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field. A later registration under the same name
    /// replaces the earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(self, field: Field) -> Self {
        self.with_child(field.into())
    }

    /// Registers a group. A later registration under the same name
    /// replaces the earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(self, group: FieldGroup) -> Self {
        self.with_child(group.into())
    }

    fn with_child(mut self, child: FormChild) -> Self {
        self.children.insert(child.name().to_owned(), child);
        self
    }

    /// Stores the raw input tree verbatim, replacing the previous one.
    pub fn set_values(&mut self, values: Value) {
        self.raw_values = values;
    }

    /// The raw input tree as last set.
    #[must_use]
    pub fn raw_values(&self) -> &Value {
        &self.raw_values
    }

    /// The reassembled tree of valid children's filtered values.
    ///
    /// `None` before the first validation pass.
    #[must_use]
    pub fn values(&self) -> Option<&Value> {
        self.values.as_ref()
    }

    /// Names of children that passed the last validation.
    #[must_use]
    pub fn fields_valid(&self) -> &[String] {
        &self.fields_valid
    }

    /// Names of children that failed the last validation.
    ///
    /// Children skipped by a break appear in neither view.
    #[must_use]
    pub fn fields_invalid(&self) -> &[String] {
        &self.fields_invalid
    }

    /// Aggregate errors merged from failing children, in scan order.
    #[must_use]
    pub fn last_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// All registered children in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FormChild> {
        self.children.values()
    }

    /// Whether a child with the given declared name is registered.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Looks up a child by its declared name.
    ///
    /// # Errors
    ///
    /// [`FormError::FieldNotFound`] naming the missing child.
    pub fn get_field(&self, name: &str) -> Result<&FormChild, FormError> {
        self.children.get(name).ok_or_else(|| FormError::FieldNotFound {
            name: name.to_owned(),
        })
    }

    /// Binds every child to its slice of the raw tree and validates
    /// them in declaration order.
    ///
    /// Each child receives its own slice of the raw tree (looked up by
    /// dot path) plus the whole raw tree as context. A failing child
    /// with the break flag stops the pass; children after the break are
    /// left unbound and reported as neither valid nor invalid.
    pub fn is_valid(&mut self) -> bool {
        self.fields_valid.clear();
        self.fields_invalid.clear();
        self.errors.clear();

        let raw = self.raw_values.clone();
        let mut values_flat: IndexMap<String, Value> = IndexMap::new();

        for (name, child) in &mut self.children {
            let child_path = path::to_path(name);
            let slice = tree::get_or_null(&child_path, &raw);

            *child = match child {
                FormChild::Field(field) => {
                    FormChild::Field(field.with_value(slice, Some(raw.clone())))
                }
                FormChild::Group(group) => {
                    // Re-nest the slice under the group's own path so the
                    // children's full dot paths resolve into it.
                    let nested = if slice.is_null() {
                        Value::Null
                    } else {
                        let mut pair = IndexMap::new();
                        pair.insert(child_path.clone(), slice);
                        tree::expand(&pair)
                    };
                    FormChild::Group(group.with_value(&nested, Some(&raw)))
                }
            };

            if child.is_valid() {
                values_flat.insert(child_path, child.value());
                self.fields_valid.push(name.clone());
            } else {
                self.fields_invalid.push(name.clone());
                self.errors.extend_from_slice(child.last_errors());
                if child.is_break_on_failure() {
                    debug!(field = %name, "validation stopped by breaking failure");
                    break;
                }
            }
        }

        self.values = Some(tree::expand(&values_flat));

        debug!(
            valid = self.fields_valid.len(),
            invalid = self.fields_invalid.len(),
            errors = self.errors.len(),
            "validation pass finished"
        );
        self.errors.is_empty()
    }
}
