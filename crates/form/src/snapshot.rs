//! Serializable client-facing views of fields, groups, and forms.
//!
//! Snapshots are one-way: they capture the state of a bound (and
//! possibly validated) form for rendering or transport and carry no way
//! back into the engine.

use serde::Serialize;
use serde_json::Value;

use formwork_validator::core::ValidationError;

use crate::attributes::AttributeMap;
use crate::field::Field;
use crate::form::{Form, FormChild};
use crate::group::FieldGroup;
use crate::select::Select;

/// A field's client-facing view.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub required: bool,
    pub value: Value,
    pub attributes: Vec<AttributeMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// A group's client-facing view.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub fields: Vec<FieldSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// One form child's view.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChildSnapshot {
    Field(FieldSnapshot),
    Group(GroupSnapshot),
}

/// A whole form's client-facing view.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub fields: Vec<ChildSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl Field {
    /// Captures this field's client-facing view.
    #[must_use]
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            name: self.name().to_owned(),
            label: self.label().map(ToOwned::to_owned),
            tooltip: self.tooltip().map(ToOwned::to_owned),
            required: self.is_required(),
            value: self.value().clone(),
            attributes: self.attributes().to_vec(),
            select: self.select().cloned(),
            errors: self.last_errors().to_vec(),
        }
    }
}

impl FieldGroup {
    /// Captures this group's client-facing view.
    #[must_use]
    pub fn snapshot(&self) -> GroupSnapshot {
        GroupSnapshot {
            name: self.name().to_owned(),
            label: self.label().map(ToOwned::to_owned),
            tooltip: self.tooltip().map(ToOwned::to_owned),
            fields: self.fields().iter().map(Field::snapshot).collect(),
            errors: self.last_errors().to_vec(),
        }
    }
}

impl FormChild {
    /// Captures this child's client-facing view.
    #[must_use]
    pub fn snapshot(&self) -> ChildSnapshot {
        match self {
            Self::Field(field) => ChildSnapshot::Field(field.snapshot()),
            Self::Group(group) => ChildSnapshot::Group(group.snapshot()),
        }
    }
}

impl Form {
    /// Captures the whole form's client-facing view.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields().map(FormChild::snapshot).collect(),
            errors: self.last_errors().to_vec(),
        }
    }
}
