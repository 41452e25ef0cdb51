//! Dropdown payload containers.
//!
//! Pure label/value/attribute data carried opaquely by fields and passed
//! through to snapshots; the engine never interprets it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single selectable option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-readable option text.
    pub text: String,

    /// Arbitrary rendering attributes (`value`, `selected`, ...).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Value>,
}

impl SelectOption {
    /// Creates an option with the given text and no attributes.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Adds a rendering attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// A labeled group of options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptGroup {
    /// Group label.
    pub label: String,

    /// Whether the whole group is disabled.
    #[serde(default)]
    pub disabled: bool,

    /// Arbitrary rendering attributes.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Value>,

    /// The group's options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl OptGroup {
    /// Creates an enabled group with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Appends an option.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }
}

/// One entry of a select payload: a plain option or a labeled group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectItem {
    Group(OptGroup),
    Option(SelectOption),
}

/// The dropdown payload attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Select {
    items: Vec<SelectItem>,
}

impl Select {
    /// Creates an empty select payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain option.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.items.push(SelectItem::Option(option));
        self
    }

    /// Appends an option group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(mut self, group: OptGroup) -> Self {
        self.items.push(SelectItem::Group(group));
        self
    }

    /// The entries in declaration order.
    #[must_use]
    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the payload has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_builder() {
        let opt = SelectOption::new("Germany")
            .with_attribute("value", json!("de"))
            .with_attribute("selected", json!(true));

        assert_eq!(opt.text, "Germany");
        assert_eq!(opt.attributes.get("value"), Some(&json!("de")));
    }

    #[test]
    fn select_collects_options_and_groups() {
        let select = Select::new()
            .with_option(SelectOption::new("None"))
            .with_group(OptGroup::new("Europe").with_option(SelectOption::new("Germany")));

        assert_eq!(select.len(), 2);
        assert!(matches!(select.items()[0], SelectItem::Option(_)));
        assert!(matches!(select.items()[1], SelectItem::Group(_)));
    }

    #[test]
    fn serde_round_trip() {
        let select = Select::new()
            .with_option(SelectOption::new("A").with_attribute("value", json!(1)))
            .with_group(
                OptGroup::new("G")
                    .with_option(SelectOption::new("B").with_attribute("value", json!(2))),
            );

        let json_str = serde_json::to_string(&select).unwrap();
        let back: Select = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, select);
    }

    #[test]
    fn empty_attribute_maps_are_omitted() {
        let json_str = serde_json::to_string(&SelectOption::new("A")).unwrap();
        assert!(!json_str.contains("attributes"));
    }
}
