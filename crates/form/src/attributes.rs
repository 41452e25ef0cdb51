//! Derivation of constraint attributes from a field's validator.
//!
//! A field's wire-format constraints are declared once, in its
//! validator; this module projects them into presentation metadata
//! (`required`, `pattern`, `min`/`max`, `minlength`/`maxlength`,
//! `step`) so they never have to be specified twice.

use indexmap::IndexMap;
use serde_json::{Value, json};

use formwork_validator::constraint::Constraint;
use formwork_validator::core::Validate;

/// One ordered attribute mapping; a field carries one per rendered input
/// (array fields render one input per default element).
pub type AttributeMap = IndexMap<String, Value>;

/// Derives the attribute set for a field.
///
/// The base mapping is `{name, required: false}`. The validator is
/// unwrapped — a per-element wrapper yields its inner validator, a chain
/// contributes every member in chain order — and each constraint merges
/// its attributes on top, later entries overriding earlier ones on key
/// collision.
///
/// A scalar field gets a single map carrying `value = default`. An
/// array-suffixed field gets one map per default element (with a single
/// `value = null` placeholder when the default is empty).
#[must_use]
pub fn derive(
    name: &str,
    is_array: bool,
    default_value: &Value,
    validator: Option<&dyn Validate>,
) -> Vec<AttributeMap> {
    let mut attrs = AttributeMap::new();
    attrs.insert("name".to_owned(), json!(name));
    attrs.insert("required".to_owned(), json!(false));

    if let Some(validator) = validator {
        let validator = validator.as_each().map_or(validator, |each| each.validator());

        if let Some(chain) = validator.as_chain() {
            for link in chain.validators() {
                merge_constraint(&mut attrs, link.validator().constraint());
            }
        } else {
            merge_constraint(&mut attrs, validator.constraint());
        }
    }

    if is_array {
        let defaults = match default_value {
            Value::Array(items) if !items.is_empty() => items.clone(),
            _ => vec![Value::Null],
        };
        defaults
            .into_iter()
            .map(|value| {
                let mut per_element = attrs.clone();
                per_element.insert("value".to_owned(), value);
                per_element
            })
            .collect()
    } else {
        attrs.insert("value".to_owned(), default_value.clone());
        vec![attrs]
    }
}

fn merge_constraint(attrs: &mut AttributeMap, constraint: Option<Constraint>) {
    let Some(constraint) = constraint else { return };

    match constraint {
        Constraint::Required => {
            attrs.insert("required".to_owned(), json!(true));
        }
        Constraint::Pattern { html } => {
            attrs.insert("pattern".to_owned(), json!(html));
        }
        Constraint::Min { value } => {
            attrs.insert("min".to_owned(), json!(value));
        }
        Constraint::Max { value } => {
            attrs.insert("max".to_owned(), json!(value));
        }
        Constraint::Between { min, max } => {
            attrs.insert("min".to_owned(), json!(min));
            attrs.insert("max".to_owned(), json!(max));
        }
        Constraint::Length { min, max } => {
            attrs.insert("minlength".to_owned(), json!(min));
            if let Some(max) = max {
                attrs.insert("maxlength".to_owned(), json!(max));
            }
        }
        Constraint::Step { value } => {
            attrs.insert("step".to_owned(), json!(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_validator::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_attributes_without_validator() {
        let attrs = derive("age", false, &json!(18), None);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].get("name"), Some(&json!("age")));
        assert_eq!(attrs[0].get("required"), Some(&json!(false)));
        assert_eq!(attrs[0].get("value"), Some(&json!(18)));
    }

    #[test]
    fn truthy_sets_required() {
        let attrs = derive("name", false, &Value::Null, Some(&Truthy::new()));
        assert_eq!(attrs[0].get("required"), Some(&json!(true)));
    }

    #[test]
    fn chain_members_merge_in_order() {
        let chain = Chain::new()
            .with(Truthy::new())
            .with(StringLength::new(2, 100));
        let attrs = derive("username", false, &Value::Null, Some(&chain));

        assert_eq!(attrs[0].get("required"), Some(&json!(true)));
        assert_eq!(attrs[0].get("minlength"), Some(&json!(2)));
        assert_eq!(attrs[0].get("maxlength"), Some(&json!(100)));
    }

    #[test]
    fn later_chain_members_override_on_collision() {
        let chain = Chain::new()
            .with(GreaterThan::new(1.0))
            .with(Between::new(5.0, 10.0));
        let attrs = derive("n", false, &Value::Null, Some(&chain));

        // Between's min wins over GreaterThan's.
        assert_eq!(attrs[0].get("min"), Some(&json!(5.0)));
        assert_eq!(attrs[0].get("max"), Some(&json!(10.0)));
    }

    #[test]
    fn unbounded_length_omits_maxlength() {
        let attrs = derive("bio", false, &Value::Null, Some(&StringLength::min(10)));
        assert_eq!(attrs[0].get("minlength"), Some(&json!(10)));
        assert_eq!(attrs[0].get("maxlength"), None);
    }

    #[test]
    fn pattern_min_max_step() {
        let chain = Chain::new()
            .with(Pattern::new(r"^\d+$").unwrap())
            .with(LessThan::new(99.0))
            .with(Step::new(3.0));
        let attrs = derive("count", false, &Value::Null, Some(&chain));

        assert_eq!(attrs[0].get("pattern"), Some(&json!(r"^\d+$")));
        assert_eq!(attrs[0].get("max"), Some(&json!(99.0)));
        assert_eq!(attrs[0].get("step"), Some(&json!(3.0)));
    }

    #[test]
    fn each_wrapper_is_unwrapped() {
        let each = Each::new(StringLength::new(2, 8));
        let attrs = derive("tags[]", true, &json!([]), Some(&each));

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].get("minlength"), Some(&json!(2)));
        assert_eq!(attrs[0].get("value"), Some(&Value::Null));
    }

    #[test]
    fn each_wrapping_a_chain_contributes_all_members() {
        let each = Each::new(Chain::new().with(Truthy::new()).with(StringLength::new(1, 16)));
        let attrs = derive("tags[]", true, &json!([]), Some(&each));

        assert_eq!(attrs[0].get("required"), Some(&json!(true)));
        assert_eq!(attrs[0].get("maxlength"), Some(&json!(16)));
    }

    #[test]
    fn array_field_gets_one_map_per_default_element() {
        let attrs = derive("tags[]", true, &json!(["a", "b", "c"]), None);

        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[0].get("value"), Some(&json!("a")));
        assert_eq!(attrs[1].get("value"), Some(&json!("b")));
        assert_eq!(attrs[2].get("value"), Some(&json!("c")));
        assert!(attrs.iter().all(|a| a.get("name") == Some(&json!("tags[]"))));
    }

    #[test]
    fn unknown_validator_contributes_nothing() {
        struct Opaque;
        impl Validate for Opaque {
            fn validate(
                &self,
                _input: &Value,
                _context: Option<&Value>,
            ) -> Result<(), ValidationError> {
                Ok(())
            }
        }

        let attrs = derive("x", false, &Value::Null, Some(&Opaque));
        assert_eq!(attrs[0].len(), 3); // name, required, value
        assert_eq!(attrs[0].get("required"), Some(&json!(false)));
    }
}
