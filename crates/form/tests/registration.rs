//! End-to-end scenarios over a realistic registration form.

use formwork_form::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn trim_strings(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_owned()),
        other => other,
    }
}

fn registration_form() -> Form {
    let username = Field::builder("username")
        .label("Username")
        .filter(trim_strings)
        .validator(
            Chain::new()
                .with_breaking(Truthy::new())
                .with(StringLength::new(2, 32)),
        )
        .break_on_failure(true)
        .build()
        .unwrap();

    let age = Field::builder("age")
        .label("Age")
        .validator(Between::new(0.0, 150.0))
        .build()
        .unwrap();

    let address = FieldGroup::new("address")
        .unwrap()
        .with_label("Address")
        .with_field(
            Field::builder("address[street]")
                .validator(Truthy::new())
                .build()
                .unwrap(),
        )
        .with_field(
            Field::builder("address[zip]")
                .validator(Pattern::new(r"^\d{5}$").unwrap())
                .build()
                .unwrap(),
        );

    let tags = Field::builder("tags[]")
        .validator(Each::new(StringLength::new(1, 16)))
        .build()
        .unwrap();

    Form::new()
        .with_field(username)
        .with_field(age)
        .with_group(address)
        .with_field(tags)
}

#[test]
fn fully_valid_submission() {
    let mut form = registration_form();
    form.set_values(json!({
        "username": "  alice  ",
        "age": 30,
        "address": {"street": "Main", "zip": "00000"},
        "tags": ["rust", "forms"]
    }));

    assert!(form.is_valid());
    assert_eq!(
        form.values(),
        Some(&json!({
            "username": "alice",
            "age": 30,
            "address": {"street": "Main", "zip": "00000"},
            "tags": ["rust", "forms"]
        }))
    );
    assert!(form.last_errors().is_empty());
}

#[test]
fn breaking_failure_leaves_later_fields_untouched() {
    let mut form = registration_form();
    form.set_values(json!({
        "username": "",
        "age": 999,
        "address": {"street": "Main", "zip": "00000"},
        "tags": []
    }));

    assert!(!form.is_valid());
    assert_eq!(form.fields_invalid(), ["username"]);
    // `age` is out of range but was never scanned.
    assert!(form.fields_valid().is_empty());
    assert!(!form.fields_invalid().contains(&"age".to_owned()));
}

#[test]
fn group_value_reassembles_the_nested_slice() {
    let mut form = registration_form();
    form.set_values(json!({
        "username": "alice",
        "age": 1,
        "address": {"street": "Main", "zip": "00000"},
        "tags": []
    }));
    assert!(form.is_valid());

    let FormChild::Group(address) = form.get_field("address").unwrap() else {
        panic!("expected a group");
    };
    assert_eq!(address.value(), json!({"street": "Main", "zip": "00000"}));
}

#[test]
fn repeated_validation_is_idempotent() {
    let mut form = registration_form();
    form.set_values(json!({
        "username": "alice",
        "age": 200,
        "address": {"street": "Main", "zip": "bad"},
        "tags": []
    }));

    assert!(!form.is_valid());
    let first_invalid = form.fields_invalid().to_vec();
    let first_errors = form.last_errors().len();

    assert!(!form.is_valid());
    assert_eq!(form.fields_invalid(), first_invalid);
    assert_eq!(form.last_errors().len(), first_errors);
}

#[test]
fn array_field_without_default_reports_empty_array() {
    let form = registration_form();
    let FormChild::Field(tags) = form.get_field("tags[]").unwrap() else {
        panic!("expected a field");
    };
    assert_eq!(tags.default_value(), &json!([]));
}

#[test]
fn per_element_validation_reports_the_failing_index() {
    let mut form = registration_form();
    form.set_values(json!({
        "username": "alice",
        "age": 1,
        "address": {"street": "Main", "zip": "00000"},
        "tags": ["ok", ""]
    }));

    assert!(!form.is_valid());
    assert_eq!(form.fields_invalid(), ["tags[]"]);
    let nested = &form.last_errors()[0].nested;
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].param("index"), Some("1"));
}

#[test]
fn attributes_expose_merged_constraints() {
    let form = registration_form();
    let FormChild::Field(username) = form.get_field("username").unwrap() else {
        panic!("expected a field");
    };

    let attrs = &username.attributes()[0];
    assert_eq!(attrs.get("required"), Some(&json!(true)));
    assert_eq!(attrs.get("minlength"), Some(&json!(2)));
    assert_eq!(attrs.get("maxlength"), Some(&json!(32)));
    assert!(username.is_required());
}

#[test]
fn snapshot_serializes_the_whole_form() {
    let mut form = registration_form();
    form.set_values(json!({
        "username": "alice",
        "age": 1,
        "address": {"street": "", "zip": "00000"},
        "tags": []
    }));
    assert!(!form.is_valid());

    let snapshot = serde_json::to_value(form.snapshot()).unwrap();
    assert_eq!(snapshot["fields"][0]["name"], json!("username"));
    assert_eq!(snapshot["fields"][2]["fields"][0]["name"], json!("address[street]"));
    assert_eq!(snapshot["errors"][0]["code"], json!("required"));
}
