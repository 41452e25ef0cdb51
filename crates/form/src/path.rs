//! Translation between bracketed field names and dot-delimited paths.
//!
//! Declared field names use `[key]` for nested keys and a trailing `[]`
//! for repeated (array) fields: `user[address][street]`, `tags[]`.
//! Lookups into the raw value tree use dot-delimited paths:
//! `user.address.street`, `tags`.

use std::sync::LazyLock;

use regex::Regex;

/// A bracketed segment: digits, Unicode letters, `-`, `_`.
static BRACKET_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([0-9\p{L}\-_]+)\]").unwrap_or_else(|e| panic!("bracket grammar: {e}"))
});

/// Converts a declared field name into its dot-delimited lookup path.
///
/// All trailing `[]` array markers are stripped (they carry no positional
/// information), then every remaining `[key]` becomes `.key`, and a
/// single leading `.` (from a name that began with `[key]`) is removed.
/// Strings outside the bracket grammar pass through unchanged; there are
/// no error conditions.
///
/// A non-trailing `[]` (as in `a[][b]`) is outside the supported grammar
/// and is kept as a literal segment: `a[][b]` becomes `a[].b`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(to_path("user[address][street]"), "user.address.street");
/// assert_eq!(to_path("tags[]"), "tags");
/// ```
#[must_use]
pub fn to_path(name: &str) -> String {
    let mut name = name;
    while let Some(stripped) = name.strip_suffix("[]") {
        name = stripped;
    }

    let path = BRACKET_SEGMENT.replace_all(name, ".$1");
    match path.strip_prefix('.') {
        Some(stripped) => stripped.to_owned(),
        None => path.into_owned(),
    }
}

/// Whether a declared name marks a repeated (array) field.
#[must_use]
pub fn is_array_name(name: &str) -> bool {
    name.ends_with("[]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_brackets_become_dots() {
        assert_eq!(to_path("a[b][c]"), "a.b.c");
        assert_eq!(to_path("user[address][street]"), "user.address.street");
    }

    #[test]
    fn trailing_array_markers_are_stripped() {
        assert_eq!(to_path("a[]"), "a");
        assert_eq!(to_path("a[][]"), "a");
        assert_eq!(to_path("a[b][]"), "a.b");
    }

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(to_path("username"), "username");
        assert_eq!(to_path(""), "");
    }

    #[test]
    fn leading_bracket_loses_its_dot() {
        assert_eq!(to_path("[street]"), "street");
        assert_eq!(to_path("[street][zip]"), "street.zip");
    }

    #[test]
    fn unicode_digit_dash_underscore_keys() {
        assert_eq!(to_path("a[поле]"), "a.поле");
        assert_eq!(to_path("a[0][x-y_z]"), "a.0.x-y_z");
    }

    #[test]
    fn non_trailing_array_marker_stays_literal() {
        // Pinned policy: `[]` before further brackets is outside the
        // grammar and survives verbatim.
        assert_eq!(to_path("a[][b]"), "a[].b");
    }

    #[test]
    fn strings_outside_the_grammar_are_unchanged() {
        assert_eq!(to_path("a[b"), "a[b");
        assert_eq!(to_path("a]b["), "a]b[");
        assert_eq!(to_path("a[*]"), "a[*]");
    }

    #[test]
    fn array_name_detection() {
        assert!(is_array_name("tags[]"));
        assert!(!is_array_name("tags"));
        assert!(!is_array_name("a[][b]"));
    }
}
