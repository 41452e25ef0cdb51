//! Operations over nested value trees.
//!
//! The engine receives raw input as one arbitrarily nested
//! [`serde_json::Value`] and addresses into it with dot-delimited paths
//! (see [`crate::path`]). Rebuilding a nested tree from `{path: value}`
//! pairs is the inverse used to reassemble validated results.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Looks up a value by dot-delimited path.
///
/// Walks one segment at a time: objects by key, arrays by integer index.
/// Returns `None` the moment a segment is absent or the current node is
/// not a container.
#[must_use]
pub fn get<'a>(path: &str, tree: &'a Value) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Looks up a value by path, cloning it, with `Null` for absent paths.
#[must_use]
pub fn get_or_null(path: &str, tree: &Value) -> Value {
    get(path, tree).cloned().unwrap_or(Value::Null)
}

/// Flattens a nested tree into ordered `{dotted-path: leaf}` pairs.
///
/// Array elements use their integer index as the path segment. Scalars
/// and empty containers are leaves. A scalar root produces no pairs.
#[must_use]
pub fn flatten(tree: &Value) -> IndexMap<String, Value> {
    let mut pairs = IndexMap::new();
    match tree {
        Value::Object(_) | Value::Array(_) => flatten_into(&mut pairs, String::new(), tree),
        _ => {}
    }
    pairs
}

fn flatten_into(pairs: &mut IndexMap<String, Value>, prefix: String, node: &Value) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_owned()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match node {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(pairs, join(key), child);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(pairs, join(&index.to_string()), child);
            }
        }
        leaf => {
            pairs.insert(prefix, leaf.clone());
        }
    }
}

/// Rebuilds a nested tree from `{dotted-path: value}` pairs.
///
/// The inverse of [`flatten`]: splits every key into segments and builds
/// nested containers. A level whose keys are exactly the contiguous
/// integers `0..n` becomes an array; anything else stays an object. On
/// key collision later entries override earlier ones. Values that are
/// themselves trees are inserted verbatim at their path.
#[must_use]
pub fn expand(pairs: &IndexMap<String, Value>) -> Value {
    let mut root = Value::Object(Map::new());
    for (path, value) in pairs {
        insert(&mut root, path, value.clone());
    }
    arrayify(root)
}

fn insert(tree: &mut Value, path: &str, value: Value) {
    let mut current = tree;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        // Later entries override earlier scalars on the way down.
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else { return };

        if segments.peek().is_none() {
            map.insert(segment.to_owned(), value);
            return;
        }
        current = map
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Converts every object level whose keys are the contiguous integers
/// `0..n` into an ordered array, depth-first.
fn arrayify(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut entries: Vec<(String, Value)> =
        map.into_iter().map(|(k, v)| (k, arrayify(v))).collect();

    let indices: Option<Vec<usize>> = entries
        .iter()
        .map(|(k, _)| k.parse::<usize>().ok())
        .collect();

    if let Some(mut indices) = indices.filter(|idx| !idx.is_empty()) {
        indices.sort_unstable();
        if indices == (0..indices.len()).collect::<Vec<_>>() {
            entries.sort_by_key(|(k, _)| k.parse::<usize>().unwrap_or(usize::MAX));
            return Value::Array(entries.into_iter().map(|(_, v)| v).collect());
        }
    }

    Value::Object(entries.into_iter().collect())
}
