//! Conversion between nested translation trees and dotted keys.
//!
//! A group file such as `{"greeting": {"hi": "Hello"}}` flattens to the
//! single pair `("greeting.hi", "Hello")`, and unflattening the pairs
//! rebuilds the tree.

use serde_json::{Map, Value};

/// Nested translation mapping for one (locale, group).
pub type Tree = Map<String, Value>;

/// Flatten a tree depth-first into `(dotted key, leaf)` pairs.
///
/// Objects are descended into; anything else is a leaf. Empty objects
/// produce no pairs.
pub fn flatten(tree: &Tree) -> Vec<(String, Value)> {
    let mut pairs = Vec::new();
    for (key, value) in tree {
        flatten_into(value, key.clone(), &mut pairs);
    }
    pairs
}

fn flatten_into(value: &Value, prefix: String, pairs: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_into(val, format!("{}.{}", prefix, key), pairs);
            }
        }
        leaf => pairs.push((prefix, leaf.clone())),
    }
}

/// Coerce a leaf to its stored string form.
///
/// Returns `None` for leaves that are not scalars (arrays, objects, null);
/// those are skipped rather than written to the store.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Rebuild a tree from dotted pairs.
///
/// Pairs are applied in ascending key order and later writes win: a leaf
/// standing where a branch is needed becomes a branch, so `a` + `a.b`
/// yields `{"a": {"b": ..}}`.
pub fn unflatten<I, K>(pairs: I) -> Tree
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let mut sorted: Vec<(K, Value)> = pairs.into_iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let mut tree = Tree::new();
    for (key, value) in sorted {
        let path: Vec<&str> = key.as_ref().split('.').collect();
        insert_nested(&mut tree, &path, value);
    }
    tree
}

/// Insert a value at a nested path, creating intermediate objects as needed.
pub fn insert_nested(root: &mut Tree, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        root.insert(first.to_string(), value);
        return;
    }

    let next_level = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    // A leaf in the way of a deeper key is replaced by a branch
    if !next_level.is_object() {
        *next_level = Value::Object(Map::new());
    }

    if let Value::Object(inner) = next_level {
        insert_nested(inner, rest, value);
    }
}

/// Recursively sort keys in place.
pub fn sort_tree(tree: &mut Tree) {
    let mut entries: Vec<(String, Value)> = std::mem::take(tree).into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (key, mut value) in entries {
        if let Value::Object(inner) = &mut value {
            sort_tree(inner);
        }
        tree.insert(key, value);
    }
}
