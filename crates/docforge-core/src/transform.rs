//! Generic collection and tree transforms used across the generator pipeline.
//!
//! These helpers operate on ordered sequences and on structural JSON data
//! ([`serde_json::Map`] / [`serde_json::Value`]), which is how docforge
//! represents loosely typed generator configuration and spec fragments.

use serde_json::{Map, Value};

/// Map a sequence while telling the transform which element is the last one.
///
/// The transform receives `(item, is_last)`; `is_last` is `true` only for the
/// final element. Order and length are preserved, and an empty input produces
/// an empty output. Renderers use this to suppress trailing separators.
///
/// # Examples
///
/// ```rust
/// use docforge_core::map_with_last;
///
/// let parts = map_with_last(["a", "b", "c"], |s, last| {
///     if last { s.to_string() } else { format!("{s}, ") }
/// });
/// assert_eq!(parts.concat(), "a, b, c");
/// ```
pub fn map_with_last<T, U, F>(items: impl IntoIterator<Item = T>, mut transform: F) -> Vec<U>
where
    F: FnMut(T, bool) -> U,
{
    let mut iter = items.into_iter().peekable();
    let mut mapped = Vec::new();
    while let Some(item) = iter.next() {
        let is_last = iter.peek().is_none();
        mapped.push(transform(item, is_last));
    }
    mapped
}

/// Transform every value of a JSON object, keeping the keys.
///
/// The transform receives `(value, key, original)` so it can look sibling
/// entries up while rewriting a single one. Only the object's own entries are
/// visited, and insertion order is preserved.
///
/// # Examples
///
/// ```rust
/// use docforge_core::map_values;
/// use serde_json::{json, Value};
///
/// let mapping = json!({"a": 1, "b": 2});
/// let scaled = map_values(mapping.as_object().unwrap(), |v, _key, _all| {
///     json!(v.as_i64().unwrap_or(0) * 10)
/// });
/// assert_eq!(Value::Object(scaled), json!({"a": 10, "b": 20}));
/// ```
pub fn map_values<F>(mapping: &Map<String, Value>, mut transform: F) -> Map<String, Value>
where
    F: FnMut(&Value, &str, &Map<String, Value>) -> Value,
{
    let mut mapped = Map::new();
    for (key, value) in mapping {
        mapped.insert(key.clone(), transform(value, key, mapping));
    }
    mapped
}

/// Flatten a tree of JSON nodes into a pre-order sequence.
///
/// Children are looked up under `child_prop` on each node; a missing or
/// non-array child property means "no children". Every node appears in the
/// output immediately before its flattened descendants, with the child
/// property still attached (the flattening does not rewrite nodes).
///
/// # Examples
///
/// ```rust
/// use docforge_core::flatten_by_prop;
/// use serde_json::json;
///
/// let tree = json!([{"id": 1, "items": [{"id": 2}]}, {"id": 3}]);
/// let flat = flatten_by_prop(tree.as_array().unwrap(), "items");
/// let ids: Vec<i64> = flat.iter().filter_map(|n| n["id"].as_i64()).collect();
/// assert_eq!(ids, [1, 2, 3]);
/// ```
#[must_use]
pub fn flatten_by_prop(items: &[Value], child_prop: &str) -> Vec<Value> {
    fn walk(flat: &mut Vec<Value>, items: &[Value], child_prop: &str) {
        for item in items {
            flat.push(item.clone());
            if let Some(Value::Array(children)) = item.get(child_prop) {
                walk(flat, children, child_prop);
            }
        }
    }

    let mut flat = Vec::new();
    walk(&mut flat, items, child_prop);
    flat
}
