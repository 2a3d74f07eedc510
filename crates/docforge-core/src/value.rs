//! Predicates and deep merge over structural JSON values.
//!
//! Generator configuration arrives as loosely structured
//! [`serde_json::Value`] trees from several layers (built-in defaults, theme
//! presets, user overrides). The predicates here classify those values the
//! way the merge logic needs, and [`merge_objects`] folds the layers together.

use serde_json::{Map, Value};

/// Whether a value is object-like.
///
/// Deliberately loose: both maps and arrays count, mirroring a structural
/// "is this a container" check. Callers that need a plain map (as the merge
/// logic does) must additionally exclude arrays.
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Whether a value is an array.
#[must_use]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Whether a value is a boolean.
#[must_use]
pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Whether a value reads as a finite number.
///
/// Accepts numbers and numeric strings (`"42"`, `" 3.5 "`); rejects
/// everything else, including `"NaN"` and infinities.
///
/// # Examples
///
/// ```rust
/// use docforge_core::is_numeric;
/// use serde_json::json;
///
/// assert!(is_numeric(&json!(42)));
/// assert!(is_numeric(&json!("42")));
/// assert!(!is_numeric(&json!("abc")));
/// assert!(!is_numeric(&json!("Infinity")));
/// ```
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

/// Whether a value participates in deep merging: a plain map, not an array.
const fn is_mergeable_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Whether a slot counts as empty for merge purposes (`null`, `false`, `0`,
/// `""`). Such slots are replaced with a fresh map before merging into them.
fn is_empty_slot(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Deep-merge `sources` into `target`, left to right, in place.
///
/// For each source map entry: map values merge recursively (an empty target
/// slot is first replaced with `{}`), while arrays and primitives overwrite
/// the target entry wholesale. Later sources take precedence. `Null` entries
/// in the source list are skipped, as are non-map sources; a non-map `target`
/// is left untouched.
///
/// Recursion depth is bounded by the nesting depth of the merged
/// configuration; `Value` trees cannot be cyclic, so termination is
/// guaranteed.
///
/// # Examples
///
/// ```rust
/// use docforge_core::merge_objects;
/// use serde_json::json;
///
/// let mut config = json!({"theme": {"color": "red"}});
/// merge_objects(&mut config, [&json!({"theme": {"font": "mono"}})]);
/// assert_eq!(config, json!({"theme": {"color": "red", "font": "mono"}}));
/// ```
pub fn merge_objects<'a, I>(target: &mut Value, sources: I)
where
    I: IntoIterator<Item = &'a Value>,
{
    let Value::Object(target_map) = target else {
        return;
    };

    for source in sources {
        let Value::Object(source_map) = source else {
            continue;
        };
        for (key, source_value) in source_map {
            if is_mergeable_object(source_value) {
                let slot = target_map.entry(key.clone()).or_insert(Value::Null);
                if is_empty_slot(slot) {
                    *slot = Value::Object(Map::new());
                }
                // Non-map slots fall through merge_objects untouched
                merge_objects(slot, std::iter::once(source_value));
            } else {
                target_map.insert(key.clone(), source_value.clone());
            }
        }
    }
}
