//! CSS fragments and the value helpers used to build them.
//!
//! A fragment is a plain, insertion-ordered map from CSS property names (or
//! nested selector and at-rule keys) to values or nested fragments. It is
//! what a style function returns and what a CSS-in-JS serializer consumes.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_system::types::{CssFragment, deep_merge};
//! use serde_json::json;
//!
//! let mut base: CssFragment = json!({
//!     "width": 100,
//!     "@media (min-width:600px)": { "width": 200 }
//! }).as_object().cloned().unwrap();
//!
//! let overlay: CssFragment = json!({
//!     "@media (min-width:600px)": { "height": 50 }
//! }).as_object().cloned().unwrap();
//!
//! deep_merge(&mut base, overlay);
//! assert_eq!(base["@media (min-width:600px)"], json!({ "width": 200, "height": 50 }));
//! ```

use serde_json::{Map, Number, Value};

/// A style object: CSS property (or nested rule) to value.
pub type CssFragment = Map<String, Value>;

/// Merge `source` into `target`.
///
/// Nested objects are merged recursively. Any other value replaces the
/// existing entry in place, so an overridden key keeps its original position.
pub fn deep_merge(target: &mut CssFragment, source: CssFragment) {
    for (key, value) in source {
        if let Value::Object(incoming) = value {
            if let Some(Value::Object(existing)) = target.get_mut(&key) {
                deep_merge(existing, incoming);
                continue;
            }
            target.insert(key, Value::Object(incoming));
        } else {
            target.insert(key, value);
        }
    }
}

/// Convert a float into a JSON number, preferring an integer when the value
/// is integral so that `8 * 2` compares equal to `16`.
///
/// Non-finite values become `null`.
pub fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Walk a dotted path (`"primary.main"`, `"shadows.2"`) through nested
/// objects and arrays.
///
/// Returns `None` for an empty path, a missing segment, or a `null` leaf.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.')
        .try_fold(root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
        .filter(|value| !value.is_null())
}

/// Whether a prop value varies per breakpoint (an array or a keyed object).
pub fn is_responsive(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}
