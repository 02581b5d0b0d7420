//! Theme value resolution: shorthand prop values to literal CSS values.

use serde_json::Value;

use crate::logging::targets;
use crate::theme::{Theme, create_unary_spacing};
use crate::types::get_path;

/// Resolve `raw` against the theme section at `theme_key`, then apply
/// `transform`.
///
/// A string is looked up as a dotted path in the section and a number as an
/// index (arrays) or key (objects). The `spacing` key resolves through the
/// theme's unary spacing. Anything that does not resolve, including a
/// missing section, passes through unchanged.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let theme = Theme::new().with_palette(json!({ "primary": { "main": "#1976d2" } }));
///
/// let hit = resolve_theme_value(&theme, Some("palette"), &json!("primary.main"), None);
/// assert_eq!(hit, json!("#1976d2"));
///
/// let miss = resolve_theme_value(&theme, Some("palette"), &json!("#fff"), None);
/// assert_eq!(miss, json!("#fff"));
/// ```
pub fn resolve_theme_value(
    theme: &Theme,
    theme_key: Option<&str>,
    raw: &Value,
    transform: Option<&(dyn Fn(&Value) -> Value + Send + Sync)>,
) -> Value {
    let substituted = match theme_key {
        None => raw.clone(),
        Some("spacing") => create_unary_spacing(theme)
            .resolve(raw)
            .unwrap_or_else(|| raw.clone()),
        Some(key) => match theme.lookup(key) {
            Some(mapping) => lookup_in(mapping, raw).cloned().unwrap_or_else(|| {
                tracing::trace!(target: targets::THEME, "{} is not a key of theme.{}", raw, key);
                raw.clone()
            }),
            None => {
                tracing::debug!(
                    target: targets::THEME,
                    "theme.{} is not defined; using {} as-is",
                    key,
                    raw
                );
                raw.clone()
            }
        },
    };

    match transform {
        Some(transform) => transform(&substituted),
        None => substituted,
    }
}

fn lookup_in<'a>(mapping: &'a Value, raw: &Value) -> Option<&'a Value> {
    let found = match (mapping, raw) {
        (_, Value::String(path)) => get_path(mapping, path),
        (Value::Array(items), Value::Number(n)) => n
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| items.get(i)),
        (Value::Object(map), Value::Number(n)) => map.get(&n.to_string()),
        _ => None,
    };
    found.filter(|value| !value.is_null())
}
