//! Responsive prop values.
//!
//! A responsive value is an array (one entry per breakpoint rank, smallest
//! first) or an object keyed by breakpoint name. `null` entries emit nothing.
//! The first array entry is the mobile-first base and lands at the top level;
//! every other entry is nested under its breakpoint's media query.

use serde_json::Value;

use super::merge_breakpoints_in_order;
use crate::logging::targets;
use crate::style::StyleFunction;
use crate::theme::DEFAULT_BREAKPOINT_KEYS;
use crate::types::{CssFragment, Props, deep_merge, is_responsive};

/// Resolve a possibly-responsive prop value with `style_from_prop_value`.
///
/// Scalars resolve at the top level. Entries for breakpoints the theme does
/// not define are skipped.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let css = handle_breakpoints(&Props::new(), &json!([1, null, 3]), |value| {
///     json!({ "order": value }).as_object().cloned().unwrap_or_default()
/// });
///
/// assert_eq!(
///     serde_json::Value::Object(css),
///     json!({ "order": 1, "@media (min-width:960px)": { "order": 3 } })
/// );
/// ```
pub fn handle_breakpoints<F>(
    props: &Props,
    prop_value: &Value,
    style_from_prop_value: F,
) -> CssFragment
where
    F: Fn(&Value) -> CssFragment,
{
    let breakpoints = props.breakpoints();
    let mut css = CssFragment::new();

    match prop_value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.is_null() {
                    continue;
                }
                let Some(key) = breakpoints.key(index) else {
                    tracing::debug!(
                        target: targets::BREAKPOINTS,
                        "responsive value has {} entries but only {} breakpoints are defined",
                        items.len(),
                        breakpoints.len()
                    );
                    break;
                };
                let fragment = style_from_prop_value(item);
                if index == 0 {
                    deep_merge(&mut css, fragment);
                } else {
                    nest(&mut css, breakpoints.query(key), fragment);
                }
            }
        }
        Value::Object(entries) => {
            for key in entries.keys().filter(|key| !breakpoints.contains(key)) {
                tracing::debug!(
                    target: targets::BREAKPOINTS,
                    "ignoring unknown breakpoint '{}'",
                    key
                );
            }
            // Ascending breakpoint order, whatever order the object lists them in.
            for breakpoint in breakpoints.iter() {
                match entries.get(&breakpoint.key) {
                    Some(item) if !item.is_null() => nest(
                        &mut css,
                        Some(breakpoint.query.as_str()),
                        style_from_prop_value(item),
                    ),
                    _ => {}
                }
            }
        }
        scalar => css = style_from_prop_value(scalar),
    }

    css
}

/// Make a style function responsive.
///
/// Each prop the function consumes may now be an array or a keyed object.
/// The function also accepts props named after a breakpoint holding a props
/// object (`sm: { width: 200 }`), which resolve under that breakpoint.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let width = breakpoints(style(StyleOptions::new("width")));
///
/// let css = width.apply(&Props::new().set("width", json!([100, 200])));
/// assert_eq!(
///     serde_json::Value::Object(css),
///     json!({ "width": 100, "@media (min-width:600px)": { "width": 200 } })
/// );
/// ```
pub fn breakpoints(style_function: StyleFunction) -> StyleFunction {
    let inner = style_function.clone();
    let filter_props = DEFAULT_BREAKPOINT_KEYS
        .iter()
        .map(|key| (*key).to_owned())
        .chain(style_function.filter_props().iter().cloned());

    StyleFunction::new(filter_props, move |props: &Props| {
        let breakpoints = props.breakpoints();
        let mut base = props.clone();
        let mut responsive = Vec::new();
        for prop in inner.filter_props() {
            if breakpoints.contains(prop) || DEFAULT_BREAKPOINT_KEYS.contains(&prop.as_str()) {
                continue;
            }
            if let Some(value) = props.value(prop).filter(|value| is_responsive(value)) {
                base.remove(prop);
                responsive.push((prop, value));
            }
        }

        let mut css = inner.apply(&base);

        for (prop, value) in responsive {
            let fragment = handle_breakpoints(props, value, |item| {
                inner.apply(&props.scoped(prop, item.clone()))
            });
            deep_merge(&mut css, fragment);
        }

        for breakpoint in breakpoints.iter() {
            if inner.consumes(&breakpoint.key) {
                continue;
            }
            if let Some(Value::Object(nested)) = props.value(&breakpoint.key) {
                let fragment = inner.apply(&props.nested(nested.clone()));
                nest(&mut css, Some(breakpoint.query.as_str()), fragment);
            }
        }

        merge_breakpoints_in_order(breakpoints, [css])
    })
}

fn nest(css: &mut CssFragment, query: Option<&str>, fragment: CssFragment) {
    let Some(query) = query else {
        return;
    };
    if fragment.is_empty() {
        return;
    }
    let mut wrapper = CssFragment::new();
    wrapper.insert(query.to_owned(), Value::Object(fragment));
    deep_merge(css, wrapper);
}
