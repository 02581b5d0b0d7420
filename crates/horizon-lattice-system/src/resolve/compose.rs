//! Composition of many style functions into one.

use std::sync::Arc;

use super::merge_breakpoints_in_order;
use crate::style::StyleFunction;
use crate::types::Props;

/// Chain style functions into a single resolver.
///
/// Every function runs against the same props. Their fragments are merged in
/// declaration order with [`merge_breakpoints_in_order`], using the theme's
/// breakpoints or the default set, so later functions win on identical
/// property and breakpoint. The result consumes the union of the inputs'
/// props.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let colors = compose([
///     style(StyleOptions::new("color")),
///     style(StyleOptions::new("color").css_property("backgroundColor")),
/// ]);
///
/// let css = colors.apply(&Props::new().set("color", "red"));
/// assert_eq!(
///     serde_json::Value::Object(css),
///     json!({ "color": "red", "backgroundColor": "red" })
/// );
/// ```
pub fn compose<I>(style_functions: I) -> StyleFunction
where
    I: IntoIterator<Item = StyleFunction>,
{
    let functions: Arc<[StyleFunction]> = style_functions.into_iter().collect();
    let filter_props: Vec<String> = functions
        .iter()
        .flat_map(|function| function.filter_props().iter().cloned())
        .collect();

    StyleFunction::new(filter_props, move |props: &Props| {
        merge_breakpoints_in_order(
            props.breakpoints(),
            functions.iter().map(|function| function.apply(props)),
        )
    })
}
