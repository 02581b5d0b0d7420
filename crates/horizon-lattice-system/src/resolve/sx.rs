//! The `sx` prop: inline style objects that still understand shorthand.

use serde_json::Value;

use super::merge_breakpoints_in_order;
use crate::style::StyleFunction;
use crate::types::{CssFragment, Props, deep_merge};

/// Name of the inline style prop.
pub const SX_PROP: &str = "sx";

/// Extend a style function with an `sx` prop.
///
/// The `sx` object is resolved by the wrapped function, with the same theme,
/// on top of the regular props. Its entries the wrapped function does not
/// consume are merged in as literal CSS.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let theme = Theme::new().with_palette(json!({ "primary": "#000" }));
/// let resolver = style_function_sx(style(StyleOptions::new("color").theme_key("palette")));
///
/// let props = Props::new()
///     .with_theme(theme)
///     .set("sx", json!({ "color": "primary", "cursor": "pointer" }));
///
/// assert_eq!(
///     serde_json::Value::Object(resolver.apply(&props)),
///     json!({ "color": "#000", "cursor": "pointer" })
/// );
/// ```
pub fn style_function_sx(style_function: StyleFunction) -> StyleFunction {
    let inner = style_function.clone();
    let filter_props = std::iter::once(SX_PROP.to_owned())
        .chain(style_function.filter_props().iter().cloned());

    StyleFunction::new(filter_props, move |props: &Props| {
        let output = inner.apply(props);
        let Some(Value::Object(sx)) = props.value(SX_PROP) else {
            return output;
        };

        let themed = inner.apply(&props.nested(sx.clone()));
        let literal: CssFragment = sx
            .iter()
            .filter(|(name, _)| !inner.consumes(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let mut css = output;
        deep_merge(&mut css, themed);
        deep_merge(&mut css, literal);
        merge_breakpoints_in_order(props.breakpoints(), [css])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{breakpoints, compose};
    use crate::style::{StyleOptions, style};
    use serde_json::json;

    fn resolver() -> StyleFunction {
        style_function_sx(compose([
            breakpoints(style(StyleOptions::new("width"))),
            style(StyleOptions::new("color")),
        ]))
    }

    #[test]
    fn without_sx_is_unchanged() {
        let css = resolver().apply(&Props::new().set("width", 10));
        assert_eq!(Value::Object(css), json!({ "width": 10 }));
    }

    #[test]
    fn sx_overrides_props() {
        let props = Props::new()
            .set("color", "red")
            .set("sx", json!({ "color": "blue", "&:hover": { "opacity": 0.5 } }));
        let css = resolver().apply(&props);
        assert_eq!(
            Value::Object(css),
            json!({ "color": "blue", "&:hover": { "opacity": 0.5 } })
        );
    }

    #[test]
    fn sx_supports_responsive_values() {
        let props = Props::new().set("sx", json!({ "width": [1, 2] }));
        let css = resolver().apply(&props);
        assert_eq!(
            Value::Object(css),
            json!({ "width": 1, "@media (min-width:600px)": { "width": 2 } })
        );
    }

    #[test]
    fn consumes_sx() {
        let function = resolver();
        assert_eq!(function.filter_props()[0], SX_PROP);
        assert!(function.consumes("width"));
    }
}
