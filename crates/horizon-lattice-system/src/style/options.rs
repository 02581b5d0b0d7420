//! Declarative single-prop style functions.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{StyleFunction, resolve_theme_value};
use crate::types::{CssFragment, Props};

/// A value transform applied after theme substitution. It may return a
/// scalar or a whole fragment (an object).
pub type Transform = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Where a style function writes its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CssProperty {
    /// Write to a CSS property named like the prop.
    #[default]
    SameAsProp,
    /// Write to this CSS property.
    Named(String),
    /// Write no property. An object result is spread into the fragment and
    /// a scalar result is dropped.
    Suppressed,
}

/// Configuration for one style function.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let bgcolor = style(
///     StyleOptions::new("bgcolor")
///         .css_property("backgroundColor")
///         .theme_key("palette"),
/// );
///
/// let theme = Theme::new().with_palette(json!({ "primary": "#000" }));
/// let css = bgcolor.apply(&Props::new().with_theme(theme).set("bgcolor", "primary"));
/// assert_eq!(css["backgroundColor"], json!("#000"));
/// ```
#[derive(Clone)]
pub struct StyleOptions {
    prop: String,
    css_property: CssProperty,
    theme_key: Option<String>,
    transform: Option<Transform>,
}

impl StyleOptions {
    /// Options reading `prop` and writing the same-named CSS property.
    pub fn new(prop: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            css_property: CssProperty::SameAsProp,
            theme_key: None,
            transform: None,
        }
    }

    /// Write to a differently named CSS property.
    pub fn css_property(mut self, name: impl Into<String>) -> Self {
        self.css_property = CssProperty::Named(name.into());
        self
    }

    /// Write no CSS property of its own.
    pub fn no_css_property(mut self) -> Self {
        self.css_property = CssProperty::Suppressed;
        self
    }

    /// Resolve values against this dotted theme path.
    pub fn theme_key(mut self, key: impl Into<String>) -> Self {
        self.theme_key = Some(key.into());
        self
    }

    /// Transform the resolved value.
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// The prop this style function reads.
    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// The CSS property name written, or `None` when suppressed.
    pub fn target(&self) -> Option<&str> {
        match &self.css_property {
            CssProperty::SameAsProp => Some(&self.prop),
            CssProperty::Named(name) => Some(name),
            CssProperty::Suppressed => None,
        }
    }
}

impl fmt::Debug for StyleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleOptions")
            .field("prop", &self.prop)
            .field("css_property", &self.css_property)
            .field("theme_key", &self.theme_key)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Build a style function from its options.
///
/// The produced function returns an empty fragment when the prop is missing
/// or `null`. It consumes exactly one prop, `options.prop`.
pub fn style(options: StyleOptions) -> StyleFunction {
    let target = options.target().map(str::to_owned);
    let StyleOptions {
        prop,
        theme_key,
        transform,
        ..
    } = options;

    StyleFunction::new([prop.clone()], move |props: &Props| {
        let mut css = CssFragment::new();
        let Some(raw) = props.value(&prop) else {
            return css;
        };

        let resolved =
            resolve_theme_value(props.theme(), theme_key.as_deref(), raw, transform.as_deref());

        match (&target, resolved) {
            (Some(name), value) => {
                css.insert(name.clone(), value);
            }
            (None, Value::Object(fragment)) => css = fragment,
            (None, _) => {}
        }
        css
    })
}
