//! The style function type.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::types::{CssFragment, Props};

/// Signature of the closure behind a [`StyleFunction`].
pub type StyleFn = dyn Fn(&Props) -> CssFragment + Send + Sync;

/// A pure `props -> CSS fragment` mapping, annotated with the props it
/// consumes.
///
/// Style functions hold no state: calling one twice with equal props yields
/// equal fragments. Cloning is cheap and clones share the same closure.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let opacity = StyleFunction::new(["opacity"], |props: &Props| {
///     let mut css = CssFragment::new();
///     if let Some(value) = props.value("opacity") {
///         css.insert("opacity".into(), value.clone());
///     }
///     css
/// });
///
/// let css = opacity.apply(&Props::new().set("opacity", 0.5));
/// assert_eq!(css["opacity"], json!(0.5));
/// assert!(opacity.consumes("opacity"));
/// ```
#[derive(Clone)]
pub struct StyleFunction {
    resolve: Arc<StyleFn>,
    filter_props: Arc<[String]>,
}

impl StyleFunction {
    /// Wrap a closure. Duplicate prop names are dropped, first occurrence wins.
    pub fn new<P, F>(filter_props: impl IntoIterator<Item = P>, resolve: F) -> Self
    where
        P: Into<String>,
        F: Fn(&Props) -> CssFragment + Send + Sync + 'static,
    {
        let mut names: Vec<String> = Vec::new();
        for name in filter_props {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }

        Self {
            resolve: Arc::new(resolve),
            filter_props: names.into(),
        }
    }

    /// Resolve `props` into a CSS fragment.
    pub fn apply(&self, props: &Props) -> CssFragment {
        (self.resolve)(props)
    }

    /// Prop names this function consumes.
    pub fn filter_props(&self) -> &[String] {
        &self.filter_props
    }

    /// Check whether this function consumes `prop`.
    pub fn consumes(&self, prop: &str) -> bool {
        self.filter_props.iter().any(|name| name == prop)
    }

    /// Props left over after removing the ones this function consumes, for
    /// forwarding to a base element.
    pub fn forwarded_props(&self, props: &Props) -> Map<String, Value> {
        props
            .values()
            .iter()
            .filter(|(name, _)| !self.consumes(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl fmt::Debug for StyleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleFunction")
            .field("filter_props", &self.filter_props)
            .finish_non_exhaustive()
    }
}

// Ensure StyleFunction is Send + Sync
static_assertions::assert_impl_all!(StyleFunction: Send, Sync);
