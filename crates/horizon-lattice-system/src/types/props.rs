//! The props object handed to every style function.

use std::sync::{Arc, OnceLock};

use serde_json::{Map, Value};

use crate::theme::{Breakpoints, Theme};

/// Component props: prop name to value, plus the theme in effect.
///
/// `null` values are treated as missing. The theme is shared read-only, so
/// a single theme can back any number of concurrent resolutions.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let theme = Theme::new().with_spacing(8.0);
/// let props = Props::new()
///     .with_theme(theme)
///     .set("m", 2)
///     .set("color", "primary");
///
/// assert_eq!(props.value("m"), Some(&json!(2)));
/// assert!(props.value("p").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: Map<String, Value>,
    theme: Option<Arc<Theme>>,
}

impl Props {
    /// Create empty props without a theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create props from an existing map of values.
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self {
            values,
            theme: None,
        }
    }

    /// Create props from a JSON object. Any other value yields empty props.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self::from_map(values),
            _ => Self::default(),
        }
    }

    /// Attach the theme to resolve against.
    pub fn with_theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set a prop value (builder form).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a prop value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove a prop, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    /// Get a raw prop value, including explicit `null`s.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get a defined prop value. `null` counts as missing.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    /// Check whether a defined value is present for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// All prop values in insertion order.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// The theme in effect, or an empty theme when none was attached.
    pub fn theme(&self) -> &Theme {
        static EMPTY: OnceLock<Theme> = OnceLock::new();
        self.theme
            .as_deref()
            .unwrap_or_else(|| EMPTY.get_or_init(Theme::default))
    }

    /// The attached theme handle, if any.
    pub fn shared_theme(&self) -> Option<&Arc<Theme>> {
        self.theme.as_ref()
    }

    /// The theme's breakpoints, or the default set when the theme has none.
    pub fn breakpoints(&self) -> &Breakpoints {
        self.theme()
            .breakpoints()
            .unwrap_or_else(|| Breakpoints::standard())
    }

    /// Props holding only `name: value`, sharing this theme.
    pub(crate) fn scoped(&self, name: &str, value: Value) -> Self {
        let mut values = Map::new();
        values.insert(name.to_owned(), value);
        self.nested(values)
    }

    /// Props holding `values`, sharing this theme.
    pub(crate) fn nested(&self, values: Map<String, Value>) -> Self {
        Self {
            values,
            theme: self.theme.clone(),
        }
    }
}

// Ensure Props is Send + Sync
static_assertions::assert_impl_all!(Props: Send, Sync);
