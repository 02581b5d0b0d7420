//! Named responsive thresholds and their media queries.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::{Error, Result};

/// Default breakpoint names, smallest first.
pub const DEFAULT_BREAKPOINT_KEYS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// Default minimum widths for [`DEFAULT_BREAKPOINT_KEYS`], in pixels.
pub const DEFAULT_BREAKPOINT_WIDTHS: [f64; 5] = [0.0, 600.0, 960.0, 1280.0, 1920.0];

/// A single named breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    /// Breakpoint name (e.g. `"sm"`).
    pub key: String,
    /// Minimum width, when the breakpoint was built from widths.
    pub width: Option<f64>,
    /// Media query emitted for styles at or above this breakpoint.
    pub query: String,
}

/// An ordered set of breakpoints, smallest first.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::theme::Breakpoints;
///
/// let breakpoints = Breakpoints::standard();
/// assert_eq!(breakpoints.up("sm").as_deref(), Some("@media (min-width:600px)"));
/// assert_eq!(breakpoints.index_of("md"), Some(2));
/// assert!(breakpoints.up("xxl").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
    unit: String,
}

impl Breakpoints {
    /// Build breakpoints from `(name, min width)` pairs in pixels.
    ///
    /// Names must be unique and widths strictly ascending.
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, f64)>) -> Result<Self> {
        Self::with_unit(entries, "px")
    }

    /// Build breakpoints from `(name, min width)` pairs in the given unit.
    pub fn with_unit<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, f64)>,
        unit: impl Into<String>,
    ) -> Result<Self> {
        let unit = unit.into();
        let mut previous: Option<f64> = None;
        let mut built = Vec::new();

        for (key, width) in entries {
            let key = key.into();
            if !width.is_finite() {
                return Err(Error::invalid_breakpoints(format!(
                    "width of '{key}' is not a finite number"
                )));
            }
            if previous.is_some_and(|prev| width <= prev) {
                return Err(Error::invalid_breakpoints(format!(
                    "'{key}' must be wider than the breakpoint before it"
                )));
            }
            previous = Some(width);
            built.push(Breakpoint {
                query: format!("@media (min-width:{width}{unit})"),
                width: Some(width),
                key,
            });
        }

        Self::from_entries(built, unit)
    }

    /// Build breakpoints from `(name, media query)` pairs, smallest first.
    pub fn from_queries<K, Q>(entries: impl IntoIterator<Item = (K, Q)>) -> Result<Self>
    where
        K: Into<String>,
        Q: Into<String>,
    {
        let built = entries
            .into_iter()
            .map(|(key, query)| Breakpoint {
                key: key.into(),
                width: None,
                query: query.into(),
            })
            .collect();
        Self::from_entries(built, "px".to_owned())
    }

    fn from_entries(entries: Vec<Breakpoint>, unit: String) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::invalid_breakpoints("no breakpoints defined"));
        }

        let mut keys = HashSet::new();
        let mut queries = HashSet::new();
        for entry in &entries {
            if !keys.insert(entry.key.as_str()) {
                return Err(Error::invalid_breakpoints(format!(
                    "duplicate breakpoint '{}'",
                    entry.key
                )));
            }
            if !queries.insert(entry.query.as_str()) {
                return Err(Error::invalid_breakpoints(format!(
                    "breakpoint '{}' repeats the query '{}'",
                    entry.key, entry.query
                )));
            }
        }

        Ok(Self { entries, unit })
    }

    /// The default set: `xs`, `sm`, `md`, `lg`, `xl` at 0/600/960/1280/1920px.
    pub fn standard() -> &'static Breakpoints {
        static STANDARD: OnceLock<Breakpoints> = OnceLock::new();
        STANDARD.get_or_init(|| Self {
            entries: DEFAULT_BREAKPOINT_KEYS
                .iter()
                .zip(DEFAULT_BREAKPOINT_WIDTHS)
                .map(|(key, width)| Breakpoint {
                    key: (*key).to_owned(),
                    width: Some(width),
                    query: format!("@media (min-width:{width}px)"),
                })
                .collect(),
            unit: "px".to_owned(),
        })
    }

    /// Breakpoint names, smallest first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// The name at a rank (0 = smallest).
    pub fn key(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.key.as_str())
    }

    /// Rank of a breakpoint name.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Check whether a breakpoint name is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Minimum width of a breakpoint, when known.
    pub fn width(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.width)
    }

    /// Media query matching widths at or above `key`.
    pub fn up(&self, key: &str) -> Option<String> {
        self.query(key).map(str::to_owned)
    }

    /// Borrowed form of [`up`](Self::up).
    pub fn query(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.query.as_str())
    }

    /// Rank of the breakpoint that emits `query`, if any.
    pub fn rank_of_query(&self, query: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.query == query)
    }

    /// All breakpoints, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unit used for widths.
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::standard().clone()
    }
}
