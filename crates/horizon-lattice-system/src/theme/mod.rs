//! The theme surface style functions resolve against.

mod breakpoints;
mod config;
mod spacing;

use serde_json::{Map, Value};

use crate::types::get_path;

pub use breakpoints::{Breakpoint, Breakpoints, DEFAULT_BREAKPOINT_KEYS, DEFAULT_BREAKPOINT_WIDTHS};
pub use spacing::{Spacing, SpacingFn, UnarySpacing, create_unary_spacing};

/// A read-only theme.
///
/// `spacing` and `breakpoints` are typed because the style system computes
/// with them. Every other section (`palette`, `typography`, `shadows`,
/// `zIndex`, ...) is free-form and looked up by dotted path.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::theme::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .with_spacing(8.0)
///     .with_palette(json!({ "primary": { "main": "#1976d2" } }));
///
/// assert_eq!(theme.lookup("palette.primary.main"), Some(&json!("#1976d2")));
/// assert_eq!(theme.lookup("palette.secondary"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    spacing: Spacing,
    breakpoints: Option<Breakpoints>,
    sections: Map<String, Value>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing.
    pub fn with_spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Set the breakpoints.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// Set the `palette` section.
    pub fn with_palette(self, palette: Value) -> Self {
        self.with_section("palette", palette)
    }

    /// Set the `typography` section.
    pub fn with_typography(self, typography: Value) -> Self {
        self.with_section("typography", typography)
    }

    /// Set a free-form section.
    pub fn with_section(mut self, name: impl Into<String>, value: Value) -> Self {
        self.sections.insert(name.into(), value);
        self
    }

    /// The theme's spacing.
    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// The theme's breakpoints, if configured.
    pub fn breakpoints(&self) -> Option<&Breakpoints> {
        self.breakpoints.as_ref()
    }

    /// The `palette` section.
    pub fn palette(&self) -> Option<&Value> {
        self.section("palette")
    }

    /// The `typography` section.
    pub fn typography(&self) -> Option<&Value> {
        self.section("typography")
    }

    /// A free-form section by name.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name).filter(|value| !value.is_null())
    }

    /// Look up a dotted path (`"palette.primary.main"`) in the free-form
    /// sections.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let section = self.section(head)?;
        match rest {
            Some(rest) => get_path(section, rest),
            None => Some(section),
        }
    }
}

// Ensure Theme is Send + Sync
static_assertions::assert_impl_all!(Theme: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_theme() {
        let theme = Theme::new();
        assert!(!theme.spacing().is_set());
        assert!(theme.breakpoints().is_none());
        assert!(theme.palette().is_none());
        assert!(theme.lookup("palette").is_none());
    }

    #[test]
    fn section_lookup() {
        let theme = Theme::new()
            .with_typography(json!({ "h1": { "fontSize": "6rem" } }))
            .with_section("shadows", json!(["none", "0 1px 3px"]));

        assert_eq!(theme.lookup("typography.h1.fontSize"), Some(&json!("6rem")));
        assert_eq!(theme.lookup("shadows.1"), Some(&json!("0 1px 3px")));
        assert_eq!(theme.lookup("shadows.9"), None);
        assert_eq!(theme.typography(), theme.section("typography"));
    }
}
