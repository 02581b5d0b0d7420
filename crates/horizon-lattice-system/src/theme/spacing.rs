//! Theme spacing and the unary spacing resolver.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Theme;
use crate::logging::targets;
use crate::types::number;

/// A spacing resolver: spacing argument to CSS length, `None` when the
/// theme cannot resolve it.
pub type SpacingFn = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// The shape of a theme's `spacing` entry.
#[derive(Clone, Default)]
pub enum Spacing {
    /// No spacing configured.
    #[default]
    Unset,
    /// Numeric arguments are multiplied by this factor.
    Multiplier(f64),
    /// Integer arguments index into this scale.
    Scale(Vec<Value>),
    /// Arguments are resolved by a caller-provided function.
    Custom(SpacingFn),
}

impl Spacing {
    /// Wrap a resolver function.
    pub fn custom<F>(resolve: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(resolve))
    }

    /// Check whether spacing is configured.
    pub fn is_set(&self) -> bool {
        !matches!(self, Spacing::Unset)
    }
}

impl fmt::Debug for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Unset => f.write_str("Unset"),
            Spacing::Multiplier(factor) => f.debug_tuple("Multiplier").field(factor).finish(),
            Spacing::Scale(scale) => f.debug_tuple("Scale").field(scale).finish(),
            Spacing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<f64> for Spacing {
    fn from(factor: f64) -> Self {
        Spacing::Multiplier(factor)
    }
}

impl From<Vec<Value>> for Spacing {
    fn from(scale: Vec<Value>) -> Self {
        Spacing::Scale(scale)
    }
}

/// A theme's spacing normalized into a single resolver.
///
/// The spacing shape is inspected once, when the resolver is created, and
/// never again per call.
#[derive(Clone)]
pub struct UnarySpacing {
    resolve: SpacingFn,
}

impl UnarySpacing {
    /// Resolve a spacing argument. `None` means the theme has no spacing.
    pub fn resolve(&self, value: &Value) -> Option<Value> {
        (self.resolve)(value)
    }
}

impl fmt::Debug for UnarySpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnarySpacing").finish_non_exhaustive()
    }
}

/// Build the resolver for `theme.spacing`.
///
/// - a multiplier scales numbers and passes other values through
/// - a scale indexes with non-negative integers and passes other values
///   (strings, out-of-range indexes) through as literal lengths
/// - a custom function is used as-is
/// - no spacing resolves everything to `None`
///
/// # Example
///
/// ```
/// use horizon_lattice_system::theme::{Theme, create_unary_spacing};
/// use serde_json::json;
///
/// let spacing = create_unary_spacing(&Theme::new().with_spacing(8.0));
/// assert_eq!(spacing.resolve(&json!(2)), Some(json!(16)));
/// assert_eq!(spacing.resolve(&json!("2rem")), Some(json!("2rem")));
/// ```
pub fn create_unary_spacing(theme: &Theme) -> UnarySpacing {
    let resolve: SpacingFn = match theme.spacing() {
        Spacing::Multiplier(factor) => {
            let factor = *factor;
            Arc::new(move |value: &Value| match value {
                Value::Number(n) => n.as_f64().map(|abs| number(abs * factor)),
                Value::String(_) => Some(value.clone()),
                other => {
                    tracing::warn!(
                        target: targets::SPACING,
                        "expected spacing argument to be a number or a string, got {}",
                        other
                    );
                    Some(other.clone())
                }
            })
        }
        Spacing::Scale(scale) => {
            let scale = scale.clone();
            Arc::new(move |value: &Value| {
                let index = match value {
                    Value::Number(n) => n.as_u64(),
                    _ => None,
                };
                match index.and_then(|i| usize::try_from(i).ok()).and_then(|i| scale.get(i)) {
                    Some(resolved) => Some(resolved.clone()),
                    None => {
                        if value.is_number() {
                            tracing::warn!(
                                target: targets::SPACING,
                                "spacing argument {} is not an index into a scale of {} entries",
                                value,
                                scale.len()
                            );
                        }
                        Some(value.clone())
                    }
                }
            })
        }
        Spacing::Custom(resolve) => Arc::clone(resolve),
        Spacing::Unset => {
            tracing::warn!(
                target: targets::SPACING,
                "theme.spacing is not configured; spacing props will be ignored"
            );
            Arc::new(|_: &Value| -> Option<Value> { None })
        }
    };

    UnarySpacing { resolve }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multiplier_spacing() {
        let spacing = create_unary_spacing(&Theme::new().with_spacing(8.0));
        assert_eq!(spacing.resolve(&json!(2)), Some(json!(16)));
        assert_eq!(spacing.resolve(&json!(0.5)), Some(json!(4)));
        assert_eq!(spacing.resolve(&json!("2rem")), Some(json!("2rem")));
        assert_eq!(spacing.resolve(&json!(true)), Some(json!(true)));
    }

    #[test]
    fn scale_spacing() {
        let theme = Theme::new().with_spacing(vec![json!("0px"), json!("4px"), json!("8px")]);
        let spacing = create_unary_spacing(&theme);
        assert_eq!(spacing.resolve(&json!(1)), Some(json!("4px")));
        assert_eq!(spacing.resolve(&json!(7)), Some(json!(7)));
        assert_eq!(spacing.resolve(&json!(1.5)), Some(json!(1.5)));
        assert_eq!(spacing.resolve(&json!("2rem")), Some(json!("2rem")));
    }

    #[test]
    fn custom_spacing() {
        let theme = Theme::new().with_spacing(Spacing::custom(|value| {
            value.as_f64().map(|n| Value::String(format!("{}em", n / 4.0)))
        }));
        let spacing = create_unary_spacing(&theme);
        assert_eq!(spacing.resolve(&json!(2)), Some(json!("0.5em")));
        assert_eq!(spacing.resolve(&json!("x")), None);
    }

    #[test]
    fn unset_spacing_resolves_nothing() {
        let spacing = create_unary_spacing(&Theme::new());
        assert_eq!(spacing.resolve(&json!(2)), None);
        assert_eq!(spacing.resolve(&json!("2rem")), None);
    }

    #[test]
    fn debug_hides_closures() {
        assert_eq!(format!("{:?}", Spacing::custom(|_| None)), "Custom(..)");
        assert_eq!(format!("{:?}", Spacing::from(8.0)), "Multiplier(8.0)");
    }
}
