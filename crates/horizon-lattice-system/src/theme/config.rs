//! Loading themes from JSON.
//!
//! ```json
//! {
//!   "spacing": 8,
//!   "breakpoints": { "values": { "xs": 0, "sm": 600, "md": 960 }, "unit": "px" },
//!   "palette": { "primary": { "main": "#1976d2" } },
//!   "typography": { "h1": { "fontSize": "6rem", "fontWeight": 300 } }
//! }
//! ```
//!
//! `spacing` is a multiplier or a scale. Breakpoints are ordered by width
//! unless `keys` lists an explicit order. Every other key becomes a
//! free-form section.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Breakpoints, Spacing, Theme};
use crate::logging::targets;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct ThemeConfig {
    #[serde(default)]
    spacing: Option<SpacingConfig>,
    #[serde(default)]
    breakpoints: Option<BreakpointsConfig>,
    #[serde(flatten)]
    sections: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpacingConfig {
    Multiplier(f64),
    Scale(Vec<Value>),
}

#[derive(Debug, Deserialize)]
struct BreakpointsConfig {
    #[serde(default)]
    keys: Option<Vec<String>>,
    values: Map<String, Value>,
    #[serde(default)]
    unit: Option<String>,
}

impl BreakpointsConfig {
    fn build(self) -> Result<Breakpoints> {
        let mut entries = Vec::with_capacity(self.values.len());
        for (key, value) in &self.values {
            let width = value.as_f64().ok_or_else(|| {
                Error::invalid_theme_value(
                    format!("breakpoints.values.{key}"),
                    format!("expected a number, got {value}"),
                )
            })?;
            entries.push((key.clone(), width));
        }

        match self.keys {
            Some(keys) => {
                let mut ordered = Vec::with_capacity(keys.len());
                for key in keys {
                    let width = entries
                        .iter()
                        .find(|(name, _)| *name == key)
                        .map(|(_, width)| *width)
                        .ok_or_else(|| {
                            Error::invalid_breakpoints(format!("'{key}' has no width in values"))
                        })?;
                    ordered.push((key, width));
                }
                entries = ordered;
            }
            None => entries.sort_by(|a, b| a.1.total_cmp(&b.1)),
        }

        Breakpoints::with_unit(entries, self.unit.unwrap_or_else(|| "px".to_owned()))
    }
}

impl Theme {
    /// Parse a theme from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a theme from a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let config: ThemeConfig = serde_json::from_value(value)?;

        let spacing = match config.spacing {
            Some(SpacingConfig::Multiplier(factor)) => Spacing::Multiplier(factor),
            Some(SpacingConfig::Scale(scale)) => Spacing::Scale(scale),
            None => Spacing::Unset,
        };
        let breakpoints = config.breakpoints.map(BreakpointsConfig::build).transpose()?;

        let mut theme = Theme::new().with_spacing(spacing);
        if let Some(breakpoints) = breakpoints {
            theme = theme.with_breakpoints(breakpoints);
        }
        for (name, section) in config.sections {
            theme = theme.with_section(name, section);
        }
        Ok(theme)
    }

    /// Load a theme from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let theme = Self::from_json(&json)?;
        tracing::debug!(target: targets::THEME, "Loaded theme: {}", path.display());
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_full_theme() {
        let theme = Theme::from_value(json!({
            "spacing": 4,
            "breakpoints": { "values": { "md": 900, "xs": 0, "sm": 600 } },
            "palette": { "primary": "#000" },
            "zIndex": { "modal": 1300 }
        }))
        .unwrap();

        assert!(matches!(theme.spacing(), Spacing::Multiplier(f) if *f == 4.0));
        let keys: Vec<_> = theme.breakpoints().unwrap().keys().collect();
        assert_eq!(keys, ["xs", "sm", "md"]);
        assert_eq!(theme.lookup("palette.primary"), Some(&json!("#000")));
        assert_eq!(theme.lookup("zIndex.modal"), Some(&json!(1300)));
    }

    #[test]
    fn parse_spacing_scale() {
        let theme = Theme::from_json(r#"{ "spacing": ["0px", "4px", "8px"] }"#).unwrap();
        assert!(matches!(theme.spacing(), Spacing::Scale(scale) if scale.len() == 3));
    }

    #[test]
    fn explicit_key_order() {
        let theme = Theme::from_value(json!({
            "breakpoints": {
                "keys": ["phone", "tablet"],
                "values": { "tablet": 40, "phone": 0 },
                "unit": "em"
            }
        }))
        .unwrap();
        let breakpoints = theme.breakpoints().unwrap();
        assert_eq!(breakpoints.up("tablet").as_deref(), Some("@media (min-width:40em)"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Theme::from_value(json!({ "spacing": "wide" })),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Theme::from_value(json!({ "breakpoints": { "values": { "sm": "600px" } } })),
            Err(Error::InvalidThemeValue { .. })
        ));
        assert!(matches!(
            Theme::from_value(json!({ "breakpoints": { "keys": ["lg"], "values": { "sm": 600 } } })),
            Err(Error::InvalidBreakpoints { .. })
        ));
        assert!(Theme::from_json("{ not json").is_err());
    }
}
