//! Margin and padding shorthands resolved through the theme's spacing.
//!
//! Aliases expand by their second letter: `t`, `r`, `b`, `l` pick one side,
//! `x` picks left and right, `y` picks top and bottom. The long forms
//! (`marginTop`, `paddingX`, ...) mean the same as their short ones.

use serde_json::Value;

use crate::resolve::{breakpoints, compose};
use crate::style::StyleFunction;
use crate::theme::{UnarySpacing, create_unary_spacing};
use crate::types::{CssFragment, Props, deep_merge, number};

/// Props read by [`margin`].
pub const MARGIN_KEYS: [&str; 14] = [
    "m",
    "mt",
    "mr",
    "mb",
    "ml",
    "mx",
    "my",
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginX",
    "marginY",
];

/// Props read by [`padding`].
pub const PADDING_KEYS: [&str; 14] = [
    "p",
    "pt",
    "pr",
    "pb",
    "pl",
    "px",
    "py",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingX",
    "paddingY",
];

/// CSS properties written for a spacing prop.
fn css_properties(prop: &str) -> Vec<String> {
    let prop = match prop {
        "marginX" => "mx",
        "marginY" => "my",
        "paddingX" => "px",
        "paddingY" => "py",
        other => other,
    };
    if prop.len() > 2 {
        return vec![prop.to_owned()];
    }

    let mut letters = prop.chars();
    let property = match letters.next() {
        Some('m') => "margin",
        Some('p') => "padding",
        _ => return Vec::new(),
    };
    let sides: &[&str] = match letters.next() {
        None => &[""],
        Some('t') => &["Top"],
        Some('r') => &["Right"],
        Some('b') => &["Bottom"],
        Some('l') => &["Left"],
        Some('x') => &["Left", "Right"],
        Some('y') => &["Top", "Bottom"],
        _ => &[],
    };
    sides.iter().map(|side| format!("{property}{side}")).collect()
}

/// Resolve one spacing argument. Negative numbers resolve their magnitude
/// and are negated afterwards.
fn spacing_value(spacing: &UnarySpacing, value: &Value) -> Option<Value> {
    let n = match value {
        Value::String(_) => return Some(value.clone()),
        Value::Number(n) => n.as_f64()?,
        other => return spacing.resolve(other),
    };

    let resolved = spacing.resolve(&number(n.abs()))?;
    if n >= 0.0 {
        return Some(resolved);
    }
    Some(match resolved {
        Value::Number(magnitude) => magnitude.as_f64().map_or(Value::Null, |m| number(-m)),
        Value::String(length) => Value::String(format!("-{length}")),
        other => other,
    })
}

fn spacing_style(keys: &'static [&'static str]) -> StyleFunction {
    let table: Vec<(&'static str, Vec<String>)> =
        keys.iter().map(|key| (*key, css_properties(key))).collect();

    StyleFunction::new(keys.iter().copied(), move |props: &Props| {
        let mut css = CssFragment::new();
        if !table.iter().any(|(key, _)| props.contains(key)) {
            return css;
        }

        // Built on first use: string lengths never touch the theme.
        let mut spacing: Option<UnarySpacing> = None;
        for (key, properties) in &table {
            let Some(value) = props.value(key) else {
                continue;
            };
            let resolved = match value {
                Value::String(_) => Some(value.clone()),
                _ => {
                    let spacing =
                        spacing.get_or_insert_with(|| create_unary_spacing(props.theme()));
                    spacing_value(spacing, value)
                }
            };
            let Some(resolved) = resolved else {
                continue;
            };
            let mut fragment = CssFragment::new();
            for property in properties {
                fragment.insert(property.clone(), resolved.clone());
            }
            deep_merge(&mut css, fragment);
        }
        css
    })
}

style_functions! {
    /// Margin aliases (see [`MARGIN_KEYS`]).
    pub fn margin = breakpoints(spacing_style(&MARGIN_KEYS));
    /// Padding aliases (see [`PADDING_KEYS`]).
    pub fn padding = breakpoints(spacing_style(&PADDING_KEYS));

    /// Margin and padding together.
    pub fn spacing = compose([margin(), padding()]);
}
