//! Border shorthands.

use serde_json::Value;

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

/// Numeric border widths become `"{n}px solid"`.
fn border_width(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::String(format!("{n}px solid")),
        other => other.clone(),
    }
}

fn side(prop: &str) -> StyleOptions {
    StyleOptions::new(prop).theme_key("borders").transform(border_width)
}

style_functions! {
    /// `border` (theme key `borders`).
    pub fn border = responsive(side("border"));
    /// `borderTop` (theme key `borders`).
    pub fn border_top = responsive(side("borderTop"));
    /// `borderRight` (theme key `borders`).
    pub fn border_right = responsive(side("borderRight"));
    /// `borderBottom` (theme key `borders`).
    pub fn border_bottom = responsive(side("borderBottom"));
    /// `borderLeft` (theme key `borders`).
    pub fn border_left = responsive(side("borderLeft"));
    /// `borderColor` (theme key `palette`).
    pub fn border_color = responsive(StyleOptions::new("borderColor").theme_key("palette"));
    /// `borderRadius` (theme key `shape`).
    pub fn border_radius = responsive(StyleOptions::new("borderRadius").theme_key("shape"));

    /// All border shorthands.
    pub fn borders = compose([
        border(),
        border_top(),
        border_right(),
        border_bottom(),
        border_left(),
        border_color(),
        border_radius(),
    ]);
}
