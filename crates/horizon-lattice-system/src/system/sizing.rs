//! Size shorthands. Non-zero numbers up to `1` are fractions of the
//! container.

use serde_json::Value;

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

fn fraction_to_percent(value: &Value) -> Value {
    match value.as_f64() {
        Some(fraction) if fraction <= 1.0 && fraction != 0.0 => {
            Value::String(format!("{}%", fraction * 100.0))
        }
        _ => value.clone(),
    }
}

fn dimension(prop: &str) -> StyleOptions {
    StyleOptions::new(prop).transform(fraction_to_percent)
}

style_functions! {
    /// `width`.
    pub fn width = responsive(dimension("width"));
    /// `maxWidth`.
    pub fn max_width = responsive(dimension("maxWidth"));
    /// `minWidth`.
    pub fn min_width = responsive(dimension("minWidth"));
    /// `height`.
    pub fn height = responsive(dimension("height"));
    /// `maxHeight`.
    pub fn max_height = responsive(dimension("maxHeight"));
    /// `minHeight`.
    pub fn min_height = responsive(dimension("minHeight"));
    /// `size`, written as `width`.
    pub fn size_width = responsive(dimension("size").css_property("width"));
    /// `size`, written as `height`.
    pub fn size_height = responsive(dimension("size").css_property("height"));
    /// `boxSizing`.
    pub fn box_sizing = responsive(StyleOptions::new("boxSizing"));

    /// All size shorthands.
    pub fn sizing = compose([
        width(),
        max_width(),
        min_width(),
        height(),
        max_height(),
        min_height(),
        size_width(),
        size_height(),
        box_sizing(),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Props;
    use serde_json::json;

    #[test]
    fn fractions_become_percentages() {
        assert_eq!(fraction_to_percent(&json!(0.5)), json!("50%"));
        assert_eq!(fraction_to_percent(&json!(1)), json!("100%"));
        assert_eq!(fraction_to_percent(&json!(0)), json!(0));
        assert_eq!(fraction_to_percent(&json!(300)), json!(300));
        assert_eq!(fraction_to_percent(&json!("75vw")), json!("75vw"));
    }

    #[test]
    fn size_sets_both_dimensions() {
        let css = sizing().apply(&Props::new().set("size", 40).set("boxSizing", "border-box"));
        assert_eq!(
            Value::Object(css),
            json!({ "width": 40, "height": 40, "boxSizing": "border-box" })
        );
    }

    #[test]
    fn width_is_last_write_wins_with_size() {
        let css = sizing().apply(&Props::new().set("width", 10).set("size", 20));
        assert_eq!(css["width"], json!(20));
    }
}
