//! Display and visibility shorthands.

use serde_json::{Value, json};

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

fn print_only(value: &Value) -> Value {
    json!({ "@media print": { "display": value } })
}

style_functions! {
    /// `displayPrint`: `display` inside `@media print`.
    pub fn display_print =
        responsive(StyleOptions::new("displayPrint").no_css_property().transform(print_only));
    /// `display`.
    pub fn display_raw = responsive(StyleOptions::new("display"));
    /// `overflow`.
    pub fn overflow = responsive(StyleOptions::new("overflow"));
    /// `textOverflow`.
    pub fn text_overflow = responsive(StyleOptions::new("textOverflow"));
    /// `visibility`.
    pub fn visibility = responsive(StyleOptions::new("visibility"));
    /// `whiteSpace`.
    pub fn white_space = responsive(StyleOptions::new("whiteSpace"));

    /// All display shorthands.
    pub fn display = compose([
        display_print(),
        display_raw(),
        overflow(),
        text_overflow(),
        visibility(),
        white_space(),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Props;

    #[test]
    fn display_print_nests_under_print_media() {
        let css = display().apply(&Props::new().set("display", "flex").set("displayPrint", "none"));
        assert_eq!(
            Value::Object(css),
            json!({ "@media print": { "display": "none" }, "display": "flex" })
        );
    }

    #[test]
    fn responsive_display() {
        let css = display().apply(&Props::new().set("display", json!(["none", null, "block"])));
        assert_eq!(
            Value::Object(css),
            json!({ "display": "none", "@media (min-width:960px)": { "display": "block" } })
        );
    }
}
