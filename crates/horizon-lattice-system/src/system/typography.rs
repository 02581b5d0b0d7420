//! Typography shorthands.

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

style_functions! {
    /// `fontFamily` (theme key `typography`).
    pub fn font_family = responsive(StyleOptions::new("fontFamily").theme_key("typography"));
    /// `fontSize` (theme key `typography`).
    pub fn font_size = responsive(StyleOptions::new("fontSize").theme_key("typography"));
    /// `fontStyle` (theme key `typography`).
    pub fn font_style = responsive(StyleOptions::new("fontStyle").theme_key("typography"));
    /// `fontWeight` (theme key `typography`).
    pub fn font_weight = responsive(StyleOptions::new("fontWeight").theme_key("typography"));
    /// `letterSpacing`.
    pub fn letter_spacing = responsive(StyleOptions::new("letterSpacing"));
    /// `lineHeight`.
    pub fn line_height = responsive(StyleOptions::new("lineHeight"));
    /// `textAlign`.
    pub fn text_align = responsive(StyleOptions::new("textAlign"));
    /// `typography`: spreads the named variant from `theme.typography`.
    pub fn typography_variant = responsive(
        StyleOptions::new("typography")
            .no_css_property()
            .theme_key("typography"),
    );

    /// All typography shorthands.
    pub fn typography = compose([
        typography_variant(),
        font_family(),
        font_size(),
        font_style(),
        font_weight(),
        letter_spacing(),
        line_height(),
        text_align(),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::types::Props;
    use serde_json::{Value, json};

    fn theme() -> Theme {
        Theme::new().with_typography(json!({
            "fontWeightBold": 700,
            "h1": { "fontSize": "6rem", "fontWeight": 300, "lineHeight": 1.167 },
            "body2": { "fontSize": "0.875rem" }
        }))
    }

    #[test]
    fn variant_spreads_into_fragment() {
        let props = Props::new().with_theme(theme()).set("typography", "h1");
        assert_eq!(
            Value::Object(typography().apply(&props)),
            json!({ "fontSize": "6rem", "fontWeight": 300, "lineHeight": 1.167 })
        );
    }

    #[test]
    fn explicit_props_override_variant() {
        let props = Props::new()
            .with_theme(theme())
            .set("typography", "h1")
            .set("fontWeight", "fontWeightBold");
        let css = typography().apply(&props);
        assert_eq!(css["fontWeight"], json!(700));
        assert_eq!(css["fontSize"], json!("6rem"));
    }

    #[test]
    fn unknown_variant_emits_nothing() {
        let props = Props::new().with_theme(theme()).set("typography", "h9");
        assert!(typography().apply(&props).is_empty());
    }

    #[test]
    fn responsive_variant() {
        let props = Props::new()
            .with_theme(theme())
            .set("typography", json!({ "md": "body2" }));
        assert_eq!(
            Value::Object(typography_variant().apply(&props)),
            json!({ "@media (min-width:960px)": { "fontSize": "0.875rem" } })
        );
    }
}
