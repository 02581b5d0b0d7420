//! Box shadow shorthand resolved against `theme.shadows`.

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

style_functions! {
    /// `boxShadow` (theme key `shadows`).
    pub fn box_shadow = responsive(StyleOptions::new("boxShadow").theme_key("shadows"));

    /// The shadow shorthands.
    pub fn shadows = compose([box_shadow()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::types::Props;
    use serde_json::json;

    #[test]
    fn elevation_index() {
        let theme = Theme::new().with_section("shadows", json!(["none", "0 1px 3px", "0 3px 6px"]));
        let props = Props::new().with_theme(theme).set("boxShadow", 2);
        assert_eq!(shadows().apply(&props)["boxShadow"], json!("0 3px 6px"));
    }

    #[test]
    fn out_of_range_elevation_passes_through() {
        let theme = Theme::new().with_section("shadows", json!(["none"]));
        let props = Props::new().with_theme(theme).set("boxShadow", 5);
        assert_eq!(shadows().apply(&props)["boxShadow"], json!(5));
    }
}
