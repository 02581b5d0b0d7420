//! Color shorthands resolved against `theme.palette`.

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

style_functions! {
    /// `color` (theme key `palette`).
    pub fn color = responsive(StyleOptions::new("color").theme_key("palette"));
    /// `bgcolor`, written as `backgroundColor` (theme key `palette`).
    pub fn bgcolor = responsive(
        StyleOptions::new("bgcolor")
            .css_property("backgroundColor")
            .theme_key("palette"),
    );

    /// Both color shorthands.
    pub fn palette = compose([color(), bgcolor()]);
}
