//! Positioning shorthands.

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

style_functions! {
    /// `position`.
    pub fn position = responsive(StyleOptions::new("position"));
    /// `zIndex` (theme key `zIndex`).
    pub fn z_index = responsive(StyleOptions::new("zIndex").theme_key("zIndex"));
    /// `top`.
    pub fn top = responsive(StyleOptions::new("top"));
    /// `right`.
    pub fn right = responsive(StyleOptions::new("right"));
    /// `bottom`.
    pub fn bottom = responsive(StyleOptions::new("bottom"));
    /// `left`.
    pub fn left = responsive(StyleOptions::new("left"));

    /// All positioning shorthands.
    pub fn positions = compose([position(), z_index(), top(), right(), bottom(), left()]);
}
