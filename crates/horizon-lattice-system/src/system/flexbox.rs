//! Flexbox shorthands.

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

style_functions! {
    /// `flexBasis`.
    pub fn flex_basis = responsive(StyleOptions::new("flexBasis"));
    /// `flexDirection`.
    pub fn flex_direction = responsive(StyleOptions::new("flexDirection"));
    /// `flexWrap`.
    pub fn flex_wrap = responsive(StyleOptions::new("flexWrap"));
    /// `justifyContent`.
    pub fn justify_content = responsive(StyleOptions::new("justifyContent"));
    /// `alignItems`.
    pub fn align_items = responsive(StyleOptions::new("alignItems"));
    /// `alignContent`.
    pub fn align_content = responsive(StyleOptions::new("alignContent"));
    /// `order`.
    pub fn order = responsive(StyleOptions::new("order"));
    /// `flex`.
    pub fn flex = responsive(StyleOptions::new("flex"));
    /// `flexGrow`.
    pub fn flex_grow = responsive(StyleOptions::new("flexGrow"));
    /// `flexShrink`.
    pub fn flex_shrink = responsive(StyleOptions::new("flexShrink"));
    /// `alignSelf`.
    pub fn align_self = responsive(StyleOptions::new("alignSelf"));
    /// `justifyItems`.
    pub fn justify_items = responsive(StyleOptions::new("justifyItems"));
    /// `justifySelf`.
    pub fn justify_self = responsive(StyleOptions::new("justifySelf"));

    /// All flexbox shorthands.
    pub fn flexbox = compose([
        flex_basis(),
        flex_direction(),
        flex_wrap(),
        justify_content(),
        align_items(),
        align_content(),
        order(),
        flex(),
        flex_grow(),
        flex_shrink(),
        align_self(),
        justify_items(),
        justify_self(),
    ]);
}
