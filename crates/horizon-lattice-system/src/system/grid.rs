//! CSS grid shorthands.

use super::responsive;
use crate::resolve::compose;
use crate::style::StyleOptions;

style_functions! {
    /// `gridGap`.
    pub fn grid_gap = responsive(StyleOptions::new("gridGap"));
    /// `gridColumnGap`.
    pub fn grid_column_gap = responsive(StyleOptions::new("gridColumnGap"));
    /// `gridRowGap`.
    pub fn grid_row_gap = responsive(StyleOptions::new("gridRowGap"));
    /// `gridColumn`.
    pub fn grid_column = responsive(StyleOptions::new("gridColumn"));
    /// `gridRow`.
    pub fn grid_row = responsive(StyleOptions::new("gridRow"));
    /// `gridAutoFlow`.
    pub fn grid_auto_flow = responsive(StyleOptions::new("gridAutoFlow"));
    /// `gridAutoColumns`.
    pub fn grid_auto_columns = responsive(StyleOptions::new("gridAutoColumns"));
    /// `gridAutoRows`.
    pub fn grid_auto_rows = responsive(StyleOptions::new("gridAutoRows"));
    /// `gridTemplateColumns`.
    pub fn grid_template_columns = responsive(StyleOptions::new("gridTemplateColumns"));
    /// `gridTemplateRows`.
    pub fn grid_template_rows = responsive(StyleOptions::new("gridTemplateRows"));
    /// `gridTemplateAreas`.
    pub fn grid_template_areas = responsive(StyleOptions::new("gridTemplateAreas"));
    /// `gridArea`.
    pub fn grid_area = responsive(StyleOptions::new("gridArea"));

    /// All grid shorthands.
    pub fn grid = compose([
        grid_gap(),
        grid_column_gap(),
        grid_row_gap(),
        grid_column(),
        grid_row(),
        grid_auto_flow(),
        grid_auto_columns(),
        grid_auto_rows(),
        grid_template_columns(),
        grid_template_rows(),
        grid_template_areas(),
        grid_area(),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Props;

    #[test]
    fn consumes_every_grid_prop() {
        let grid = grid();
        assert!(grid.consumes("gridTemplateAreas"));
        assert!(grid.consumes("gridGap"));
        assert_eq!(grid.apply(&Props::new().set("gridArea", "main"))["gridArea"], "main");
    }
}
