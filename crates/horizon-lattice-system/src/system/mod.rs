//! Pre-built shorthand style functions.
//!
//! Every function here is breakpoint-aware and built once per process. The
//! prop names and the CSS properties they write are a stable public
//! contract: `m`, `mt` and `marginTop` all keep meaning what they mean here.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_system::prelude::*;
//! use horizon_lattice_system::system;
//! use serde_json::json;
//!
//! let theme = Theme::new()
//!     .with_spacing(8.0)
//!     .with_palette(json!({ "primary": { "main": "#1976d2" } }));
//!
//! let props = Props::new()
//!     .with_theme(theme)
//!     .set("mx", 2)
//!     .set("color", "primary.main")
//!     .set("width", 0.5);
//!
//! let css = system::all().apply(&props);
//! assert_eq!(
//!     serde_json::Value::Object(css),
//!     json!({
//!         "marginLeft": 16,
//!         "marginRight": 16,
//!         "color": "#1976d2",
//!         "width": "50%"
//!     })
//! );
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::resolve::{breakpoints, compose};
use crate::style::{StyleFunction, StyleOptions, style};
use crate::theme::{DEFAULT_BREAKPOINT_KEYS, Theme};
use crate::types::{CssFragment, Props};

/// Declare lazily built, shared style functions.
macro_rules! style_functions {
    ($($(#[$meta:meta])* $vis:vis fn $name:ident = $init:expr;)+) => {
        $(
            $(#[$meta])*
            $vis fn $name() -> $crate::style::StyleFunction {
                static CELL: ::std::sync::OnceLock<$crate::style::StyleFunction> =
                    ::std::sync::OnceLock::new();
                CELL.get_or_init(|| $init).clone()
            }
        )+
    };
}

mod borders;
mod display;
mod flexbox;
mod grid;
mod palette;
mod positions;
mod shadows;
mod sizing;
mod spacing;
mod typography;

pub use borders::{
    border, border_bottom, border_color, border_left, border_radius, border_right, border_top,
    borders,
};
pub use display::{
    display, display_print, display_raw, overflow, text_overflow, visibility, white_space,
};
pub use flexbox::{
    align_content, align_items, align_self, flex, flex_basis, flex_direction, flex_grow,
    flex_shrink, flex_wrap, flexbox, justify_content, justify_items, justify_self, order,
};
pub use grid::{
    grid, grid_area, grid_auto_columns, grid_auto_flow, grid_auto_rows, grid_column,
    grid_column_gap, grid_gap, grid_row, grid_row_gap, grid_template_areas, grid_template_columns,
    grid_template_rows,
};
pub use palette::{bgcolor, color, palette};
pub use positions::{bottom, left, position, positions, right, top, z_index};
pub use shadows::{box_shadow, shadows};
pub use sizing::{
    box_sizing, height, max_height, max_width, min_height, min_width, size_height, size_width,
    sizing, width,
};
pub use spacing::{MARGIN_KEYS, PADDING_KEYS, margin, padding, spacing};
pub use typography::{
    font_family, font_size, font_style, font_weight, letter_spacing, line_height, text_align,
    typography, typography_variant,
};

/// A single-prop style function made responsive.
fn responsive(options: StyleOptions) -> StyleFunction {
    breakpoints(style(options))
}

/// The group functions, in the order [`all`] composes them.
pub fn groups() -> [StyleFunction; 10] {
    [
        borders(),
        display(),
        flexbox(),
        grid(),
        positions(),
        palette(),
        shadows(),
        sizing(),
        spacing(),
        typography(),
    ]
}

style_functions! {
    /// Every shorthand prop in one resolver.
    pub fn all = compose(groups());
}

/// The group function owning `prop`, if `prop` is a shorthand prop.
pub fn style_function_for(prop: &str) -> Option<StyleFunction> {
    static REGISTRY: OnceLock<HashMap<String, StyleFunction>> = OnceLock::new();
    REGISTRY
        .get_or_init(|| {
            let mut registry = HashMap::new();
            for group in groups() {
                for name in group.filter_props() {
                    if DEFAULT_BREAKPOINT_KEYS.contains(&name.as_str()) {
                        continue;
                    }
                    registry.entry(name.clone()).or_insert_with(|| group.clone());
                }
            }
            registry
        })
        .get(prop)
        .cloned()
}

/// Resolve one prop against the theme through the registry.
///
/// Unknown props come back unchanged as `{ prop: value }`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let theme = Arc::new(Theme::new().with_spacing(4.0));
///
/// let css = get_theme_value("py", 2, &theme);
/// assert_eq!(serde_json::Value::Object(css), json!({ "paddingTop": 8, "paddingBottom": 8 }));
///
/// let css = get_theme_value("cursor", "pointer", &theme);
/// assert_eq!(serde_json::Value::Object(css), json!({ "cursor": "pointer" }));
/// ```
pub fn get_theme_value(prop: &str, value: impl Into<Value>, theme: &Arc<Theme>) -> CssFragment {
    let value = value.into();
    match style_function_for(prop) {
        Some(function) => {
            function.apply(&Props::new().with_theme(Arc::clone(theme)).set(prop, value))
        }
        None => {
            let mut css = CssFragment::new();
            css.insert(prop.to_owned(), value);
            css
        }
    }
}
