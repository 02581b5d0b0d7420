//! Theme-aware shorthand style functions for Horizon Lattice.
//!
//! This crate turns component props such as `m={2}`, `color="primary.main"`
//! or `width={[1, 0.5]}` into plain style objects, featuring:
//!
//! - **Style functions**: declarative prop to CSS property mappings
//! - **Theme resolution**: spacing multipliers and scales, palette paths,
//!   typography variants
//! - **Responsive values**: arrays and breakpoint-keyed objects become
//!   media-query blocks, emitted in ascending breakpoint order
//! - **Composition**: many style functions merged into one resolver that
//!   also reports which props it consumed
//!
//! The output is a [`CssFragment`](types::CssFragment) ready for a CSS-in-JS
//! serializer or an inline style attribute. Resolution never fails: missing
//! props, unknown theme keys, and unknown breakpoints degrade to pass-through
//! or no output, with diagnostics on the `tracing` targets in [`logging`].
//!
//! # Example
//!
//! ```
//! use horizon_lattice_system::prelude::*;
//! use serde_json::json;
//!
//! let theme = Theme::from_json(r##"{
//!     "spacing": 8,
//!     "palette": { "primary": { "main": "#1976d2" } }
//! }"##)?;
//!
//! let props = Props::new()
//!     .with_theme(theme)
//!     .set("p", json!([1, 2]))
//!     .set("bgcolor", "primary.main");
//!
//! let css = system::all().apply(&props);
//! assert_eq!(
//!     serde_json::Value::Object(css),
//!     json!({
//!         "backgroundColor": "#1976d2",
//!         "padding": 8,
//!         "@media (min-width:600px)": { "padding": 16 }
//!     })
//! );
//! # Ok::<(), horizon_lattice_system::Error>(())
//! ```

pub mod types;
pub mod theme;
pub mod style;
pub mod resolve;
pub mod system;
pub mod logging;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{CssFragment, Props, deep_merge};
    pub use crate::theme::{Breakpoints, Spacing, Theme, UnarySpacing, create_unary_spacing};
    pub use crate::style::{CssProperty, StyleFunction, StyleOptions, resolve_theme_value, style};
    pub use crate::resolve::{
        breakpoints, compose, handle_breakpoints, merge_breakpoints_in_order, style_function_sx,
    };
    pub use crate::system::{self, get_theme_value};
}
