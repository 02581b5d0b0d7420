//! Style functions and the factory that builds them.

mod function;
mod options;
mod value;

pub use function::{StyleFn, StyleFunction};
pub use options::{CssProperty, StyleOptions, Transform, style};
pub use value::resolve_theme_value;
