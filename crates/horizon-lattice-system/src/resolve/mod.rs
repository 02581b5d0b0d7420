//! Responsive values, breakpoint merging, and composition.

mod breakpoints;
mod compose;
mod merge;
mod sx;

pub use breakpoints::{breakpoints, handle_breakpoints};
pub use compose::compose;
pub use merge::merge_breakpoints_in_order;
pub use sx::{SX_PROP, style_function_sx};
