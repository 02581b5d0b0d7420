//! Value types shared by every style function.

mod fragment;
mod props;

pub use fragment::{CssFragment, deep_merge, get_path, is_responsive, number};
pub use props::Props;
