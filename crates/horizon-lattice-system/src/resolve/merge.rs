//! Ordered merging of breakpoint fragments.

use serde_json::Value;

use crate::theme::Breakpoints;
use crate::types::{CssFragment, deep_merge};

/// Merge fragments and re-emit media-query blocks in ascending breakpoint
/// order.
///
/// Plain keys (properties, and any selector or at-rule that is not one of
/// the breakpoints' queries) come first, in first-seen order. Each
/// breakpoint's query follows, smallest first, holding everything any
/// fragment put under it. Later fragments win on identical keys. Empty
/// media blocks are dropped.
///
/// # Example
///
/// ```
/// use horizon_lattice_system::prelude::*;
/// use serde_json::json;
///
/// let wide = json!({ "@media (min-width:960px)": { "width": 3 } });
/// let narrow = json!({ "width": 1, "@media (min-width:600px)": { "width": 2 } });
///
/// let css = merge_breakpoints_in_order(
///     Breakpoints::standard(),
///     [wide, narrow].into_iter().filter_map(|v| v.as_object().cloned()),
/// );
///
/// let keys: Vec<_> = css.keys().cloned().collect();
/// assert_eq!(keys, ["width", "@media (min-width:600px)", "@media (min-width:960px)"]);
/// ```
pub fn merge_breakpoints_in_order<I>(breakpoints: &Breakpoints, styles: I) -> CssFragment
where
    I: IntoIterator<Item = CssFragment>,
{
    let mut merged = CssFragment::new();
    for style in styles {
        deep_merge(&mut merged, style);
    }

    let mut output = CssFragment::new();
    let mut media: Vec<Option<Value>> = vec![None; breakpoints.len()];
    for (key, value) in merged {
        match breakpoints.rank_of_query(&key) {
            Some(rank) => media[rank] = Some(value),
            None => {
                output.insert(key, value);
            }
        }
    }

    for (breakpoint, block) in breakpoints.iter().zip(media) {
        match block {
            Some(Value::Object(block)) if block.is_empty() => {}
            Some(block) => {
                output.insert(breakpoint.query.clone(), block);
            }
            None => {}
        }
    }

    output
}
