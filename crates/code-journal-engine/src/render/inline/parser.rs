use super::kinds::{Emphasis, Link, Strong};

/// Applies the inline passes to a text segment, in fixed order.
///
/// Each pass rewrites the whole text before the next one starts:
/// strong, then emphasis, then links. Markup produced by an earlier pass
/// contains none of the later passes' delimiters, so nothing is matched
/// twice. Matches never cross a line feed.
pub fn apply_inline(text: &str) -> String {
    let strong = Strong::apply(text);
    let emphasis = Emphasis::apply(&strong);
    Link::apply(&emphasis).into_owned()
}
