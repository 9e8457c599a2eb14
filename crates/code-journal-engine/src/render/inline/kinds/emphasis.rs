use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use super::link::Link;

/// `**x**` or `__x__`; lazy, same delimiter on both sides, one line only.
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").expect("valid strong regex"));

/// `*x*` or `_x_` where the content holds no delimiter characters and no
/// `<`, so it never straddles a tag from the strong pass.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*_<\n]+)\*|_([^*_<\n]+)_").expect("valid emphasis regex")
});

/// Strong emphasis, rendered as `<strong>`.
pub struct Strong;

impl Strong {
    pub const TAG: &'static str = "strong";

    pub fn apply(text: &str) -> Cow<'_, str> {
        wrap_matches(&STRONG, text, Self::TAG)
    }
}

/// Emphasis, rendered as `<em>`. Must run after [`Strong`] so a `**` pair is
/// never split into two single delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const TAG: &'static str = "em";

    pub fn apply(text: &str) -> Cow<'_, str> {
        wrap_matches(&EMPHASIS, text, Self::TAG)
    }
}

/// Both patterns are two-way alternations; exactly one group participates.
///
/// Matches touching a link url are left as written.
fn wrap_matches<'t>(re: &Regex, text: &'t str, tag: &str) -> Cow<'t, str> {
    let urls = Link::url_spans(text);
    re.replace_all(text, |caps: &Captures<'_>| {
        let whole = &caps[0];
        let span = caps.get(0).map_or(0..0, |m| m.range());
        if urls.iter().any(|url| span.start < url.end && url.start < span.end) {
            return whole.to_string();
        }
        let inner = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        format!("<{tag}>{inner}</{tag}>")
    })
}
