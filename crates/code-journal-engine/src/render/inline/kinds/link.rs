use std::{borrow::Cow, ops::Range, sync::LazyLock};

use regex::{Captures, Regex};

/// `[label](url)`: label on one line, url without whitespace or `)`.
///
/// Parentheses do not balance: `[w](wiki/Rust_(lang))` ends the url at the
/// first `)`, leaving `)` as text.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").expect("valid link regex"));

/// Inline link, rendered as an anchor that opens in a new browsing context.
pub struct Link;

impl Link {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
    /// Percent-encoded form of `"`, so a url can never close the attribute.
    pub const QUOTE_ENCODED: &'static str = "%22";
    /// Schemes that would run script when the anchor is followed.
    const BLOCKED_SCHEMES: [&'static str; 3] = ["javascript:", "vbscript:", "data:"];
    const BLOCKED_HREF: &'static str = "#";

    pub fn apply(text: &str) -> Cow<'_, str> {
        LINK.replace_all(text, |caps: &Captures<'_>| Self::to_html(&caps[1], &caps[2]))
    }

    /// Byte ranges of every link url in `text`. The emphasis passes leave
    /// these untouched so a url reaches [`Link::apply`] as written.
    pub fn url_spans(text: &str) -> Vec<Range<usize>> {
        LINK.captures_iter(text)
            .filter_map(|caps| caps.get(2))
            .map(|m| m.range())
            .collect()
    }

    /// Builds the anchor. `label` is emitted as is (already escaped text);
    /// `url` goes through [`Link::href`].
    pub fn to_html(label: &str, url: &str) -> String {
        format!(
            "<a href=\"{}\" target=\"{}\" rel=\"{}\">{label}</a>",
            Self::href(url),
            Self::TARGET,
            Self::REL
        )
    }

    /// Turns the entity-escaped url text back into a url and re-encodes it for
    /// a double-quoted attribute, with every `"` percent-encoded.
    pub fn href(url: &str) -> String {
        let raw = html_escape::decode_html_entities(url);
        if Self::has_blocked_scheme(&raw) {
            log::debug!("neutralising link with script scheme: {raw}");
            return Self::BLOCKED_HREF.to_string();
        }
        let quoted = raw.replace('"', Self::QUOTE_ENCODED);
        html_escape::encode_double_quoted_attribute(&quoted).into_owned()
    }

    fn has_blocked_scheme(url: &str) -> bool {
        // Browsers skip whitespace and control characters inside the scheme.
        let compact = url
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase();
        Self::BLOCKED_SCHEMES
            .iter()
            .any(|scheme| compact.starts_with(scheme))
    }
}
