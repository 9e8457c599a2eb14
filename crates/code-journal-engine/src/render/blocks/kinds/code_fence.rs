use std::sync::LazyLock;

use regex::Regex;

/// Opening fence: three backticks and an optional language tag, nothing else.
static OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([\w+-]+)?$").expect("valid fence opener regex"));

/// An opening fence line and the language tag it carries, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceOpen<'a> {
    pub lang: Option<&'a str>,
}

/// Fenced code block type with owned delimiter constants.
///
/// Fences are raw zones: the lines between an opener and its closer are
/// emitted verbatim and never reach the line or inline passes.
pub struct CodeFence;

impl CodeFence {
    /// The delimiter that opens and closes a fence.
    pub const TICKS: &'static str = "```";
    /// Prefix of the CSS class carrying the language tag.
    pub const CLASS_PREFIX: &'static str = "lang-";

    /// Recognises an opening fence line. Trailing whitespace is ignored.
    pub fn open(line: &str) -> Option<FenceOpen<'_>> {
        let caps = OPENER.captures(line.trim_end())?;
        Some(FenceOpen {
            lang: caps.get(1).map(|m| m.as_str()),
        })
    }

    /// Whether the line is a closing fence (bare backticks).
    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::TICKS
    }

    /// Wraps already-escaped fence content in a preformatted code container.
    pub fn to_html(lang: Option<&str>, body: &str) -> String {
        match lang {
            Some(lang) => format!(
                "<pre><code class=\"{}{lang}\">{body}</code></pre>",
                Self::CLASS_PREFIX
            ),
            None => format!("<pre><code>{body}</code></pre>"),
        }
    }
}
