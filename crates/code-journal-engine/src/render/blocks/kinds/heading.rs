use std::sync::LazyLock;

use regex::Regex;

/// One to six hashes at column zero, whitespace, then non-blank text.
///
/// Seven or more hashes cannot match: the hash run must be followed by
/// whitespace, not another `#`.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(\S.*)$").expect("valid heading regex"));

/// Heading block type (ATX style only).
pub struct Heading;

impl Heading {
    /// Returns `(level, content)` when the line is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        Some((level, caps.get(2)?.as_str()))
    }

    pub fn to_html(level: u8, content: &str) -> String {
        format!("<h{level}>{content}</h{level}>")
    }
}
