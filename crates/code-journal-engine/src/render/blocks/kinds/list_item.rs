use std::sync::LazyLock;

use regex::Regex;

static UNORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*][ \t]+(\S.*)$").expect("valid unordered item regex"));

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.[ \t]+(\S.*)$").expect("valid ordered item regex"));

/// The two list families. A run never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFamily {
    /// `-` or `*` bullets.
    Unordered,
    /// `1.` style numbering.
    Ordered,
}

impl ListFamily {
    /// The container tag name for this family.
    pub fn tag(self) -> &'static str {
        match self {
            ListFamily::Unordered => "ul",
            ListFamily::Ordered => "ol",
        }
    }

    pub fn open_tag(self) -> String {
        format!("<{}>", self.tag())
    }

    pub fn close_tag(self) -> String {
        format!("</{}>", self.tag())
    }
}

/// List item block type. Items are flat: leading indentation is accepted
/// but never produces nesting.
pub struct ListItem;

impl ListItem {
    /// Returns the item's family and its content with the marker stripped.
    pub fn parse(line: &str) -> Option<(ListFamily, &str)> {
        if let Some(caps) = UNORDERED.captures(line) {
            return Some((ListFamily::Unordered, caps.get(1)?.as_str()));
        }
        let caps = ORDERED.captures(line)?;
        Some((ListFamily::Ordered, caps.get(1)?.as_str()))
    }

    pub fn to_html(content: &str) -> String {
        format!("<li>{content}</li>")
    }
}
