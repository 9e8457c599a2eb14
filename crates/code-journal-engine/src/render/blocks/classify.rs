use super::kinds::{Heading, ListFamily, ListItem};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of the line pass: each line is classified independently
/// without reference to surrounding lines. Fence delimiters never show up
/// here: closed fences were already lifted out, and an unterminated fence
/// line is ordinary [`LineClass::Plain`] text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `#`..`######` heading with the marker and leading space stripped.
    Heading { level: u8, content: &'a str },
    /// A list item of either family, marker stripped.
    ListItem {
        family: ListFamily,
        content: &'a str,
    },
    /// Empty or whitespace-only.
    Blank,
    /// Anything else, passed through untouched.
    Plain(&'a str),
}

/// Classifies individual lines for the block building phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Headings are tried before list items; no line can be both since a
    /// heading must start with `#` at column zero.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, content)) = Heading::parse(line) {
            return LineClass::Heading { level, content };
        }
        if let Some((family, content)) = ListItem::parse(line) {
            return LineClass::ListItem { family, content };
        }
        LineClass::Plain(line)
    }
}
