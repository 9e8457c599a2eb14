//! # Markdown Rendering
//!
//! Converts the Markdown subset used by journal entries into an HTML
//! fragment. The result is safe to insert into a page: every character of the
//! source is escaped before any markup is generated, so the only tags in the
//! output are the ones produced here.
//!
//! ## Pipeline
//!
//! 1. **Normalize** (`normalize`): line endings to `\n`, outer whitespace trimmed
//! 2. **Escape** (`escape`): HTML-significant characters to entities
//! 3. **Fences** (`fence`): fenced code lifted out as finished, opaque blocks
//! 4. **Lines** (`blocks`): headings and flat list runs, line by line
//! 5. **Inline** (`inline`): strong, emphasis, then links
//! 6. **Paragraphs** (`paragraph`): blank-line blocks wrapped unless already block HTML
//!
//! Stages 4 to 6 run once per text segment between code blocks; the resulting
//! blocks are joined with `\n`.

pub mod blocks;
pub mod escape;
pub mod fence;
pub mod inline;
pub mod normalize;
pub mod paragraph;

#[cfg(test)]
mod tests;

use blocks::build_blocks;
use fence::{Segment, extract_fences};
use inline::apply_inline;

pub use escape::escape_html;

/// Renders Markdown to an HTML fragment. Absent or empty input yields `""`.
pub fn render(markdown: Option<&str>) -> String {
    match markdown {
        Some(text) if !text.is_empty() => render_str(text),
        _ => String::new(),
    }
}

/// Renders Markdown to an HTML fragment.
pub fn render_str(markdown: &str) -> String {
    let normalized = normalize::normalize(markdown);
    if normalized.is_empty() {
        return String::new();
    }

    let escaped = escape_html(&normalized);
    let mut blocks: Vec<String> = vec![];

    for segment in extract_fences(&escaped) {
        match segment {
            Segment::Code(html) => blocks.push(html),
            Segment::Text(text) => {
                let lines = build_blocks(&text);
                let inline = apply_inline(&lines);
                blocks.extend(paragraph::assemble(&inline));
            }
        }
    }

    log::trace!("rendered {} blocks", blocks.len());
    blocks.join("\n")
}
