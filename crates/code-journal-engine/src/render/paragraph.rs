use std::sync::LazyLock;

use regex::Regex;

static BLOCK_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid block break regex"));

/// Block-level containers the line pass can produce: headings, code, lists.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(?:h[1-6]|pre|ul|ol)[\s>]").expect("valid block tag regex")
});

pub const LINE_BREAK: &str = "<br>";

/// Splits transformed text into blocks on runs of blank lines.
///
/// A block that already starts with a block-level container is kept as is;
/// any other block becomes a paragraph with its inner line feeds turned into
/// explicit breaks. Empty blocks are dropped.
pub fn assemble(text: &str) -> Vec<String> {
    BLOCK_BREAK
        .split(text)
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            if is_block_html(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.replace('\n', LINE_BREAK))
            }
        })
        .collect()
}

fn is_block_html(block: &str) -> bool {
    BLOCK_TAG.is_match(block.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line_paragraph() {
        assert_eq!(assemble("hello"), vec!["<p>hello</p>"]);
    }

    #[test]
    fn soft_breaks_become_br() {
        assert_eq!(
            assemble("line one\nline two"),
            vec!["<p>line one<br>line two</p>"]
        );
    }

    #[test]
    fn blank_runs_split_blocks() {
        assert_eq!(assemble("a\n\n\n\nb"), vec!["<p>a</p>", "<p>b</p>"]);
    }

    #[test]
    fn block_html_kept() {
        assert_eq!(
            assemble("<h2>T</h2>\n\n<ul>\n<li>x</li>\n</ul>"),
            vec!["<h2>T</h2>", "<ul>\n<li>x</li>\n</ul>"]
        );
    }

    #[test]
    fn inline_html_start_is_wrapped() {
        assert_eq!(
            assemble("<strong>b</strong> text"),
            vec!["<p><strong>b</strong> text</p>"]
        );
    }

    #[test]
    fn heading_followed_by_text_in_same_block_is_kept() {
        assert_eq!(assemble("<h1>T</h1>\nmore"), vec!["<h1>T</h1>\nmore"]);
    }

    #[test]
    fn edge_line_feeds_and_empty_blocks_dropped() {
        assert_eq!(assemble("\na\n\n\n"), vec!["<p>a</p>"]);
        assert!(assemble("").is_empty());
    }
}
