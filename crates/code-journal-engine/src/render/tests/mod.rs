//! Whole-pipeline tests for `render`.
//!
//! Stage-level behaviour is tested next to each stage; these cases check how
//! the stages compose.

use super::{render, render_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   \r\n\t\n "))]
fn empty_input_renders_nothing(#[case] input: Option<&str>) {
    assert_eq!(render(input), "");
}

#[test]
fn script_tag_is_never_live() {
    let html = render_str("<script>alert(1)</script>");
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[rstest]
#[case("# Title", "<h1>Title</h1>")]
#[case("### Title", "<h3>Title</h3>")]
#[case("###### Title", "<h6>Title</h6>")]
#[case("####### Title", "<p>####### Title</p>")]
#[case("#hashtag", "<p>#hashtag</p>")]
fn headings(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_str(input), expected);
}

#[test]
fn bold_then_italic() {
    assert_eq!(
        render_str("**bold** and *italic*"),
        "<p><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn underscore_forms() {
    assert_eq!(
        render_str("__bold__ and _italic_"),
        "<p><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn list_runs_separated_by_blank_line() {
    assert_eq!(
        render_str("- a\n- b\n\n1. c\n2. d"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<ol>\n<li>c</li>\n<li>d</li>\n</ol>"
    );
}

#[test]
fn family_switch_without_blank_line() {
    assert_eq!(
        render_str("- a\n1. b"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
    );
}

#[test]
fn indented_items_stay_flat() {
    assert_eq!(
        render_str("- a\n  - b\n    * c"),
        "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
    );
}

#[test]
fn fenced_code_passthrough() {
    assert_eq!(
        render_str("```js\nconsole.log(1)\n```"),
        "<pre><code class=\"lang-js\">console.log(1)</code></pre>"
    );
}

#[test]
fn fenced_code_is_not_transformed() {
    assert_eq!(
        render_str("```\n# not a heading\n- not a list\n**not bold**\n\n[x](y)\n```"),
        "<pre><code># not a heading\n- not a list\n**not bold**\n\n[x](y)</code></pre>"
    );
}

#[test]
fn fenced_code_content_is_escaped() {
    assert_eq!(
        render_str("```html\n<b>&</b>\n```"),
        "<pre><code class=\"lang-html\">&lt;b&gt;&amp;&lt;&#x2F;b&gt;</code></pre>"
    );
}

#[test]
fn unterminated_fence_is_a_paragraph() {
    assert_eq!(render_str("```\ncode"), "<p>```<br>code</p>");
}

#[test]
fn link_quote_is_percent_encoded() {
    assert_eq!(
        render_str("[x](http://a.com/\"y)"),
        "<p><a href=\"http://a.com/%22y\" target=\"_blank\" \
         rel=\"noopener noreferrer\">x</a></p>"
    );
}

#[test]
fn link_query_ampersand_is_attribute_encoded() {
    assert_eq!(
        render_str("[q](https://a.com/?a=1&b=2)"),
        "<p><a href=\"https://a.com/?a=1&amp;b=2\" target=\"_blank\" \
         rel=\"noopener noreferrer\">q</a></p>"
    );
}

#[rstest]
#[case("[x](https://a.com/snake_case_name)", "https://a.com/snake_case_name")]
#[case("[x](https://a.com/a*b*c)", "https://a.com/a*b*c")]
#[case("[x](https://a.com/__init__.py)", "https://a.com/__init__.py")]
fn link_urls_keep_delimiter_characters(#[case] input: &str, #[case] href: &str) {
    assert_eq!(
        render_str(input),
        format!(
            "<p><a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">x</a></p>"
        )
    );
}

#[test]
fn label_formatting_next_to_snake_case_url() {
    assert_eq!(
        render_str("[*see* this](https://a.com/my_page_name) and _that_"),
        "<p><a href=\"https://a.com/my_page_name\" target=\"_blank\" \
         rel=\"noopener noreferrer\"><em>see</em> this</a> and <em>that</em></p>"
    );
}

#[rstest]
#[case("***x***", "<p><strong>*x</strong>*</p>")]
#[case("**a_b** c_d", "<p><strong>a_b</strong> c_d</p>")]
fn emphasis_and_strong_never_interleave(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_str(input), expected);
}

#[rstest]
#[case("[x](javascript:alert(1))")]
#[case("[x](JavaScript:void)")]
#[case("[x](data:text/html,hi)")]
fn script_links_are_neutralised(#[case] input: &str) {
    let html = render_str(input);
    assert!(html.contains("href=\"#\""), "{html}");
    assert!(!html.to_ascii_lowercase().contains("href=\"javascript"));
}

#[test]
fn soft_break_inside_paragraph() {
    assert_eq!(
        render_str("line one\nline two"),
        "<p>line one<br>line two</p>"
    );
}

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(
        render_str("first\n\n\nsecond"),
        "<p>first</p>\n<p>second</p>"
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(
        render_str("# T\r\n\r\n- a\r\n- b"),
        render_str("# T\n\n- a\n- b")
    );
}

#[test]
fn inline_formatting_inside_blocks() {
    assert_eq!(
        render_str("## A **bold** move\n\n- *one*\n- [two](u)"),
        "<h2>A <strong>bold</strong> move</h2>\n<ul>\n<li><em>one</em></li>\n\
         <li><a href=\"u\" target=\"_blank\" rel=\"noopener noreferrer\">two</a></li>\n</ul>"
    );
}

#[test]
fn mixed_document() {
    let md = "# Title\n\nSome **bold** text\n\n```rust\nlet x = 1 < 2;\n```\n\n- a\n- b";
    assert_eq!(
        render_str(md),
        "<h1>Title</h1>\n\
         <p>Some <strong>bold</strong> text</p>\n\
         <pre><code class=\"lang-rust\">let x = 1 &lt; 2;</code></pre>\n\
         <ul>\n<li>a</li>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn text_directly_after_fence_is_its_own_block() {
    assert_eq!(
        render_str("```\nx\n```\nafter"),
        "<pre><code>x</code></pre>\n<p>after</p>"
    );
}
