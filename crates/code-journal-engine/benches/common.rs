#[allow(dead_code)]
pub fn generate_journal_entry(sections: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and a [link](https://example.com/a?b=1&c=2).\nSecond line of the same paragraph.\n\n- Bullet point\n  - Flat item\n- Another item\n1. First\n2. Second\n\n```rust\nfn example() {\n    println!(\"<Hello>\");\n}\n```\n\n";
    base.repeat(sections)
}

/// Long delimiter runs that never close
#[allow(dead_code)]
pub fn generate_unbalanced_delimiters(len: usize) -> String {
    let mut content = String::new();
    content.push_str(&"*".repeat(len));
    content.push('\n');
    content.push_str(&"[".repeat(len));
    content.push('\n');
    content.push_str(&"```\n".repeat(len));
    content
}
