use super::blocks::kinds::CodeFence;

/// A piece of the escaped document after fenced code has been lifted out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A finished `<pre><code>` block. Raw zone: no later pass touches it.
    Code(String),
    /// Lines still to go through the line and inline passes.
    Text(String),
}

/// Splits escaped text into code and text segments, left to right.
///
/// An opener pairs with the first closing line after it. An opener with no
/// closer before the end of input stays in the text as an ordinary line.
pub fn extract_fences(text: &str) -> Vec<Segment> {
    let lines: Vec<&str> = text.split('\n').collect();

    // next_close[i]: first closing line at index >= i
    let mut next_close: Vec<Option<usize>> = vec![None; lines.len() + 1];
    for i in (0..lines.len()).rev() {
        next_close[i] = if CodeFence::closes(lines[i]) {
            Some(i)
        } else {
            next_close[i + 1]
        };
    }

    let mut segments = vec![];
    let mut pending: Vec<&str> = vec![];
    let mut i = 0;

    while i < lines.len() {
        if let Some(open) = CodeFence::open(lines[i]) {
            match next_close[i + 1] {
                Some(close) => {
                    flush_text(&mut segments, &mut pending);
                    let body = lines[i + 1..close].join("\n");
                    segments.push(Segment::Code(CodeFence::to_html(open.lang, &body)));
                    i = close + 1;
                    continue;
                }
                None => log::debug!("unterminated code fence on line {}", i + 1),
            }
        }
        pending.push(lines[i]);
        i += 1;
    }

    flush_text(&mut segments, &mut pending);
    segments
}

fn flush_text(segments: &mut Vec<Segment>, pending: &mut Vec<&str>) {
    if !pending.is_empty() {
        segments.push(Segment::Text(pending.join("\n")));
        pending.clear();
    }
}
