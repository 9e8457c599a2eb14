/// Collapses `\r\n` and lone `\r` to `\n` and trims surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_endings_collapse() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn crlf_is_one_break_not_two() {
        assert_eq!(normalize("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn outer_whitespace_trimmed() {
        assert_eq!(normalize("\n\n  hello \t\n"), "hello");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize(" \r\n\t "), "");
    }
}
