//! Text fitting helpers for UI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, ending in "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Greedy word wrap by display width. Words wider than the line are hard-split.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        if current.width() + sep + word.width() <= max_width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current.width() + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Top Hat", 20), "Top Hat");
        assert_eq!(truncate_to_width("Classic Fedora", 10), "Classic...");
        assert_eq!(truncate_to_width("Classic Fedora", 2), "..");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("帽子帽子帽子", 7), "帽子...");
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_words("a felt hat with a wide brim", 10);
        assert_eq!(lines, vec!["a felt hat", "with a", "wide brim"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_words("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_line() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
    }
}
