use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal cell width of a string. CJK characters occupy two cells, which
/// matters for the Chinese UI strings.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncates to at most `max_width` terminal cells, appending "..." when
/// anything was cut. Width-aware so Chinese text is not split mid-cell.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(1);
        if width + char_width > budget {
            break;
        }
        result.push(ch);
        width += char_width;
    }

    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("Hello"), 5);
    }

    #[test]
    fn test_display_width_cjk_is_double() {
        assert_eq!(display_width("中文"), 4);
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_long_ascii() {
        let result = truncate_to_width("This is a very long string", 10);
        assert_eq!(result, "This is...");
        assert!(display_width(&result) <= 10);
    }

    #[test]
    fn test_truncate_cjk_respects_cell_width() {
        let result = truncate_to_width("荷兰融入考试准备", 9);
        assert_eq!(result, "荷兰融...");
        assert!(display_width(&result) <= 9);
    }

    #[test]
    fn test_truncate_exact_width_unchanged() {
        assert_eq!(truncate_to_width("1234567890", 10), "1234567890");
    }
}
