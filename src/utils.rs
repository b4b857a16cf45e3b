use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, appending "..." when anything was
/// cut. Width-aware so wide glyphs do not overflow a tile. Callers pass a
/// `max_width` of at least 4.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_truncation_needed() {
        assert_eq!(truncate_to_width("Short", 20), "Short");
    }

    #[test]
    fn test_truncates_long_string() {
        let result = truncate_to_width("This is a very long string", 10);
        assert_eq!(result, "This is...");
        assert!(result.width() <= 10);
    }

    #[test]
    fn test_exact_width_untouched() {
        assert_eq!(truncate_to_width("TenWide!!!", 10), "TenWide!!!");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(truncate_to_width("", 10), "");
    }

    #[test]
    fn test_wide_glyphs_respect_budget() {
        // Each CJK glyph is two cells wide.
        let result = truncate_to_width("単語のカード", 8);
        assert!(result.width() <= 8);
        assert!(result.ends_with("..."));
    }
}
