//! Cell-accurate text fitting for fixed-width table cells.

use unicode_width::UnicodeWidthChar;

/// Fits text into exactly `width` display cells.
///
/// Wide characters are truncated on cell boundaries; short text is padded
/// with spaces so every cell in a column lines up with the header.
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut used = 0_usize;

    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }
        if used.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    if used < width {
        output.push_str(&" ".repeat(width - used));
    }

    output
}

/// Truncates text to at most `max_len` cells, appending an ellipsis marker
/// when anything was cut.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    let trimmed = text.trim();
    let mut used = 0_usize;
    let mut cut = trimmed.len();
    for (position, ch) in trimmed.char_indices() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > max_len.saturating_sub(3) {
            cut = position;
            break;
        }
        used = used.saturating_add(char_width);
    }

    if cut >= trimmed.len() {
        return trimmed.to_owned();
    }
    let head: String = trimmed
        .char_indices()
        .take_while(|&(position, _)| position < cut)
        .map(|(_, ch)| ch)
        .collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::{fit_cell, truncate_with_ellipsis};

    #[test]
    fn short_text_is_padded_to_the_width() {
        assert_eq!(fit_cell("abc", 6), "abc   ");
    }

    #[test]
    fn long_text_is_cut_to_the_width() {
        assert_eq!(fit_cell("abcdefgh", 4), "abcd");
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert_eq!(fit_cell("abc", 0), "");
    }

    #[test]
    fn wide_characters_stop_at_the_boundary() {
        // Each CJK glyph takes two cells; three do not fit in five.
        assert_eq!(fit_cell("日本語", 5), "日本 ");
    }

    #[test]
    fn ellipsis_marks_truncation() {
        let truncated = truncate_with_ellipsis("a very long description", 10);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 10);
    }

    #[test]
    fn short_text_passes_through_untouched() {
        assert_eq!(truncate_with_ellipsis("short", 20), "short");
    }
}
