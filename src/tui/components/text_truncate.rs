//! Text truncation helpers for fixed-height terminal views.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates output to a maximum number of lines.
///
/// When `max_height` is non-zero and the output exceeds that number of lines,
/// the content is truncated and an ellipsis line is appended. The final output
/// contains at most `max_height` lines.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 || output.lines().count() <= max_height {
        return;
    }

    let lines_to_keep = max_height.saturating_sub(1);
    let truncate_at = if lines_to_keep == 0 {
        Some(0)
    } else {
        nth_newline_position(output, lines_to_keep - 1).map(|pos| pos + 1)
    };

    if let Some(pos) = truncate_at {
        output.truncate(pos);
        output.push_str("...\n");
    }
}

/// Finds the byte index of the nth newline character in a string (0-indexed).
fn nth_newline_position(s: &str, n: usize) -> Option<usize> {
    s.char_indices()
        .filter(|&(_, ch)| ch == '\n')
        .nth(n)
        .map(|(i, _)| i)
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Width is measured in terminal columns, not Unicode scalar count, so wide
/// characters count double. Widths of three or fewer degrade to dots.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_to_height_keeps_short_output() {
        let mut output = String::from("one\ntwo\n");
        truncate_to_height(&mut output, 3);
        assert_eq!(output, "one\ntwo\n");
    }

    #[test]
    fn truncate_to_height_adds_ellipsis() {
        let mut output = String::from("one\ntwo\nthree\n");
        truncate_to_height(&mut output, 2);
        assert_eq!(output, "one\n...\n");
    }

    #[test]
    fn truncate_to_height_skips_zero_height() {
        let mut output = String::from("one\ntwo\n");
        truncate_to_height(&mut output, 0);
        assert_eq!(output, "one\ntwo\n");
    }

    #[test]
    fn display_width_truncation_keeps_short_text() {
        assert_eq!(truncate_to_display_width_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn display_width_truncation_handles_small_widths() {
        assert_eq!(truncate_to_display_width_with_ellipsis("abcdef", 0), "");
        assert_eq!(truncate_to_display_width_with_ellipsis("abcdef", 2), "..");
        assert_eq!(truncate_to_display_width_with_ellipsis("abcdef", 3), "...");
    }

    #[test]
    fn display_width_truncation_respects_wide_characters() {
        assert_eq!(
            truncate_to_display_width_with_ellipsis("你好世界", 5),
            "你..."
        );
    }
}
