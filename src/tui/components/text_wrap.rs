//! Word-boundary text wrapping for review bodies.
//!
//! Review text is prose, so wrapping happens at word boundaries. Words longer
//! than the width are hard-wrapped so no output line ever exceeds it.

/// Wraps text to a maximum width, breaking at word boundaries.
///
/// Paragraph breaks (empty lines) are preserved. A `max_width` of zero
/// returns the text unchanged. Width is measured in characters, which is
/// sufficient for the plain prose this crate displays.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }

    text.lines()
        .map(|line| wrap_line(line, max_width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a single line at word boundaries.
fn wrap_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_owned();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > max_width {
            flush_long_word(&mut lines, &mut current, &mut current_width, word, max_width);
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Hard-wraps a word wider than the line, emitting full-width chunks and
/// leaving the remainder as the current line.
fn flush_long_word(
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
    word: &str,
    max_width: usize,
) {
    if !current.is_empty() {
        lines.push(std::mem::take(current));
        *current_width = 0;
    }

    for ch in word.chars() {
        if *current_width >= max_width {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(ch);
        *current_width += 1;
    }
}
