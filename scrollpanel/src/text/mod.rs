use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Break `s` into display lines no wider than `max_width` cells.
///
/// Explicit newlines always break. Long lines are cut at character
/// boundaries; a wide glyph that does not fit moves to the next line.
/// An empty input still produces one (empty) line, matching how a text
/// box with no characters occupies a row.
pub fn wrap_lines(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for input_line in s.split('\n') {
        let mut current = String::new();
        let mut width = 0;

        for ch in input_line.chars() {
            let w = char_width(ch);
            if width + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                width = 0;
            }
            current.push(ch);
            width += w;
        }
        lines.push(current);
    }
    lines
}

/// Widest explicit line of `s`, ignoring wrapping.
pub fn max_line_width(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}
