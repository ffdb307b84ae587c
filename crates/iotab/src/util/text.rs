//! Cursor rendering and horizontal scroll for text input fields.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Render a line of text with a block cursor at `cursor_pos`.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let chars: Vec<char> = display_value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    // Cursor past the end renders as a block on the trailing cell
    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

/// Visible slice of a text value that is wider than its container.
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`.
    pub cursor_pos: usize,
}

/// Keep the cursor visible by centering it when `value` exceeds `max_width`.
///
/// `cursor_pos` and the returned slice are in characters; byte offsets
/// would split multi-byte paths.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos.saturating_sub(input_width / 2);
    let end = (start + input_width).min(chars.len());
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor_pos - start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_short_value_untouched() {
        let view = calculate_scroll("data/tabel.csv", 5, 40);
        assert_eq!(view.display_value, "data/tabel.csv");
        assert_eq!(view.cursor_pos, 5);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let value = "/home/analyst/data/tabel-input-output-2026.xlsx";
        let view = calculate_scroll(value, 40, 20);
        assert!(view.display_value.len() <= 18);
        assert!(view.cursor_pos <= view.display_value.len());
    }

    #[test]
    fn test_scroll_multibyte_value_slices_on_chars() {
        let value = "/données/économie/tabel-input-output-édisi-2026.xlsx";
        let char_len = value.chars().count();

        for cursor in 0..=char_len {
            let view = calculate_scroll(value, cursor, 20);
            assert!(view.display_value.chars().count() <= 18);
            assert!(view.cursor_pos <= view.display_value.chars().count());
        }
    }

    #[test]
    fn test_cursor_at_end_renders_block() {
        let line = render_cursor_line("ab", 2, "");
        assert_eq!(line.spans.len(), 3);
    }
}
