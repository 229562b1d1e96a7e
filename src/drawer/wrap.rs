//! Word wrapping for drawer text.
//!
//! The drawer pre-wraps title and body instead of leaving it to
//! `Paragraph`'s wrap, so that row counts are known exactly: the scroll
//! range, anchor positions and the measured title height all come from
//! the same wrapped rows that get drawn.

use std::ops::Range;

use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrapped rows plus where each source line starts.
#[derive(Debug, Clone, Default)]
pub struct WrappedText {
    pub lines: Vec<Line<'static>>,
    row_starts: Vec<usize>,
}

impl WrappedText {
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    /// First row of source line `line`. Lines past the end map to the
    /// last row.
    pub fn row_of(&self, line: usize) -> usize {
        self.row_starts
            .get(line)
            .copied()
            .unwrap_or_else(|| self.lines.len().saturating_sub(1))
    }

    /// Rows occupied by source line `line`; empty past the end.
    pub fn rows_of(&self, line: usize) -> Range<usize> {
        let Some(&start) = self.row_starts.get(line) else {
            return 0..0;
        };
        let end = self
            .row_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.lines.len());
        start..end
    }
}

/// Wrap every line in `lines` to `width` columns.
pub fn wrap_lines(lines: &[Line<'_>], width: u16) -> WrappedText {
    let mut wrapped = WrappedText::default();
    for line in lines {
        wrapped.row_starts.push(wrapped.lines.len());
        wrapped.lines.extend(wrap_line(line, width));
    }
    wrapped
}

/// Rows `lines` occupy when wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    wrap_lines(lines, width).height()
}

/// Wrap one styled line at word boundaries.
///
/// Words wider than `width` are broken between characters. Whitespace at
/// the start of a continuation row is dropped. An empty line stays one
/// empty row; a zero width yields no rows.
pub fn wrap_line(line: &Line<'_>, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut row_width = 0usize;

    for span in &line.spans {
        let style = span.style;
        for piece in pieces(&span.content) {
            let piece_width = piece.width();

            if piece.starts_with([' ', '\t']) {
                if row_width == 0 && rows.len() > 1 {
                    continue;
                }
                if row_width + piece_width <= width {
                    push(&mut rows, piece.to_string(), style);
                    row_width += piece_width;
                } else {
                    rows.push(Vec::new());
                    row_width = 0;
                }
                continue;
            }

            if row_width + piece_width <= width {
                push(&mut rows, piece.to_string(), style);
                row_width += piece_width;
                continue;
            }

            if row_width > 0 && piece_width <= width {
                rows.push(Vec::new());
                push(&mut rows, piece.to_string(), style);
                row_width = piece_width;
                continue;
            }

            let mut chunk = String::new();
            for c in piece.chars() {
                let c_width = c.width().unwrap_or(0);
                if row_width + c_width > width && row_width > 0 {
                    if !chunk.is_empty() {
                        push(&mut rows, std::mem::take(&mut chunk), style);
                    }
                    rows.push(Vec::new());
                    row_width = 0;
                }
                chunk.push(c);
                row_width += c_width;
            }
            if !chunk.is_empty() {
                push(&mut rows, chunk, style);
            }
        }
    }

    rows.into_iter()
        .map(|spans| Line::from(spans).style(line.style))
        .collect()
}

fn push(rows: &mut [Vec<Span<'static>>], text: String, style: ratatui::style::Style) {
    if let Some(row) = rows.last_mut() {
        row.push(Span::styled(text, style));
    }
}

/// Split into alternating runs of whitespace and non-whitespace.
fn pieces(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_space: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let space = c == ' ' || c == '\t';
        if prev_space.is_some_and(|p| p != space) {
            out.push(&text[start..i]);
            start = i;
        }
        prev_space = Some(space);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Style, Stylize};

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_short_line_unchanged() {
        let rows = wrap_line(&Line::from("hello world"), 20);
        assert_eq!(rows.len(), 1);
        assert_eq!(text_of(&rows[0]), "hello world");
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        let rows = wrap_line(&Line::from("the quick brown fox"), 10);
        let texts: Vec<String> = rows.iter().map(text_of).collect();
        assert_eq!(texts, vec!["the quick ", "brown fox"]);
    }

    #[test]
    fn test_breaks_long_word() {
        let rows = wrap_line(&Line::from("abcdefghij"), 4);
        let texts: Vec<String> = rows.iter().map(text_of).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_keeps_span_styles() {
        let line = Line::from(vec![Span::raw("plain "), "bold words".bold()]);
        let rows = wrap_line(&line, 8);
        let texts: Vec<String> = rows.iter().map(text_of).collect();
        assert_eq!(texts, vec!["plain ", "bold ", "words"]);
        assert_eq!(rows[1].spans[0].style, Style::default().bold());
    }

    #[test]
    fn test_empty_and_zero_width() {
        assert_eq!(wrap_line(&Line::from(""), 10).len(), 1);
        assert!(wrap_line(&Line::from("abc"), 0).is_empty());
    }

    #[test]
    fn test_row_starts() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        let wrapped = wrap_lines(&lines, 4);
        assert_eq!(wrapped.height(), 5);
        assert_eq!(wrapped.row_of(0), 0);
        assert_eq!(wrapped.row_of(1), 3);
        assert_eq!(wrapped.row_of(2), 4);
        assert_eq!(wrapped.row_of(9), 4);
        assert_eq!(wrapped.rows_of(0), 0..3);
        assert_eq!(wrapped.rows_of(2), 4..5);
        assert!(wrapped.rows_of(3).is_empty());
        assert_eq!(wrapped_height(&lines, 20), 3);
    }
}
