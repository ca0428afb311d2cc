use std::fmt;

/// 1-based line/column of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}

/// Project a character offset onto line and column.
///
/// `\n`, `\r\n` and a lone `\r` each count as one line break. Offsets past
/// the end are clamped to the end of the text.
pub fn cursor_position(text: &str, char_offset: usize) -> CursorPosition {
    let mut line = 1;
    let mut column = 1;
    let mut chars = text.chars().take(char_offset).peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }

    CursorPosition { line, column }
}

/// The status-bar label, e.g. `"Ln 2, Col 1"`.
pub fn cursor_label(text: &str, char_offset: usize) -> String {
    cursor_position(text, char_offset).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_text() {
        assert_eq!(cursor_label("ab\ncd", 0), "Ln 1, Col 1");
        assert_eq!(cursor_label("", 0), "Ln 1, Col 1");
    }

    #[test]
    fn test_second_line() {
        assert_eq!(cursor_label("ab\ncd", 3), "Ln 2, Col 1");
        assert_eq!(cursor_label("ab\ncd", 4), "Ln 2, Col 2");
    }

    #[test]
    fn test_end_of_first_line() {
        // Cursor sitting right before the newline
        assert_eq!(cursor_label("ab\ncd", 2), "Ln 1, Col 3");
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(cursor_label("ab\ncd", 100), "Ln 2, Col 3");
    }

    #[test]
    fn test_crlf_is_one_break() {
        assert_eq!(cursor_label("ab\r\ncd", 4), "Ln 2, Col 1");
        assert_eq!(cursor_label("a\rb", 2), "Ln 2, Col 1");
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(cursor_label("héllo", 2), "Ln 1, Col 3");
    }
}
