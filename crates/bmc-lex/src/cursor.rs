//! Character cursor for traversing source code.
//!
//! This module provides the [`Cursor`] struct which maintains position
//! state while iterating through source code characters. It handles UTF-8
//! encoding correctly and tracks line/column information for diagnostics.

use bmc_util::Pos;

/// A cursor for traversing source code character by character.
///
/// The cursor exposes the character currently under it and a single
/// operation, [`advance`](Cursor::advance), that consumes it. No scanner
/// needs more lookahead than "advance and look again". The first character
/// of a line is column 1, a newline reports as column 0 of the line it
/// opens, and end of input sits one column past the last character.
///
/// # Example
///
/// ```
/// use bmc_lex::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'b');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Line number of the current character (1-based).
    line: u32,

    /// Column number of the current character.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        };
        cursor.note_current();
        cursor
    }

    /// Accounts for the character now under the cursor in the line/column
    /// counters. At end of input this still bumps the column once, so the
    /// end-of-input token sits one past the last character.
    fn note_current(&mut self) {
        self.column += 1;
        if self.current_char() == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Returns the character under the cursor.
    ///
    /// Returns `'\0'` at end of input; [`is_at_end`](Cursor::is_at_end) is
    /// the authoritative end check.
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Consumes the current character and moves to the next one.
    ///
    /// Updates line and column tracking. Does nothing if already at end,
    /// which is what makes the end-of-input token idempotent.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.position += self.current_char().len_utf8();
        self.note_current();
    }

    /// Returns true if the cursor has consumed the whole source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// Returns true if the character was matched and consumed.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the position of the current character.
    pub fn pos(&self) -> Pos {
        Pos::new(self.line, self.column)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number.
    pub fn column(&self) -> u32 {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x = 1;");
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.pos(), Pos::new(1, 1));
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_columns_count_from_one() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.column(), 1);
        cursor.advance();
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        assert_eq!(cursor.pos(), Pos::new(1, 1));
        cursor.advance();
        // The newline itself reports as column 0 of the line it opens.
        assert_eq!(cursor.pos(), Pos::new(2, 0));
        cursor.advance();
        assert_eq!(cursor.pos(), Pos::new(2, 1));
    }

    #[test]
    fn test_end_is_one_past_last_char() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.pos(), Pos::new(1, 3));
        // Advancing at end changes nothing.
        cursor.advance();
        assert_eq!(cursor.pos(), Pos::new(1, 3));
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        assert_eq!(cursor.pos(), Pos::new(1, 1));
        cursor.advance();
        assert_eq!(cursor.pos(), Pos::new(1, 1));
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("==");
        assert!(cursor.match_char('='));
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("α1");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), '1');
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_line_tracking_over_multiple_lines() {
        let mut cursor = Cursor::new("a\nbb\nc");
        while !cursor.is_at_end() {
            cursor.advance();
        }
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 2);
    }
}
