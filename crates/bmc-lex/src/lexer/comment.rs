//! Division/comment disambiguation.
//!
//! A `/` opens a line comment (`//`), a block comment (`/*`), or is plain
//! division. Comments never produce a token: the scanner consumes them and
//! reports "nothing here" so the dispatch loop continues in place.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Disambiguates `/` with the cursor still on it.
    ///
    /// Returns `Ok(None)` after silently consuming a comment, or the
    /// division token. End of input inside a block comment is fatal, at the
    /// comment's start position.
    pub(super) fn slash(&mut self) -> crate::LexResult<Option<Token>> {
        let pos = self.token_start;
        self.cursor.advance();

        match self.cursor.current_char() {
            // Line comment: consume through and including the newline.
            '/' => {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                self.cursor.match_char('\n');
                Ok(None)
            }
            // Block comment: consume until the first `*/`.
            '*' => {
                self.cursor.advance();
                loop {
                    if self.cursor.is_at_end() {
                        return Err(self.error(LexErrorKind::UnterminatedComment));
                    }
                    if self.cursor.current_char() == '*' {
                        self.cursor.advance();
                        if self.cursor.match_char('/') {
                            return Ok(None);
                        }
                    } else {
                        self.cursor.advance();
                    }
                }
            }
            // Division: the following character stays untouched.
            _ => Ok(Some(Token::fixed(TokenKind::Slash, pos))),
        }
    }
}
