//! Lookahead disambiguation for one- and two-character operators.
//!
//! `+ - < > = !` each have a one-character reading and a doubled partner
//! (`++ -- <= >= == !=`); `&` and `|` only exist doubled (`&& ||`).

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the lead character, then peeks for its doubled partner.
    ///
    /// If the next character is `expected`, consumes it and emits `ifyes`.
    /// Otherwise emits `ifno` without consuming anything further. A `None`
    /// fallback means no one-character form exists (`&`, `|`): the
    /// mismatch is an unrecognized-character error, reporting the character
    /// that was found instead of the partner.
    pub(super) fn followed_by(
        &mut self,
        expected: char,
        ifyes: TokenKind,
        ifno: Option<TokenKind>,
    ) -> crate::LexResult<Token> {
        let pos = self.token_start;
        self.cursor.advance();
        if self.cursor.match_char(expected) {
            return Ok(Token::fixed(ifyes, pos));
        }
        match ifno {
            Some(kind) => Ok(Token::fixed(kind, pos)),
            None => Err(self.error(LexErrorKind::UnrecognizedChar(
                self.cursor.current_char(),
            ))),
        }
    }
}
