//! Combined identifier/integer scanning.
//!
//! B-Minor scans identifiers and numbers with one accumulator: every
//! consecutive alphanumeric-or-underscore character joins the word, and
//! classification happens afterwards.

use crate::error::LexErrorKind;
use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

/// Character class for identifier/number continuation.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans an identifier, keyword, or integer literal.
    ///
    /// Accumulates word characters into the scratch buffer. Zero
    /// accumulated characters mean the current character belongs to no
    /// token at all. A word starting with a digit must be entirely digits
    /// (`12ab` is rejected, not split); anything else is looked up in the
    /// keyword table and otherwise becomes a plain identifier.
    pub(super) fn lex_word(&mut self) -> crate::LexResult<Token> {
        let pos = self.token_start;
        self.scratch.clear();
        let mut all_digits = true;

        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() || !is_word_char(c) {
                break;
            }
            self.scratch.push(c);
            if !c.is_ascii_digit() {
                all_digits = false;
            }
            self.cursor.advance();
        }

        if self.scratch.is_empty() {
            return Err(self.error(LexErrorKind::UnrecognizedChar(
                self.cursor.current_char(),
            )));
        }

        if self.scratch.as_bytes()[0].is_ascii_digit() {
            if !all_digits {
                return Err(self.error(LexErrorKind::InvalidNumber(self.scratch.clone())));
            }
            let value = super::number::parse_int(&self.scratch).map_err(|kind| self.error(kind))?;
            return Ok(Token::int(value, pos));
        }

        match keyword_from_ident(&self.scratch) {
            Some(kind) => Ok(Token::fixed(kind, pos)),
            None => Ok(Token::ident(self.scratch.clone(), pos)),
        }
    }
}
