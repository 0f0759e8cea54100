//! String and character literal scanning.

use crate::error::LexErrorKind;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a string literal with the cursor on the opening delimiter.
    ///
    /// Characters accumulate into the scratch buffer until the same
    /// delimiter reappears. String literals may not span lines: a newline
    /// is fatal, and so is end of input. The emitted token owns its text;
    /// the delimiter character rides along for the trace output.
    pub(super) fn lex_string(&mut self) -> crate::LexResult<Token> {
        let pos = self.token_start;
        let delim = self.cursor.current_char();
        self.scratch.clear();

        loop {
            self.cursor.advance();
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::EofInString));
            }
            let c = self.cursor.current_char();
            if c == '\n' {
                return Err(self.error(LexErrorKind::EolInString));
            }
            if c == delim {
                break;
            }
            self.scratch.push(c);
        }

        self.cursor.advance();
        Ok(Token::string(delim, self.scratch.clone(), pos))
    }

    /// Scans a character literal with the cursor on the opening quote.
    ///
    /// The literal's value is the character's numeric code; character and
    /// integer literals share one token kind. Only `\n` (10) and `\\` (92)
    /// are recognized escapes. Exactly one character must sit between the
    /// quotes: an immediate closing quote is an empty constant, and a
    /// missing closing quote is a multi-character constant.
    pub(super) fn lex_char(&mut self) -> crate::LexResult<Token> {
        let pos = self.token_start;
        self.cursor.advance();

        if self.cursor.current_char() == '\'' {
            return Err(self.error(LexErrorKind::EmptyCharConstant));
        }

        let value = if self.cursor.current_char() == '\\' {
            self.cursor.advance();
            match self.cursor.current_char() {
                'n' => 10,
                '\\' => 92,
                other => return Err(self.error(LexErrorKind::UnknownEscape(other))),
            }
        } else {
            self.cursor.current_char() as i64
        };

        self.cursor.advance();
        if !self.cursor.match_char('\'') {
            return Err(self.error(LexErrorKind::MultiCharConstant));
        }
        Ok(Token::int(value, pos))
    }
}
