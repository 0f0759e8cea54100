//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, whitespace skipping, and
//! the dispatch on the first character of each token.

use bmc_util::Pos;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};

/// Lexer for B-Minor source code.
///
/// The lexer transforms source text into a stream of classified tokens. A
/// run is fatal on the first malformed token: every call either produces a
/// token or an error, never both, and after an error the run is over.
///
/// # Example
///
/// ```
/// use bmc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("while (1) { }");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::While);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Reusable accumulator for the identifier/number/string currently
    /// being scanned. Rewound (not reallocated) at the start of each scan;
    /// token payloads are cloned out of it.
    pub(super) scratch: String,

    /// Position of the first character of the current token; errors report
    /// this position.
    pub(super) token_start: Pos,

    /// Set once the iterator has yielded the end of the stream.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            scratch: String::new(),
            token_start: Pos::START,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, captures the token's position, then dispatches on
    /// the current character. Comments are consumed silently: the loop
    /// continues scanning in place rather than recursing, so arbitrarily
    /// long comment runs cannot grow the stack.
    ///
    /// At end of input this returns the `Eof` token, and keeps returning it
    /// on further calls without side effects.
    pub fn next_token(&mut self) -> LexResult<Token> {
        loop {
            self.skip_whitespace();
            self.token_start = self.cursor.pos();

            if self.cursor.is_at_end() {
                return Ok(Token::fixed(TokenKind::Eof, self.token_start));
            }

            let token = match self.cursor.current_char() {
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '^' => self.single(TokenKind::Caret),
                '*' => self.single(TokenKind::Star),
                '%' => self.single(TokenKind::Percent),
                ':' => self.single(TokenKind::Colon),
                ';' => self.single(TokenKind::Semicolon),
                ',' => self.single(TokenKind::Comma),
                '/' => match self.slash()? {
                    Some(token) => token,
                    // A comment was consumed; keep scanning in place.
                    None => continue,
                },
                '\'' => self.lex_char()?,
                '+' => self.followed_by('+', TokenKind::PlusPlus, Some(TokenKind::Plus))?,
                '-' => self.followed_by('-', TokenKind::MinusMinus, Some(TokenKind::Minus))?,
                '<' => self.followed_by('=', TokenKind::LtEq, Some(TokenKind::Lt))?,
                '>' => self.followed_by('=', TokenKind::GtEq, Some(TokenKind::Gt))?,
                '=' => self.followed_by('=', TokenKind::EqEq, Some(TokenKind::Eq))?,
                '!' => self.followed_by('=', TokenKind::NotEq, Some(TokenKind::Bang))?,
                // No single-character `&` or `|` exists in the language.
                '&' => self.followed_by('&', TokenKind::AndAnd, None)?,
                '|' => self.followed_by('|', TokenKind::OrOr, None)?,
                '"' => self.lex_string()?,
                _ => self.lex_word()?,
            };
            return Ok(token);
        }
    }

    /// Emits a single-character token and advances past it.
    fn single(&mut self, kind: TokenKind) -> Token {
        let pos = self.token_start;
        self.cursor.advance();
        Token::fixed(kind, pos)
    }

    /// Skips consecutive whitespace characters.
    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }

    /// Builds an error at the current token's start position.
    pub(super) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_start)
    }
}

/// Scans a whole source string into a token vector.
///
/// The vector ends with exactly one `Eof` token. Scanning stops at the
/// first lexical error, which is returned instead.
///
/// # Example
///
/// ```
/// use bmc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 1;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Ident,
///         TokenKind::Eq,
///         TokenKind::IntLit,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let at_end = token.is_eof();
        tokens.push(token);
        if at_end {
            return Ok(tokens);
        }
    }
}

/// Iterate over tokens, ending after `Eof` (which is not yielded) or after
/// the first error.
impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
