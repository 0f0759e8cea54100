//! bmc-lex - Lexical Analyzer for the B-Minor language
//!
//! This crate provides the complete scanner for B-Minor. It transforms
//! source code into a stream of classified tokens; parsing and everything
//! after it live elsewhere. Scanning is fatal on the first malformed
//! token: each operation returns either a token or a [`LexError`], and
//! there is no recovery mode.
//!
//! # Example Usage
//!
//! ```
//! use bmc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("count = count + 1;");
//!
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Ident);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - The scanner and its sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Fatal lexical error types
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! The fifteen reserved words: `array`, `boolean`, `char`, `else`,
//! `false`, `for`, `function`, `if`, `integer`, `print`, `return`,
//! `string`, `true`, `void`, `while`.
//!
//! ## Identifiers
//!
//! Pattern `[a-zA-Z_][a-zA-Z0-9_]*`, minus the reserved words.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `017` (leading zero is octal)
//! - **Character**: `'a'`, `'\n'`, `'\\'` - scanned as integer literals
//!   carrying the character's code
//! - **String**: `"hello"` - single-line only
//!
//! ## Operators
//!
//! `^ * / % + - ++ -- = == != < <= > >= ! && ||`. The doubled forms are
//! single tokens; a lone `&` or `|` is a lexical error.
//!
//! ## Delimiters
//!
//! `( ) { } [ ] : ; ,`
//!
//! ## Special
//!
//! End of input, emitted exactly once at the end of a well-formed stream
//! (and idempotently re-emitted if asked again).

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::{tokenize, Lexer};
pub use token::{keyword_from_ident, Payload, Token, TokenKind};

#[cfg(test)]
mod edge_cases;
