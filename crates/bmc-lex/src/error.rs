//! Lexical error types.
//!
//! Every scanner either returns a token or one of these errors; there is no
//! recovery mode and no partial token alongside an error. The position is
//! the one captured before the offending characters were consumed.

use bmc_util::Pos;
use thiserror::Error;

/// The kinds of fatal lexical errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// `''` — a character constant with nothing in it.
    #[error("empty character constant")]
    EmptyCharConstant,

    /// A backslash escape other than `\n` or `\\` in a character constant.
    #[error("unknown escape sequence \\{0}")]
    UnknownEscape(char),

    /// A character constant missing its closing quote.
    #[error("multi-character constant")]
    MultiCharConstant,

    /// End of input inside a `/* ... */` comment.
    #[error("end-of-file in comment")]
    UnterminatedComment,

    /// A newline inside a string literal; strings may not span lines.
    #[error("end-of-line in string")]
    EolInString,

    /// End of input inside a string literal.
    #[error("end-of-file in string")]
    EofInString,

    /// A token that starts with a digit but is not entirely digits, or a
    /// digit that does not fit the detected base.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// An integer literal beyond the maximum representable value.
    #[error("number exceeds maximum value")]
    NumberOverflow,

    /// A character no scanner recognizes, including a lone `&` or `|`.
    #[error("unrecognized character '{0}'")]
    UnrecognizedChar(char),

    /// The identifier table reached its distinct-spelling capacity.
    /// Raised by the token consumer, not by the scanners.
    #[error("identifier table full ({0} distinct identifiers)")]
    SymbolTableOverflow(usize),
}

/// A fatal lexical error with the position it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Position captured before the offending characters were consumed.
    pub pos: Pos,
}

impl LexError {
    /// Pairs an error kind with its position.
    pub fn new(kind: LexErrorKind, pos: Pos) -> Self {
        Self { kind, pos }
    }
}

/// Result type alias for scanning operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
