//! Source location tracking.
//!
//! This module provides [`Pos`], the line/column pair attached to every
//! token and every diagnostic the front end produces.

use std::fmt;

/// A source position.
///
/// Lines are 1-based. Columns count characters consumed since the start of
/// the current line: the first character of a line is column 1, and a
/// newline itself reports as column 0 of the line it opens. End of input
/// sits one column past the last character.
///
/// A `Pos` is captured before a token's first character is consumed and is
/// never mutated afterwards.
///
/// # Examples
///
/// ```
/// use bmc_util::Pos;
///
/// let pos = Pos::new(3, 14);
/// assert_eq!(pos.line, 3);
/// assert_eq!(format!("{}", pos), "(3, 14)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based at line starts, see type docs).
    pub column: u32,
}

impl Pos {
    /// Position of the start of input.
    pub const START: Pos = Pos { line: 1, column: 0 };

    /// Creates a position from a line/column pair.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_diagnostic_format() {
        assert_eq!(Pos::new(12, 7).to_string(), "(12, 7)");
    }

    #[test]
    fn start_is_line_one() {
        assert_eq!(Pos::START.line, 1);
        assert_eq!(Pos::START.column, 0);
    }
}
