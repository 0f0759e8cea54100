//! Core error types for bmc-util.

use thiserror::Error;

/// Error type for symbol table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The table already holds the maximum number of distinct spellings.
    #[error("symbol table full ({capacity} distinct identifiers)")]
    TableFull {
        /// The capacity that was exhausted.
        capacity: usize,
    },
}

/// Result type alias for symbol table operations.
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
