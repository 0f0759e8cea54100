//! Identifier interning.
//!
//! This module provides [`SymbolTable`], which assigns a stable integer id
//! to each distinct identifier spelling in order of first appearance. The
//! table is created empty for a tokenization run, grows monotonically, and
//! is dropped with the run; nothing persists across runs.
//!
//! Ids are 1-based: the first distinct spelling gets id 1. Lookup goes
//! through a hash index over the ordered spelling list, which preserves the
//! observable behavior of a plain linear scan (same ids, same order, same
//! capacity error) while keeping interning O(1).

use rustc_hash::FxHashMap;

use crate::error::{SymbolError, SymbolResult};

/// Maximum number of distinct identifiers a table accepts by default.
pub const MAX_IDENTIFIERS: usize = 1000;

/// A stable, 1-based identity for an interned identifier spelling.
///
/// Equal spellings always map to the same `SymbolId` within one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Returns the raw 1-based id.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered mapping from identifier spelling to [`SymbolId`].
///
/// # Examples
///
/// ```
/// use bmc_util::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// let foo = table.intern("foo").unwrap();
/// let bar = table.intern("bar").unwrap();
/// assert_eq!(foo.get(), 1);
/// assert_eq!(bar.get(), 2);
/// assert_eq!(table.intern("foo").unwrap(), foo);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Spellings in order of first appearance; index i holds id i+1.
    names: Vec<String>,
    /// Exact-match index into `names`.
    index: FxHashMap<String, SymbolId>,
    /// Hard limit on distinct spellings.
    capacity: usize,
}

impl SymbolTable {
    /// Creates an empty table with the default capacity
    /// ([`MAX_IDENTIFIERS`]).
    pub fn new() -> Self {
        Self::with_capacity(MAX_IDENTIFIERS)
    }

    /// Creates an empty table that accepts at most `capacity` distinct
    /// spellings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::new(),
            index: FxHashMap::default(),
            capacity,
        }
    }

    /// Interns a spelling, returning its id.
    ///
    /// A spelling seen before reuses its existing id; a new spelling gets
    /// the next sequential id. Exceeding the table's capacity is a
    /// [`SymbolError::TableFull`] error, never silent truncation.
    pub fn intern(&mut self, name: &str) -> SymbolResult<SymbolId> {
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }
        if self.names.len() >= self.capacity {
            return Err(SymbolError::TableFull {
                capacity: self.capacity,
            });
        }
        let id = SymbolId(self.names.len() as u32 + 1);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Returns the spelling for an id, if the id was issued by this table.
    pub fn resolve(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.0 as usize - 1).map(String::as_str)
    }

    /// Returns the id for a spelling without interning it.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.index.get(name).copied()
    }

    /// Number of distinct spellings interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(id, spelling)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (SymbolId(i as u32 + 1), name.as_str()))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
