//! Name table implementation backed by an insertion-ordered hash set.
//!
//! Ids are positions in insertion order, so they are dense, stable for the
//! lifetime of the table, and resolve back to text with a single index.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use super::InternerStats;
use crate::idx::Idx;

/// Insertion-ordered string interner keyed by a typed id
///
/// Entries are never removed. The table is built single-threaded and, once
/// its owner stops mutating it, may be shared for concurrent reads.
pub struct NameTable<I> {
    /// Distinct texts in insertion order; the position is the id
    set: IndexSet<Box<str>, FxBuildHasher>,
    hits: usize,
    misses: usize,
    _marker: PhantomData<fn(&I)>,
}

impl<I: Idx> NameTable<I> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with room for `capacity` distinct texts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: IndexSet::with_capacity_and_hasher(capacity, FxBuildHasher),
            hits: 0,
            misses: 0,
            _marker: PhantomData,
        }
    }

    /// Look `text` up, inserting it when absent
    ///
    /// Returns the id of the entry and `true` iff this call created it.
    pub fn find_or_insert(&mut self, text: &str) -> (I, bool) {
        if let Some(index) = self.set.get_index_of(text) {
            self.hits += 1;
            return (I::from_usize(index), false);
        }

        self.misses += 1;
        let (index, _) = self.set.insert_full(Box::from(text));
        (I::from_usize(index), true)
    }

    /// Look `text` up without inserting it
    pub fn find(&self, text: &str) -> Option<I> {
        self.set.get_index_of(text).map(I::from_usize)
    }

    /// Resolve an id back to its text
    pub fn get(&self, id: I) -> Option<&str> {
        self.set.get_index(id.index()).map(|text| &**text)
    }

    /// Number of distinct texts
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true if nothing was interned yet
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterate over `(id, text)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (I, &str)> {
        self.set
            .iter()
            .enumerate()
            .map(|(index, text)| (I::from_usize(index), &**text))
    }

    /// Lookup statistics gathered since construction
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.set.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl<I: Idx> Default for NameTable<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Idx> Index<I> for NameTable<I> {
    type Output = str;

    /// # Panics
    ///
    /// Panics if `id` was not produced by this table.
    #[inline]
    fn index(&self, id: I) -> &str {
        &self.set[id.index()]
    }
}

impl<I> fmt::Debug for NameTable<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameTable")
            .field("count", &self.set.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
