//! Symbol module - String interning with typed ids.
//!
//! This module provides [`NameTable`], an insertion-ordered interner that maps
//! each distinct text to a dense id of a caller-chosen index type. The core
//! operation is [`NameTable::find_or_insert`], which also reports whether the
//! text was seen for the first time. Callers use that flag to detect that a
//! name is already taken somewhere in the table's namespace.
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `find_or_insert()` (hit) | O(len) | Hash of the text, no allocation |
//! | `find_or_insert()` (miss) | O(len) | Hash + one boxed copy |
//! | `get()` | O(1) | Direct index into insertion order |
//! | id comparison | O(1) | `u32` comparison |
//!
//! # Examples
//!
//! ```
//! use sdkgen_util::define_idx;
//! use sdkgen_util::symbol::NameTable;
//!
//! define_idx!(NameId);
//!
//! let mut names: NameTable<NameId> = NameTable::new();
//! let (hello, fresh) = names.find_or_insert("hello");
//! assert!(fresh);
//!
//! let (again, fresh) = names.find_or_insert("hello");
//! assert!(!fresh);
//! assert_eq!(hello, again);
//! assert_eq!(names.get(hello), Some("hello"));
//! ```

mod interner;

pub use interner::NameTable;

/// Statistics about a name table for profiling
///
/// # Fields
///
/// * `count` - Number of unique interned strings
/// * `hits` - Number of times an already-interned string was requested
/// * `misses` - Number of times a new string was inserted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Number of lookups that found an existing entry
    pub hits: usize,
    /// Number of lookups that inserted a new entry
    pub misses: usize,
}

impl InternerStats {
    /// Fraction of `find_or_insert` calls that hit an existing entry
    ///
    /// Returns 0.0 when the table was never queried.
    ///
    /// ```
    /// use sdkgen_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats { count: 2, hits: 3, misses: 1 };
    /// assert_eq!(stats.hit_rate(), 0.75);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
