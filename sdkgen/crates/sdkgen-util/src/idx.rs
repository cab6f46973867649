//! Typed indices.
//!
//! Every id space gets its own `u32` newtype through [`define_idx!`], so an id
//! from one table can never be used to look up another by accident.
//!
//! # Example
//!
//! ```
//! use sdkgen_util::define_idx;
//! use sdkgen_util::idx::Idx;
//!
//! define_idx!(SlotId);
//!
//! let slot = SlotId::from_usize(3);
//! assert_eq!(slot, SlotId(3));
//! assert_eq!(slot.index(), 3);
//! ```

/// Trait for types that can be used as indices
///
/// The type must be convertible to and from `usize`.
///
/// # Requirements
///
/// - Must be `Copy` for efficient passing
/// - Must be `Eq + PartialEq` for comparison
/// - `from_usize(i).index() == i` for every representable `i`
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if the usize value is too large to fit
    /// in the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for table lookups
    fn index(self) -> usize;
}

/// Macro to define index types easily
///
/// This macro generates a newtype wrapper around `u32` that implements
/// the [`Idx`] trait, along with common derives for debugging, ordering and
/// hashing. Doc attributes are forwarded to the generated type.
///
/// # Examples
///
/// ```
/// use sdkgen_util::define_idx;
///
/// define_idx!(
///     /// Id of an expression
///     ExprId
/// );
///
/// assert!(ExprId(1) < ExprId(2));
/// ```
#[macro_export]
macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::idx::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "Index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
