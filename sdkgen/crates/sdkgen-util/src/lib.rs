//! sdkgen-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by every sdkgen stage:
//!
//! - [`idx`]: typed `u32` indices and the [`define_idx!`] macro.
//! - [`symbol`]: insertion-ordered string interning with typed ids.
//!
//! ============================================================================
//! TYPED INDICES
//! ============================================================================
//!
//! Registry indices, enum-name ids and member-name ids all live in distinct
//! index spaces. Each gets its own `u32` newtype via [`define_idx!`], so a
//! member-name id can never be used to look up an enum record by accident:
//!
//! ```rust,ignore
//! define_idx!(EnumNameId);
//! define_idx!(MemberNameId);
//!
//! let names: NameTable<MemberNameId> = NameTable::new();
//! names.get(EnumNameId(0)); // Compile error!
//! ```
//!
//! ============================================================================
//! STRING INTERNING
//! ============================================================================
//!
//! Let S be the set of texts seen so far and I: S → ℕ the interning function.
//!
//! Properties:
//! - ∀s₁, s₂ ∈ S: I(s₁) = I(s₂) ⟺ s₁ = s₂  (injective mapping)
//! - I(s) is assigned on first insertion and never changes afterwards
//! - ids are dense: I(S) = {0, 1, ..., |S| - 1}
//!
//! Dense ids mean an interned id doubles as an index into side tables.

pub mod idx;
pub mod symbol;

pub use idx::Idx;
pub use symbol::{InternerStats, NameTable};
