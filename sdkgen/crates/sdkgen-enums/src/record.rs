//! Per-enum records accumulated while scanning the registry.

use sdkgen_util::define_idx;

use crate::width::Width;

define_idx!(
    /// Id of an enum display name in the type-name table
    EnumNameId
);

define_idx!(
    /// Id of a sanitized member name in the member-name table shared by all enums
    MemberNameId
);

/// Everything known about one enumerated type
///
/// `usage_found` and `width_initialized` only ever go from `false` to `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EnumRecord {
    /// Unset while the enum is only known through a struct field
    pub name: Option<EnumNameId>,
    pub width: Width,
    /// A struct field proved the storage width
    pub usage_found: bool,
    pub width_initialized: bool,
    /// In declaration order
    pub members: Vec<MemberRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MemberRecord {
    pub name: MemberNameId,
    /// Declared value reinterpreted as unsigned
    pub value: u64,
    /// 0 emits the base name, `n > 0` emits `base_{n-1}`
    pub collision_ordinal: u32,
}
