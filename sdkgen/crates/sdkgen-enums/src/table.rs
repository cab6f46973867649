//! Finished enum table and its read-only views.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use sdkgen_reflect::{RegistryIndex, TypeRegistry};
use sdkgen_util::{InternerStats, NameTable};

use crate::builder::{BuildStats, EnumTableBuilder};
use crate::config::EnumTableConfig;
use crate::ident;
use crate::record::{EnumNameId, EnumRecord, MemberNameId, MemberRecord};
use crate::width::Width;

/// Collision-resolved enum metadata, keyed by registry index
///
/// Immutable once built; share it freely between readers.
#[derive(Debug)]
pub struct EnumTable {
    records: IndexMap<RegistryIndex, EnumRecord, FxBuildHasher>,
    enum_names: NameTable<EnumNameId>,
    member_names: NameTable<MemberNameId>,
    reserved: FxHashSet<MemberNameId>,
    stats: BuildStats,
}

impl EnumTable {
    pub(crate) fn new(
        records: IndexMap<RegistryIndex, EnumRecord, FxBuildHasher>,
        enum_names: NameTable<EnumNameId>,
        member_names: NameTable<MemberNameId>,
        reserved: FxHashSet<MemberNameId>,
        stats: BuildStats,
    ) -> Self {
        Self {
            records,
            enum_names,
            member_names,
            reserved,
            stats,
        }
    }

    /// Build a table in one shot, outside of an [`EnumManager`](crate::EnumManager)
    pub fn build<R: TypeRegistry + ?Sized>(registry: &R, config: &EnumTableConfig) -> Self {
        EnumTableBuilder::new(config).scan(registry)
    }

    /// Enum info for the registry object at `index`
    pub fn get(&self, index: RegistryIndex) -> Option<EnumInfoHandle<'_>> {
        self.records
            .get(&index)
            .map(|record| EnumInfoHandle { table: self, record })
    }

    /// All records in registry-index order
    pub fn iter(&self) -> impl Iterator<Item = (RegistryIndex, EnumInfoHandle<'_>)> + '_ {
        self.records
            .iter()
            .map(move |(index, record)| (*index, EnumInfoHandle { table: self, record }))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Whether `text` is one of the reserved member names
    pub fn is_reserved(&self, text: &str) -> bool {
        self.member_names
            .find(text)
            .is_some_and(|id| self.reserved.contains(&id))
    }

    pub fn enum_name_stats(&self) -> InternerStats {
        self.enum_names.stats()
    }

    pub fn member_name_stats(&self) -> InternerStats {
        self.member_names.stats()
    }
}

/// Read handle to one enum record
#[derive(Clone, Copy)]
pub struct EnumInfoHandle<'a> {
    table: &'a EnumTable,
    record: &'a EnumRecord,
}

impl<'a> EnumInfoHandle<'a> {
    pub fn underlying_width(&self) -> Width {
        self.record.width
    }

    /// Display name, or `None` if the enum was only seen through a struct field
    pub fn name(&self) -> Option<&'a str> {
        self.record.name.map(|id| &self.table.enum_names[id])
    }

    /// Whether a struct field determined the width
    pub fn usage_found(&self) -> bool {
        self.record.usage_found
    }

    pub fn member_count(&self) -> usize {
        self.record.members.len()
    }

    /// Members in declaration order
    ///
    /// Every call starts a fresh pass over the same members.
    pub fn members(&self) -> MemberIter<'a> {
        MemberIter {
            names: &self.table.member_names,
            inner: self.record.members.iter(),
        }
    }
}

impl fmt::Debug for EnumInfoHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfoHandle")
            .field("name", &self.name())
            .field("width", &self.record.width)
            .field("usage_found", &self.record.usage_found)
            .field("members", &self.members().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over the members of one enum
#[derive(Clone)]
pub struct MemberIter<'a> {
    names: &'a NameTable<MemberNameId>,
    inner: slice::Iter<'a, MemberRecord>,
}

impl<'a> MemberIter<'a> {
    fn view(&self, record: &MemberRecord) -> MemberView<'a> {
        MemberView {
            base: &self.names[record.name],
            value: record.value,
            collision_ordinal: record.collision_ordinal,
        }
    }
}

impl<'a> Iterator for MemberIter<'a> {
    type Item = MemberView<'a>;

    fn next(&mut self) -> Option<MemberView<'a>> {
        let record = self.inner.next()?;
        Some(self.view(record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for MemberIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let record = self.inner.next_back()?;
        Some(self.view(record))
    }
}

impl ExactSizeIterator for MemberIter<'_> {}
impl FusedIterator for MemberIter<'_> {}

/// One enum member as the emitter sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberView<'a> {
    base: &'a str,
    value: u64,
    collision_ordinal: u32,
}

impl<'a> MemberView<'a> {
    /// Sanitized name shared by every colliding member
    pub fn base_name(&self) -> &'a str {
        self.base
    }

    pub fn collision_ordinal(&self) -> u32 {
        self.collision_ordinal
    }

    /// Declared value, reinterpreted as unsigned
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Declared value as the runtime reported it
    pub fn signed_value(&self) -> i64 {
        self.value as i64
    }

    /// Name unique within the member's enum
    pub fn unique_name(&self) -> Cow<'a, str> {
        ident::disambiguate(self.base, self.collision_ordinal)
    }
}

impl fmt::Display for MemberView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unique_name())
    }
}
