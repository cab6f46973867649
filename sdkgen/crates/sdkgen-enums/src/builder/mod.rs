//! Registry scanner and the two record resolvers.
//!
//! The builder owns all mutable state of a table build: the sparse record
//! store, both name tables and the reserved-word set. Nothing escapes until
//! [`EnumTableBuilder::scan`] hands the finished, immutable [`EnumTable`] back.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use sdkgen_reflect::{EnumProperty, EnumView, Property, RegistryIndex, StructView, TypeRegistry};
use sdkgen_util::NameTable;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::config::EnumTableConfig;
use crate::ident;
use crate::record::{EnumNameId, EnumRecord, MemberNameId, MemberRecord};
use crate::table::EnumTable;
use crate::width::Width;

/// Counters collected during a table build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Structured types visited
    pub structs_scanned: usize,
    /// Enum-typed properties found on those structs
    pub enum_properties_seen: usize,
    /// Properties that fixed an enum's width
    pub usages_recorded: usize,
    /// Properties without enough reflection data to act on
    pub usages_skipped: usize,
    /// Enumerated types declared
    pub enums_declared: usize,
    /// Members resolved across all enums
    pub members_resolved: usize,
    /// Members emitted with a collision suffix
    pub members_renamed: usize,
}

pub(crate) struct EnumTableBuilder<'c> {
    config: &'c EnumTableConfig,
    records: IndexMap<RegistryIndex, EnumRecord, FxBuildHasher>,
    enum_names: NameTable<EnumNameId>,
    member_names: NameTable<MemberNameId>,
    reserved: FxHashSet<MemberNameId>,
    stats: BuildStats,
}

impl<'c> EnumTableBuilder<'c> {
    /// Create a builder with the reserved words already seeded
    pub fn new(config: &'c EnumTableConfig) -> Self {
        let mut builder = Self {
            config,
            records: IndexMap::with_capacity_and_hasher(config.capacity_hint, FxBuildHasher),
            enum_names: NameTable::with_capacity(config.capacity_hint),
            member_names: NameTable::with_capacity(config.capacity_hint),
            reserved: FxHashSet::default(),
            stats: BuildStats::default(),
        };
        builder.seed_reserved_words();
        builder
    }

    /// Reserved words are interned before any member, so a member sanitizing
    /// to one never sees itself as newly inserted.
    fn seed_reserved_words(&mut self) {
        for word in &self.config.reserved_words {
            let (id, _) = self.member_names.find_or_insert(word);
            self.reserved.insert(id);
        }
    }

    /// Visit every descriptor once, in registry order, and finish the table
    pub fn scan<R: TypeRegistry + ?Sized>(mut self, registry: &R) -> EnumTable {
        for desc in registry.descriptors() {
            if let Some(view) = desc.as_struct() {
                self.visit_struct(view);
            } else if let Some(view) = desc.as_enum() {
                self.resolve_declaration(view);
            }
        }
        self.finish()
    }

    fn visit_struct(&mut self, view: StructView<'_>) {
        self.stats.structs_scanned += 1;
        for property in view.properties() {
            if let Some(enum_property) = property.as_enum_property() {
                self.resolve_usage(view, property, enum_property);
            }
        }
    }

    /// Record the width a struct field actually stores an enum in
    ///
    /// The width is assigned even when the record's width was already
    /// inferred; inference never runs for a record with usage evidence.
    fn resolve_usage(&mut self, owner: StructView<'_>, property: &Property, data: &EnumProperty) {
        self.stats.enum_properties_seen += 1;

        let Some(enum_index) = data.enum_ref else {
            if data.underlying.is_some() {
                debug!(
                    owner = owner.name(),
                    property = %property.name,
                    "enum property without enum reference, no record to update"
                );
            }
            self.stats.usages_skipped += 1;
            return;
        };

        let width = Width::from_bytes(property.size)
            .or_else(|| data.underlying.and_then(|u| Width::from_bytes(u.size)))
            .unwrap_or_default();

        let record = self.record_mut(enum_index);
        record.usage_found = true;
        record.width_initialized = true;
        record.width = width;
        self.stats.usages_recorded += 1;

        trace!(
            index = %enum_index,
            owner = owner.name(),
            property = %property.name,
            %width,
            "enum width from usage"
        );
    }

    fn resolve_declaration(&mut self, view: EnumView<'_>) {
        let index = view.index();
        let display_name = view.prefixed_name();
        let (name_id, _) = self.enum_names.find_or_insert(&display_name);

        let record = self.records.entry(index).or_default();
        record.name = Some(name_id);

        // Emitted names of this record so far, for the final uniqueness check
        let mut emitted: FxHashSet<String> = record
            .members
            .iter()
            .map(|m| ident::disambiguate(&self.member_names[m.name], m.collision_ordinal).into_owned())
            .collect();

        let mut max_value = 0u64;
        let mut saw_negative = false;

        for entry in view.members() {
            let value = entry.value as u64;
            saw_negative |= entry.value < 0;
            if !self.config.is_bound_marker(&entry.name) {
                max_value = max_value.max(value);
            }

            let base = ident::make_valid(ident::strip_scope(&entry.name));
            let (name, inserted) = self.member_names.find_or_insert(&base);

            let mut collision_ordinal = if inserted {
                0
            } else {
                let previous = record
                    .members
                    .iter()
                    .filter(|m| m.name == name)
                    .map(|m| m.collision_ordinal)
                    .max();
                match previous {
                    Some(ordinal) => ordinal + 1,
                    None if self.reserved.contains(&name) => 1,
                    None => 0,
                }
            };

            // A literal `A_0` next to a disambiguated `A` still has to differ
            while !emitted.insert(ident::disambiguate(&base, collision_ordinal).into_owned()) {
                collision_ordinal += 1;
            }

            if collision_ordinal > 0 {
                self.stats.members_renamed += 1;
            }
            record.members.push(MemberRecord {
                name,
                value,
                collision_ordinal,
            });
        }

        if saw_negative {
            warn!(
                index = %index,
                name = %display_name,
                "enum declares negative values, width inferred from their unsigned bit pattern"
            );
        }

        if !record.usage_found && !record.width_initialized {
            record.width = Width::infer(record.width, max_value);
            record.width_initialized = true;
        }

        self.stats.enums_declared += 1;
        self.stats.members_resolved += view.members().len();

        debug!(
            index = %index,
            name = %display_name,
            members = view.members().len(),
            width = %record.width,
            usage_found = record.usage_found,
            "resolved enum declaration"
        );
    }

    /// Fetch the record for `index`, creating it on first sight
    fn record_mut(&mut self, index: RegistryIndex) -> &mut EnumRecord {
        self.records.entry(index).or_default()
    }

    fn finish(mut self) -> EnumTable {
        // Records are created in scan order; readers walk them by index
        self.records.sort_keys();
        info!(
            enums = self.stats.enums_declared,
            members = self.stats.members_resolved,
            renamed = self.stats.members_renamed,
            usages = self.stats.usages_recorded,
            skipped = self.stats.usages_skipped,
            member_names = self.member_names.len(),
            "enum table built"
        );
        EnumTable::new(
            self.records,
            self.enum_names,
            self.member_names,
            self.reserved,
            self.stats,
        )
    }
}
