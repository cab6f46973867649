//! Registry traversal and in-memory snapshots.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::{
    Descriptor, DescriptorKind, EnumDesc, EnumEntry, EnumProperty, Property, PropertyKind,
    StructDesc, UnderlyingProperty,
};
use crate::error::{RegistryError, RegistryResult};
use crate::RegistryIndex;

/// Source of runtime type descriptors
///
/// Implementations yield every object exactly once, in registry order.
pub trait TypeRegistry {
    fn descriptors(&self) -> impl Iterator<Item = &Descriptor>;
}

/// Materialized registry snapshot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    objects: Vec<Descriptor>,
}

impl Registry {
    /// Build a snapshot from descriptors, rejecting duplicate indices
    pub fn new(objects: Vec<Descriptor>) -> RegistryResult<Self> {
        let registry = Self { objects };
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a JSON snapshot (`{"objects": [...]}`)
    pub fn from_json_str(json: &str) -> RegistryResult<Self> {
        let registry: Registry = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a JSON snapshot from disk
    pub fn load(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize the snapshot back to pretty JSON
    pub fn to_json_string(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Largest index in the snapshot plus one
    ///
    /// Useful as a capacity hint for stores keyed by registry index.
    pub fn index_bound(&self) -> usize {
        self.objects
            .iter()
            .map(|desc| desc.index.0 as usize + 1)
            .max()
            .unwrap_or(0)
    }

    fn validate(&self) -> RegistryResult<()> {
        let mut seen: FxHashMap<RegistryIndex, &str> = FxHashMap::default();
        for desc in &self.objects {
            if let Some(first) = seen.insert(desc.index, desc.name.as_str()) {
                return Err(RegistryError::DuplicateIndex {
                    index: desc.index,
                    first: first.to_string(),
                    second: desc.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl TypeRegistry for Registry {
    fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.objects.iter()
    }
}

/// Incremental [`Registry`] construction
///
/// Objects receive consecutive indices in insertion order unless placed
/// explicitly with [`RegistryBuilder::at`].
///
/// ```
/// use sdkgen_reflect::{RegistryBuilder, TypeRegistry};
///
/// let mut builder = RegistryBuilder::new();
/// let role = builder.add_enum("ENetRole", [("ENetRole::ROLE_None", 0), ("ENetRole::ROLE_MAX", 4)]);
/// builder.add_struct("Actor").enum_property("Role", 1, Some(role), None);
/// let registry = builder.build().unwrap();
///
/// assert_eq!(registry.descriptors().count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    objects: Vec<Descriptor>,
    next_index: u32,
}

/// Property list of a struct being added to a [`RegistryBuilder`]
pub struct StructBuilder<'a> {
    properties: &'a mut Vec<Property>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the next object at `index`; later objects continue after it
    ///
    /// Indices stop at `u32::MAX`, so adding past it yields a duplicate that
    /// [`build`](RegistryBuilder::build) rejects.
    pub fn at(&mut self, index: u32) -> &mut Self {
        self.next_index = index;
        self
    }

    /// Add an enumerated type
    pub fn add_enum<'n>(
        &mut self,
        name: &str,
        members: impl IntoIterator<Item = (&'n str, i64)>,
    ) -> RegistryIndex {
        let members = members
            .into_iter()
            .map(|(name, value)| EnumEntry {
                name: name.to_string(),
                value,
            })
            .collect();
        self.push(name, DescriptorKind::Enum(EnumDesc { members }))
    }

    /// Add a structured type and return a handle for its properties
    pub fn add_struct(&mut self, name: &str) -> StructBuilder<'_> {
        self.push(name, DescriptorKind::Struct(StructDesc::default()));
        let Some(DescriptorKind::Struct(data)) = self.objects.last_mut().map(|d| &mut d.kind)
        else {
            unreachable!("struct descriptor was just pushed");
        };
        StructBuilder {
            properties: &mut data.properties,
        }
    }

    /// Add an object of no interest to enum resolution
    pub fn add_other(&mut self, name: &str) -> RegistryIndex {
        self.push(name, DescriptorKind::Other)
    }

    pub fn build(self) -> RegistryResult<Registry> {
        Registry::new(self.objects)
    }

    fn push(&mut self, name: &str, kind: DescriptorKind) -> RegistryIndex {
        let index = RegistryIndex(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        self.objects.push(Descriptor {
            index,
            name: name.to_string(),
            kind,
        });
        index
    }
}

impl StructBuilder<'_> {
    /// Add a field storing an enumerated type
    pub fn enum_property(
        &mut self,
        name: &str,
        size: u32,
        enum_ref: Option<RegistryIndex>,
        underlying_size: Option<u32>,
    ) -> &mut Self {
        self.properties.push(Property {
            name: name.to_string(),
            size,
            kind: PropertyKind::Enum(EnumProperty {
                enum_ref,
                underlying: underlying_size.map(|size| UnderlyingProperty { size }),
            }),
        });
        self
    }

    /// Add a field of any other type
    pub fn property(&mut self, name: &str, size: u32) -> &mut Self {
        self.properties.push(Property {
            name: name.to_string(),
            size,
            kind: PropertyKind::Other,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn test_builder_assigns_consecutive_indices() {
        let mut builder = RegistryBuilder::new();
        let a = builder.add_enum("EA", [("EA::X", 0)]);
        let b = builder.add_other("Package");
        let c = builder.add_enum("EC", []);
        assert_eq!((a, b, c), (RegistryIndex(0), RegistryIndex(1), RegistryIndex(2)));
    }

    #[test]
    fn test_builder_explicit_index() {
        let mut builder = RegistryBuilder::new();
        builder.at(100);
        let a = builder.add_enum("EA", []);
        let b = builder.add_enum("EB", []);
        assert_eq!((a, b), (RegistryIndex(100), RegistryIndex(101)));

        let registry = builder.build().unwrap();
        assert_eq!(registry.index_bound(), 102);
    }

    #[test]
    fn test_builder_at_last_index() {
        let mut builder = RegistryBuilder::new();
        let last = builder.at(u32::MAX).add_enum("ELast", []);
        assert_eq!(last, RegistryIndex(u32::MAX));

        let registry = builder.build().unwrap();
        assert_eq!(registry.index_bound(), u32::MAX as usize + 1);
    }

    #[test]
    fn test_builder_past_last_index_is_duplicate() {
        let mut builder = RegistryBuilder::new();
        builder.at(u32::MAX).add_enum("ELast", []);
        builder.add_enum("EOverflow", []);

        let err = builder.build().unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateIndex { .. }));
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.add_enum("EFirst", []);
        builder.at(0).add_enum("ESecond", []);

        let err = builder.build().unwrap_err();
        match err {
            RegistryError::DuplicateIndex { index, first, second } => {
                assert_eq!(index, RegistryIndex(0));
                assert_eq!(first, "EFirst");
                assert_eq!(second, "ESecond");
            }
            other => panic!("Expected DuplicateIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_descriptors_in_registry_order() {
        let mut builder = RegistryBuilder::new();
        builder.at(5).add_other("Five");
        builder.at(1).add_other("One");
        let registry = builder.build().unwrap();

        let names: Vec<_> = registry.descriptors().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Five", "One"]);
    }

    #[test]
    fn test_struct_builder_properties() {
        let mut builder = RegistryBuilder::new();
        let role = builder.add_enum("ENetRole", []);
        builder
            .add_struct("Actor")
            .property("Health", 4)
            .enum_property("Role", 1, Some(role), Some(1));
        let registry = builder.build().unwrap();

        let actor = registry
            .descriptors()
            .find(|d| d.is_a(Kind::Struct))
            .and_then(|d| d.as_struct())
            .unwrap();
        assert_eq!(actor.properties().len(), 2);
        let role_prop = actor.properties()[1].as_enum_property().unwrap();
        assert_eq!(role_prop.enum_ref, Some(role));
        assert_eq!(role_prop.underlying, Some(UnderlyingProperty { size: 1 }));
    }

    #[test]
    fn test_json_round_trip_through_snapshot() {
        let mut builder = RegistryBuilder::new();
        let role = builder.add_enum("ENetRole", [("ENetRole::ROLE_None", 0)]);
        builder.add_struct("Actor").enum_property("Role", 1, Some(role), None);
        let registry = builder.build().unwrap();

        let json = registry.to_json_string().unwrap();
        let reloaded = Registry::from_json_str(&json).unwrap();
        assert_eq!(registry, reloaded);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{"objects": [
            {"index": 0, "name": "A", "kind": "other"},
            {"index": 0, "name": "B", "kind": "other"}
        ]}"#;
        assert!(matches!(
            Registry::from_json_str(json),
            Err(RegistryError::DuplicateIndex { .. })
        ));
    }
}
