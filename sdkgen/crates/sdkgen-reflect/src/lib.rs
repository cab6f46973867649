//! sdkgen-reflect - Runtime Type Registry Boundary
//!
//! The reflected runtime exposes its type information as a flat array of
//! objects, each with a stable non-negative index. This crate models that
//! array as a closed set of descriptor variants:
//!
//! - [`DescriptorKind::Struct`]: a structured type with typed properties
//! - [`DescriptorKind::Enum`]: an enumerated type with `(name, value)` pairs
//! - [`DescriptorKind::Other`]: everything else (functions, packages, ...)
//!
//! Kind tests and narrowing casts are plain methods returning `Option` views,
//! so consumers branch with `if let` instead of inspecting runtime class flags.
//!
//! Registries come from a live process in production. For tooling and tests
//! they are materialized as a [`Registry`] snapshot, either assembled with
//! [`RegistryBuilder`] or loaded from JSON.

mod descriptor;
mod error;
mod registry;

pub use descriptor::{
    Descriptor, DescriptorKind, EnumDesc, EnumEntry, EnumProperty, EnumView, Kind, Property,
    PropertyKind, StructDesc, StructView, UnderlyingProperty,
};
pub use error::{RegistryError, RegistryResult};
pub use registry::{Registry, RegistryBuilder, StructBuilder, TypeRegistry};

sdkgen_util::define_idx!(
    /// Stable position of an object in the runtime type registry
    RegistryIndex
);

impl serde::Serialize for RegistryIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RegistryIndex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(RegistryIndex)
    }
}

impl std::fmt::Display for RegistryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
