//! Registry descriptors and their narrowing views.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::RegistryIndex;

/// Coarse kind of a registry object, used for kind tests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Struct,
    Enum,
    Other,
}

/// One object of the runtime type registry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Stable position in the registry
    pub index: RegistryIndex,
    /// Object name as reported by the runtime
    pub name: String,
    #[serde(flatten)]
    pub kind: DescriptorKind,
}

/// Kind-specific payload of a [`Descriptor`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DescriptorKind {
    Struct(StructDesc),
    Enum(EnumDesc),
    Other,
}

/// Structured type payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StructDesc {
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Enumerated type payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumDesc {
    /// Declared members in declaration order
    #[serde(default)]
    pub members: Vec<EnumEntry>,
}

/// A raw `(name, value)` declaration pair
///
/// Names usually carry a scope prefix (`ENetRole::ROLE_None`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    pub name: String,
    pub value: i64,
}

/// A typed field of a structured type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    /// Storage size of the field in bytes
    pub size: u32,
    #[serde(flatten)]
    pub kind: PropertyKind,
}

/// Kind-specific payload of a [`Property`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    /// Field storing an instance of an enumerated type
    Enum(EnumProperty),
    Other,
}

/// Reflection data of a field that stores an enumerated type
///
/// Either piece may be missing from the runtime's metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumProperty {
    /// The enumerated type this field references
    #[serde(default)]
    pub enum_ref: Option<RegistryIndex>,
    /// The integer property the enum value is stored in
    #[serde(default)]
    pub underlying: Option<UnderlyingProperty>,
}

/// Integer property backing an enum field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlyingProperty {
    pub size: u32,
}

/// Borrowed view of a structured-type descriptor
#[derive(Clone, Copy, Debug)]
pub struct StructView<'a> {
    desc: &'a Descriptor,
    data: &'a StructDesc,
}

/// Borrowed view of an enumerated-type descriptor
#[derive(Clone, Copy, Debug)]
pub struct EnumView<'a> {
    desc: &'a Descriptor,
    data: &'a EnumDesc,
}

impl Descriptor {
    /// Kind of this descriptor
    pub fn kind_tag(&self) -> Kind {
        match self.kind {
            DescriptorKind::Struct(_) => Kind::Struct,
            DescriptorKind::Enum(_) => Kind::Enum,
            DescriptorKind::Other => Kind::Other,
        }
    }

    /// Kind test
    pub fn is_a(&self, kind: Kind) -> bool {
        self.kind_tag() == kind
    }

    /// Narrow to a structured type
    pub fn as_struct(&self) -> Option<StructView<'_>> {
        match &self.kind {
            DescriptorKind::Struct(data) => Some(StructView { desc: self, data }),
            _ => None,
        }
    }

    /// Narrow to an enumerated type
    pub fn as_enum(&self) -> Option<EnumView<'_>> {
        match &self.kind {
            DescriptorKind::Enum(data) => Some(EnumView { desc: self, data }),
            _ => None,
        }
    }
}

impl<'a> StructView<'a> {
    pub fn index(&self) -> RegistryIndex {
        self.desc.index
    }

    pub fn name(&self) -> &'a str {
        &self.desc.name
    }

    pub fn properties(&self) -> &'a [Property] {
        &self.data.properties
    }
}

impl<'a> EnumView<'a> {
    pub fn index(&self) -> RegistryIndex {
        self.desc.index
    }

    pub fn name(&self) -> &'a str {
        &self.desc.name
    }

    /// Name under which the enum is emitted
    ///
    /// Enumerated types conventionally start with `E`; the prefix is added
    /// when the runtime name lacks it.
    pub fn prefixed_name(&self) -> Cow<'a, str> {
        let name = self.name();
        if name.starts_with('E') {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("E{}", name))
        }
    }

    /// Declaration pairs in declaration order
    pub fn members(&self) -> &'a [EnumEntry] {
        &self.data.members
    }
}

impl Property {
    /// Narrow to an enum-typed field
    pub fn as_enum_property(&self) -> Option<&EnumProperty> {
        match &self.kind {
            PropertyKind::Enum(data) => Some(data),
            PropertyKind::Other => None,
        }
    }
}
