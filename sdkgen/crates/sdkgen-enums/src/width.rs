//! Underlying storage width of an enumerated type.

use std::fmt;

/// Size of the integer an enum is stored in
///
/// Ordered by size, so `max` widens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Width {
    #[default]
    U8 = 1,
    U16 = 2,
    U32 = 4,
    U64 = 8,
}

impl Width {
    /// Size in bytes
    pub const fn bytes(self) -> u8 {
        self as u8
    }

    /// Width of a property reporting `bytes` of storage
    ///
    /// Returns `None` for sizes that are not an integer width.
    pub const fn from_bytes(bytes: u32) -> Option<Self> {
        match bytes {
            1 => Some(Width::U8),
            2 => Some(Width::U16),
            4 => Some(Width::U32),
            8 => Some(Width::U64),
            _ => None,
        }
    }

    /// Smallest width whose unsigned range holds `value`
    pub const fn for_value(value: u64) -> Self {
        if value > u32::MAX as u64 {
            Width::U64
        } else if value > u16::MAX as u64 {
            Width::U32
        } else if value > u8::MAX as u64 {
            Width::U16
        } else {
            Width::U8
        }
    }

    /// Infer a width from the largest member value
    ///
    /// Values beyond `u32::MAX` force [`Width::U64`]. Otherwise the result is
    /// the larger of `previous` and the width the value needs, so a record is
    /// only ever widened.
    pub fn infer(previous: Width, max_value: u64) -> Width {
        match Self::for_value(max_value) {
            Width::U64 => Width::U64,
            needed => previous.max(needed),
        }
    }

    /// Name of the unsigned integer type of this width
    pub const fn type_name(self) -> &'static str {
        match self {
            Width::U8 => "uint8",
            Width::U16 => "uint16",
            Width::U32 => "uint32",
            Width::U64 => "uint64",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
