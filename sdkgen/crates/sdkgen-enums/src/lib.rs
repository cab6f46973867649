//! sdkgen-enums - Enum Symbol Table Construction
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Builds a deduplicated, collision-resolved table of every enumerated type in
//! a runtime type registry. The header emitter prints each enum and its members
//! straight from this table, so every emitted member name must be a valid
//! identifier and unique within its enum.
//!
//! One pass over the registry feeds two resolvers:
//!
//! ```text
//!   registry ──► scanner ──┬── struct ──► usage resolver ──────┐
//!                          │    (per enum-typed property)      │
//!                          └── enum ────► declaration resolver ├──► EnumRecord
//!                                         + size inference ────┘   (by registry index)
//! ```
//!
//! - Usage evidence (a struct field storing the enum) fixes the enum's
//!   underlying width. It always wins over inference.
//! - Declarations supply the display name and members. Member names share
//!   one namespace across all enums; a per-enum collision ordinal turns
//!   repeated names into `Name`, `Name_0`, `Name_1`, ...
//! - Without usage evidence the width is inferred from the largest member
//!   value, ignoring `*_MAX` bound markers.
//!
//! ============================================================================
//! LIFECYCLE
//! ============================================================================
//!
//! [`EnumManager::init`] builds the table once; later calls return the same
//! table. The finished [`EnumTable`] is immutable and `Send + Sync`.
//!
//! ```
//! use sdkgen_enums::{EnumManager, Width};
//! use sdkgen_reflect::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! let role = builder.add_enum(
//!     "ENetRole",
//!     [("ENetRole::ROLE_None", 0), ("ENetRole::ROLE_Authority", 3), ("ENetRole::ROLE_MAX", 4)],
//! );
//! let registry = builder.build().unwrap();
//!
//! let manager = EnumManager::default();
//! let table = manager.init(&registry);
//!
//! let info = table.get(role).unwrap();
//! assert_eq!(info.name(), Some("ENetRole"));
//! assert_eq!(info.underlying_width(), Width::U8);
//!
//! let names: Vec<_> = info.members().map(|m| m.unique_name().into_owned()).collect();
//! assert_eq!(names, ["ROLE_None", "ROLE_Authority", "ROLE_MAX"]);
//! ```

mod builder;
mod config;
pub mod ident;
mod manager;
mod record;
mod table;
mod width;

pub use builder::BuildStats;
pub use config::EnumTableConfig;
pub use manager::EnumManager;
pub use record::{EnumNameId, MemberNameId};
pub use table::{EnumInfoHandle, EnumTable, MemberIter, MemberView};
pub use width::Width;

static_assertions::assert_impl_all!(EnumTable: Send, Sync);
static_assertions::assert_impl_all!(EnumManager: Send, Sync);
