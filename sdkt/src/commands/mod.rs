//! Command modules for the sdkt CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! args / command / `run_*` pattern.

pub mod common;
pub mod traits;

pub mod enums;
pub mod stats;

pub use enums::{run_enums, EnumsArgs};
pub use stats::{run_stats, StatsArgs};
