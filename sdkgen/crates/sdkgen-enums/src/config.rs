//! Enum table build options.

use serde::{Deserialize, Serialize};

/// Names that clash with macros or keywords of the emitted headers
const DEFAULT_RESERVED_WORDS: [&str; 4] = ["TRUE", "FALSE", "PF_MAX", "TRANSPARENT"];

/// Suffix of synthetic "one past the last value" members
const DEFAULT_BOUND_MARKER_SUFFIX: &str = "_MAX";

/// Expected number of registry objects holding enum records
const DEFAULT_CAPACITY_HINT: usize = 0x1000;

/// Options for building an [`EnumTable`](crate::EnumTable)
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumTableConfig {
    /// Member names that always receive a collision suffix
    pub reserved_words: Vec<String>,

    /// Raw member names ending in this suffix are left out of width
    /// inference. Empty disables the exclusion.
    pub bound_marker_suffix: String,

    /// Record slots reserved up front
    pub capacity_hint: usize,
}

impl Default for EnumTableConfig {
    fn default() -> Self {
        Self {
            reserved_words: DEFAULT_RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
            bound_marker_suffix: DEFAULT_BOUND_MARKER_SUFFIX.to_string(),
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }
}

impl EnumTableConfig {
    /// Whether a raw member name marks the enum's exclusive upper bound
    pub fn is_bound_marker(&self, raw_name: &str) -> bool {
        !self.bound_marker_suffix.is_empty() && raw_name.ends_with(&self.bound_marker_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnumTableConfig::default();
        assert_eq!(config.reserved_words, ["TRUE", "FALSE", "PF_MAX", "TRANSPARENT"]);
        assert_eq!(config.bound_marker_suffix, "_MAX");
        assert_eq!(config.capacity_hint, 0x1000);
    }

    #[test]
    fn test_bound_marker() {
        let config = EnumTableConfig::default();
        assert!(config.is_bound_marker("ENetRole::ROLE_MAX"));
        assert!(config.is_bound_marker("Enum_MAX"));
        assert!(!config.is_bound_marker("MAX_Value"));
        assert!(!config.is_bound_marker("ROLE_Max"));
    }

    #[test]
    fn test_empty_suffix_disables_exclusion() {
        let config = EnumTableConfig {
            bound_marker_suffix: String::new(),
            ..Default::default()
        };
        assert!(!config.is_bound_marker("Enum_MAX"));
    }
}
