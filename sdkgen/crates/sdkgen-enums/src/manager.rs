//! One-shot initialization of the enum table.

use std::sync::OnceLock;

use sdkgen_reflect::TypeRegistry;
use tracing::debug;

use crate::config::EnumTableConfig;
use crate::table::EnumTable;

/// Owner of the enum table for a registry
///
/// The table is built by the first [`init`](EnumManager::init) call. Later
/// calls are no-ops that return the existing table, even when given a
/// different registry.
#[derive(Debug, Default)]
pub struct EnumManager {
    config: EnumTableConfig,
    table: OnceLock<EnumTable>,
}

impl EnumManager {
    pub fn new(config: EnumTableConfig) -> Self {
        Self {
            config,
            table: OnceLock::new(),
        }
    }

    /// Build the table from `registry` unless it already exists
    pub fn init<R: TypeRegistry + ?Sized>(&self, registry: &R) -> &EnumTable {
        if let Some(table) = self.table.get() {
            debug!("enum table already initialized");
            return table;
        }
        self.table
            .get_or_init(|| EnumTable::build(registry, &self.config))
    }

    /// The table, if [`init`](EnumManager::init) has run
    pub fn table(&self) -> Option<&EnumTable> {
        self.table.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    pub fn config(&self) -> &EnumTableConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_reflect::RegistryBuilder;

    #[test]
    fn test_table_absent_before_init() {
        let manager = EnumManager::default();
        assert!(!manager.is_initialized());
        assert!(manager.table().is_none());
    }

    #[test]
    fn test_second_init_ignores_new_registry() {
        let mut first = RegistryBuilder::new();
        let a = first.add_enum("EFirst", [("EFirst::A", 0)]);
        let first = first.build().unwrap();

        let mut second = RegistryBuilder::new();
        second.add_enum("ESecond", [("ESecond::B", 0), ("ESecond::C", 1)]);
        let second = second.build().unwrap();

        let manager = EnumManager::default();
        manager.init(&first);
        let table = manager.init(&second);

        assert!(manager.is_initialized());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(a).and_then(|info| info.name()), Some("EFirst"));
    }

    #[test]
    fn test_custom_config_is_used() {
        let config = EnumTableConfig {
            reserved_words: vec!["None".to_string()],
            ..Default::default()
        };
        let mut builder = RegistryBuilder::new();
        let e = builder.add_enum("EState", [("EState::None", 0), ("EState::TRUE", 1)]);
        let registry = builder.build().unwrap();

        let manager = EnumManager::new(config);
        let table = manager.init(&registry);
        let names: Vec<_> = table
            .get(e)
            .unwrap()
            .members()
            .map(|m| m.unique_name().into_owned())
            .collect();
        assert_eq!(names, ["None_0", "TRUE"]);
        assert!(table.is_reserved("None"));
        assert!(!table.is_reserved("TRUE"));
    }
}
