//! Stats command implementation.
//!
//! Reports the counters collected while building the enum table together
//! with the hit rates of its two name tables.

use std::fmt::Write as _;
use std::path::PathBuf;

use sdkgen_enums::{BuildStats, EnumManager, EnumTable};
use serde::Serialize;

use crate::commands::common::{load_registry, write_report, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Registry snapshot to read.
    pub snapshot: PathBuf,
    /// Output format; falls back to the configured default.
    pub format: Option<String>,
    /// Loaded configuration.
    pub config: Config,
}

/// Stats command handler.
pub struct StatsCommand {
    args: StatsArgs,
}

#[derive(Debug, Serialize)]
struct NameTableReport {
    count: usize,
    hits: usize,
    misses: usize,
    hit_rate: f64,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    objects: usize,
    records: usize,
    build: BuildStats,
    enum_names: NameTableReport,
    member_names: NameTableReport,
}

impl StatsReport {
    fn collect(objects: usize, table: &EnumTable) -> Self {
        let enum_names = table.enum_name_stats();
        let member_names = table.member_name_stats();
        Self {
            objects,
            records: table.len(),
            build: *table.stats(),
            enum_names: NameTableReport {
                count: enum_names.count,
                hits: enum_names.hits,
                misses: enum_names.misses,
                hit_rate: enum_names.hit_rate(),
            },
            member_names: NameTableReport {
                count: member_names.count,
                hits: member_names.hits,
                misses: member_names.misses,
                hit_rate: member_names.hit_rate(),
            },
        }
    }

    fn to_text(&self) -> Result<String> {
        let b = &self.build;
        let mut out = String::new();
        writeln!(out, "registry objects:      {}", self.objects)?;
        writeln!(out, "enum records:          {}", self.records)?;
        writeln!(out, "structs scanned:       {}", b.structs_scanned)?;
        writeln!(out, "enum properties:       {}", b.enum_properties_seen)?;
        writeln!(out, "usages recorded:       {}", b.usages_recorded)?;
        writeln!(out, "usages skipped:        {}", b.usages_skipped)?;
        writeln!(out, "enums declared:        {}", b.enums_declared)?;
        writeln!(out, "members resolved:      {}", b.members_resolved)?;
        writeln!(out, "members renamed:       {}", b.members_renamed)?;
        let tables = [("enum names", &self.enum_names), ("member names", &self.member_names)];
        for (label, names) in tables {
            writeln!(
                out,
                "{:<22} {} unique, {:.1}% hit rate",
                format!("{}:", label),
                names.count,
                names.hit_rate * 100.0
            )?;
        }
        Ok(out)
    }
}

impl StatsCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let format = OutputFormat::resolve(
            self.args.format.as_deref(),
            &self.args.config.output.format,
        )?;

        let registry = load_registry(&self.args.snapshot)?;
        let manager = EnumManager::new(self.args.config.enums.clone());
        let table = manager.init(&registry);

        let report = StatsReport::collect(registry.len(), table);
        let rendered = match format {
            OutputFormat::Text => report.to_text()?,
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&report)?;
                json.push('\n');
                json
            }
        };
        write_report(None, &rendered)
    }
}

impl Command for StatsCommand {
    type Args = StatsArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "stats"
    }
}

impl CommandDescription for StatsCommand {
    fn description() -> &'static str {
        "Show enum table build statistics"
    }

    fn help() -> &'static str {
        "Builds the enum table for a registry snapshot and prints the scan \
         counters and name table hit rates."
    }
}

/// Run the stats command.
pub fn run_stats(args: StatsArgs) -> Result<()> {
    tracing::debug!(
        command = StatsCommand::name(),
        "{}",
        StatsCommand::description()
    );
    StatsCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_enums::EnumTableConfig;
    use sdkgen_reflect::RegistryBuilder;

    #[test]
    fn test_collect_report() {
        let mut builder = RegistryBuilder::new();
        let mode = builder.add_enum("EMode", [("EMode::A", 0), ("EMode::TRUE", 1)]);
        builder.add_enum("EOther", [("EOther::A", 0)]);
        builder
            .add_struct("Holder")
            .enum_property("Mode", 2, Some(mode), None)
            .enum_property("Broken", 1, None, None)
            .property("Count", 4);
        let registry = builder.build().unwrap();

        let table = EnumTable::build(&registry, &EnumTableConfig::default());
        let report = StatsReport::collect(registry.len(), &table);

        assert_eq!(report.objects, 3);
        assert_eq!(report.records, 2);
        assert_eq!(report.build.structs_scanned, 1);
        assert_eq!(report.build.enum_properties_seen, 2);
        assert_eq!(report.build.usages_recorded, 1);
        assert_eq!(report.build.usages_skipped, 1);
        assert_eq!(report.build.enums_declared, 2);
        assert_eq!(report.build.members_resolved, 3);
        assert_eq!(report.build.members_renamed, 1);
        assert_eq!(report.enum_names.count, 2);

        let text = report.to_text().unwrap();
        assert!(text.contains("members renamed:       1\n"));
        assert!(text.contains("usages skipped:        1\n"));
    }
}
