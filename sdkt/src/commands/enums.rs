//! Enums command implementation.
//!
//! Builds the enum table for a registry snapshot and prints every record:
//! its display name, underlying width and disambiguated members.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use sdkgen_enums::{EnumInfoHandle, EnumManager, EnumTable};
use sdkgen_reflect::RegistryIndex;
use serde::Serialize;

use crate::commands::common::{error_messages, load_registry, write_report, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{Result, SdktError};

/// Arguments for the enums command.
#[derive(Debug, Clone, Default)]
pub struct EnumsArgs {
    /// Registry snapshot to read.
    pub snapshot: PathBuf,
    /// Output format; falls back to the configured default.
    pub format: Option<String>,
    /// Write the report here instead of stdout.
    pub output: Option<PathBuf>,
    /// Only report the enum with this display name.
    pub only: Option<String>,
    /// Loaded configuration.
    pub config: Config,
}

/// Enums command handler.
pub struct EnumsCommand {
    args: EnumsArgs,
}

impl EnumsCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let format = OutputFormat::resolve(
            self.args.format.as_deref(),
            &self.args.config.output.format,
        )?;

        let registry = load_registry(&self.args.snapshot)?;
        let manager = EnumManager::new(self.args.config.enums.clone());
        let table = manager.init(&registry);

        let report = match format {
            OutputFormat::Text => render_text(table, self.args.only.as_deref())?,
            OutputFormat::Json => render_json(table, self.args.only.as_deref())?,
        };
        write_report(self.args.output.as_deref(), &report)?;

        tracing::debug!(
            records = table.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "enums report complete"
        );
        Ok(())
    }
}

/// Label for a record: its display name, or its registry index when no
/// declaration was seen.
fn display_name<'a>(index: RegistryIndex, info: &EnumInfoHandle<'a>) -> Cow<'a, str> {
    match info.name() {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("<unnamed {}>", index)),
    }
}

/// Records to report, honoring `--only`.
fn select<'t>(
    table: &'t EnumTable,
    only: Option<&str>,
) -> Result<Vec<(RegistryIndex, EnumInfoHandle<'t>)>> {
    let selected: Vec<_> = table
        .iter()
        .filter(|(_, info)| only.map_or(true, |wanted| info.name() == Some(wanted)))
        .collect();

    match only {
        Some(wanted) if selected.is_empty() => Err(SdktError::Validation(format!(
            "{} '{}'",
            error_messages::ENUM_NOT_FOUND,
            wanted
        ))),
        _ => Ok(selected),
    }
}

/// Render records as C++-style enum declarations.
pub fn render_text(table: &EnumTable, only: Option<&str>) -> Result<String> {
    let mut out = String::new();

    for (index, info) in select(table, only)? {
        let origin = if info.usage_found() { "field" } else { "inferred" };
        writeln!(
            out,
            "enum class {} : {} // {}, {} width",
            display_name(index, &info),
            info.underlying_width(),
            index,
            origin
        )?;
        out.push_str("{\n");
        for member in info.members() {
            writeln!(out, "    {} = {},", member, member.signed_value())?;
        }
        out.push_str("};\n\n");
    }

    Ok(out)
}

#[derive(Serialize)]
struct EnumReport<'a> {
    index: u32,
    name: Option<&'a str>,
    width: u8,
    usage_found: bool,
    members: Vec<MemberReport<'a>>,
}

#[derive(Serialize)]
struct MemberReport<'a> {
    name: Cow<'a, str>,
    base_name: &'a str,
    collision_ordinal: u32,
    value: i64,
}

/// Render records as a JSON array.
pub fn render_json(table: &EnumTable, only: Option<&str>) -> Result<String> {
    let reports: Vec<EnumReport<'_>> = select(table, only)?
        .into_iter()
        .map(|(index, info)| EnumReport {
            index: index.0,
            name: info.name(),
            width: info.underlying_width().bytes(),
            usage_found: info.usage_found(),
            members: info
                .members()
                .map(|member| MemberReport {
                    name: member.unique_name(),
                    base_name: member.base_name(),
                    collision_ordinal: member.collision_ordinal(),
                    value: member.signed_value(),
                })
                .collect(),
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&reports)?;
    json.push('\n');
    Ok(json)
}

impl Command for EnumsCommand {
    type Args = EnumsArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "enums"
    }
}

impl CommandDescription for EnumsCommand {
    fn description() -> &'static str {
        "List the enum table built from a registry snapshot"
    }

    fn help() -> &'static str {
        "Scans the snapshot for enum declarations and enum-typed struct fields, \
         then prints each enum with its underlying width and collision-free \
         member names."
    }
}

/// Run the enums command.
pub fn run_enums(args: EnumsArgs) -> Result<()> {
    tracing::debug!(
        command = EnumsCommand::name(),
        "{}",
        EnumsCommand::description()
    );
    EnumsCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_enums::EnumTableConfig;
    use sdkgen_reflect::RegistryBuilder;

    fn sample_table() -> EnumTable {
        let mut builder = RegistryBuilder::new();
        let role = builder.add_enum(
            "ENetRole",
            [("ENetRole::ROLE_None", 0), ("ENetRole::ROLE_Authority", 3), ("ENetRole::ROLE_MAX", 4)],
        );
        builder.add_enum("EBool", [("EBool::TRUE", 1), ("EBool::FALSE", 0)]);
        builder
            .add_struct("Actor")
            .enum_property("Role", 1, Some(role), Some(1));
        builder
            .at(10)
            .add_struct("Widget")
            .enum_property("Mode", 4, Some(RegistryIndex(20)), None);

        let registry = builder.build().unwrap();
        EnumTable::build(&registry, &EnumTableConfig::default())
    }

    #[test]
    fn test_render_text() {
        let table = sample_table();
        let text = render_text(&table, None).unwrap();

        assert!(text.contains("enum class ENetRole : uint8 // #0, field width\n"));
        assert!(text.contains("    ROLE_Authority = 3,\n"));
        assert!(text.contains("enum class EBool : uint8 // #1, inferred width\n"));
        assert!(text.contains("    TRUE_0 = 1,\n"));
        assert!(text.contains("    FALSE_0 = 0,\n"));
        assert!(text.contains("enum class <unnamed #20> : uint32 // #20, field width\n"));
    }

    #[test]
    fn test_render_text_only() {
        let table = sample_table();
        let text = render_text(&table, Some("EBool")).unwrap();
        assert!(text.starts_with("enum class EBool"));
        assert!(!text.contains("ENetRole"));
    }

    #[test]
    fn test_render_unknown_only() {
        let table = sample_table();
        let err = render_text(&table, Some("EMissing")).unwrap_err();
        assert!(matches!(err, SdktError::Validation(_)));
        assert!(err.to_string().contains("EMissing"));
    }

    #[test]
    fn test_render_json() {
        let table = sample_table();
        let json = render_json(&table, Some("EBool")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[0]["name"], "EBool");
        assert_eq!(value[0]["width"], 1);
        assert_eq!(value[0]["usage_found"], false);
        assert_eq!(value[0]["members"][0]["name"], "TRUE_0");
        assert_eq!(value[0]["members"][0]["base_name"], "TRUE");
        assert_eq!(value[0]["members"][0]["collision_ordinal"], 1);
        assert_eq!(value[0]["members"][0]["value"], 1);
    }

    #[test]
    fn test_render_json_unnamed() {
        let table = sample_table();
        let json = render_json(&table, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let unnamed = &value[2];
        assert_eq!(unnamed["index"], 20);
        assert!(unnamed["name"].is_null());
        assert_eq!(unnamed["width"], 4);
        assert_eq!(unnamed["members"].as_array().unwrap().len(), 0);
    }
}
