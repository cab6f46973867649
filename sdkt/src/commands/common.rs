//! Common types and utilities for sdkt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations.

use std::io::Write;
use std::path::Path;

use sdkgen_reflect::Registry;

use crate::error::{Result, SdktError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Pick the format from the command line flag, falling back to the
    /// configured default.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        let requested = flag.unwrap_or(configured);
        Self::parse(requested).ok_or_else(|| {
            SdktError::Validation(format!(
                "{}: '{}' (expected text or json)",
                error_messages::UNKNOWN_FORMAT,
                requested
            ))
        })
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error messages.
pub mod error_messages {
    /// Snapshot path does not exist.
    pub const SNAPSHOT_NOT_FOUND: &str = "Registry snapshot not found";
    /// Snapshot path is not a regular file.
    pub const SNAPSHOT_NOT_FILE: &str = "Registry snapshot is not a file";
    /// Format flag or config value is not recognized.
    pub const UNKNOWN_FORMAT: &str = "Unknown output format";
    /// `--only` named an enum that is not in the table.
    pub const ENUM_NOT_FOUND: &str = "No enum named";
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Validate the snapshot path and load the registry it holds.
pub fn load_registry(path: &Path) -> Result<Registry> {
    if !path.exists() {
        return Err(SdktError::Validation(format!(
            "{}: {}",
            error_messages::SNAPSHOT_NOT_FOUND,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(SdktError::Validation(format!(
            "{}: {}",
            error_messages::SNAPSHOT_NOT_FILE,
            path.display()
        )));
    }

    let registry = Registry::load(path)?;
    tracing::debug!(path = %path.display(), objects = registry.len(), "loaded registry snapshot");
    Ok(registry)
}

/// Write a finished report to `output`, or to stdout when none is given.
pub fn write_report(output: Option<&Path>, report: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, report)?;
            tracing::info!(path = %path.display(), "wrote report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
