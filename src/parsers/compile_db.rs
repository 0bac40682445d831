use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::CommandEntry;

/// Parsed contents of one `compile_commands.json`
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedFile {
    /// Top-level array, elements in file order
    Entries(Vec<CommandEntry>),
    /// Valid JSON, but the top-level value is something other than an array
    NotAnArray,
}

/// Read and parse a compilation database file
///
/// Entries are not validated; anything inside the top-level array is kept
/// as-is, including non-object elements.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn parse_compile_commands_file(path: &Path) -> Result<ParsedFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_compile_commands(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Parse compilation database text
pub fn parse_compile_commands(content: &str) -> Result<ParsedFile> {
    let value: Value = serde_json::from_str(content)?;
    Ok(match value {
        Value::Array(entries) => ParsedFile::Entries(entries),
        _ => ParsedFile::NotAnArray,
    })
}
