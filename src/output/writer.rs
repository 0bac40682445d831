//! Output artifact: pretty-printed JSON array with atomic replacement

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::CommandEntry;

/// Serialize entries as a JSON array with 2-space indentation
pub fn render_compile_commands(entries: &[CommandEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize compile commands")
}

/// Create the directory that will hold the output, parents included
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Write the merged database to `path`, replacing any existing file
///
/// The content goes to a sibling `.tmp` file first and is then renamed over
/// `path`, so a failed write leaves the previous output untouched. If `path`
/// is a symlink the write goes through it to the link target and the link
/// itself is kept; a dangling link is written through directly.
pub fn write_compile_commands(path: &Path, entries: &[CommandEntry]) -> Result<()> {
    let json = render_compile_commands(entries)?;

    let is_symlink = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    if is_symlink {
        return match fs::canonicalize(path) {
            Ok(target) => replace_file(&target, &json),
            Err(_) => fs::write(path, json)
                .with_context(|| format!("Failed to write through link {}", path.display())),
        };
    }

    replace_file(path, &json)
}

fn replace_file(path: &Path, json: &str) -> Result<()> {
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
