//! Merge builder for compilation databases.
//!
//! # Error Handling Strategy
//!
//! Every failure is local to the step that produced it:
//!
//! - **Walk errors**: unreadable directories are reported and skipped
//! - **File errors**: unreadable or malformed files are reported and contribute nothing
//! - **Non-array files**: valid JSON that is not an array is skipped without a message
//! - **Output errors**: a failure to create `build/` or write the file is reported
//!
//! Status lines go to stdout with `println!`. Nothing is propagated as a
//! fatal error; the returned [`MergeReport`] records what happened.

use std::path::PathBuf;

use crate::config::MergeConfig;
use crate::discovery::find_compile_commands;
use crate::models::{CommandEntry, FileOutcome, MergeReport};
use crate::output::{ensure_output_dir, write_compile_commands};
use crate::parsers::{ParsedFile, parse_compile_commands_file};

/// Merge every `compile_commands.json` under the configured root
///
/// Runs the whole operation:
/// 1. Ensure the output directory exists
/// 2. Walk the root for `compile_commands.json` files in a stable order
/// 3. Append the elements of each top-level array to one accumulator
/// 4. Write the accumulator as a pretty-printed array if it is non-empty
///
/// The output file is scanned like any other match, so a re-run merges the
/// previous result again. Set [`MergeConfig::exclude_output`] to leave it out,
/// which keeps repeated runs byte-identical.
///
/// # Examples
///
/// ```no_run
/// use compdb_merge::{MergeConfig, merge};
///
/// let report = merge(&MergeConfig::for_root("/path/to/workspace"));
/// println!("{} entries from {} files", report.total_entries, report.merged_files());
/// ```
pub fn merge(config: &MergeConfig) -> MergeReport {
    let mut report = MergeReport::default();

    let output_dir = config.output_dir();
    if let Err(e) = ensure_output_dir(&output_dir) {
        println!("Error creating output directory {}: {:#}", output_dir.display(), e);
    }

    let exclude = config.exclude_output.then_some(config.output.as_path());
    let discovery = find_compile_commands(&config.root, exclude);

    for error in discovery.errors {
        println!("Error reading directory entry: {}", error);
        report.walk_errors.push(error);
    }

    let mut all_commands: Vec<CommandEntry> = Vec::new();
    for path in discovery.files {
        let outcome = merge_file(path, &mut all_commands);
        match &outcome {
            FileOutcome::Merged { path, .. } => {
                println!("Processed file: {}", path.display());
            }
            FileOutcome::Failed { path, error } => {
                println!("Error processing file {}: {:#}", path.display(), error);
            }
            FileOutcome::NotAnArray { .. } => {}
        }
        report.files.push(outcome);
    }

    report.total_entries = all_commands.len();

    if all_commands.is_empty() {
        println!("No compile_commands.json files found");
        return report;
    }

    match write_compile_commands(&config.output, &all_commands) {
        Ok(()) => {
            println!(
                "Merged {} compile commands into {}",
                all_commands.len(),
                config.output.display()
            );
            report.output_written = Some(config.output.clone());
        }
        Err(e) => {
            println!("Error writing merged file {}: {:#}", config.output.display(), e);
            report.write_error = Some(e);
        }
    }

    report
}

/// Parse one file and append its entries, returning what happened
fn merge_file(path: PathBuf, all_commands: &mut Vec<CommandEntry>) -> FileOutcome {
    match parse_compile_commands_file(&path) {
        Ok(ParsedFile::Entries(entries)) => {
            let count = entries.len();
            all_commands.extend(entries);
            FileOutcome::Merged { path, entries: count }
        }
        Ok(ParsedFile::NotAnArray) => FileOutcome::NotAnArray { path },
        Err(error) => FileOutcome::Failed { path, error },
    }
}
