//! compdb-merge - Combine scattered compilation databases into one
//!
//! Build systems that follow the compilation-database convention write a
//! `compile_commands.json` per build tree. This library finds all of them
//! under a directory, concatenates their arrays and writes the result to
//! `build/compile_commands.json`, where language servers look for it.
//!
//! - Walking a directory tree for `compile_commands.json` in a stable order
//! - Parsing each file as an opaque JSON array
//! - Writing the merged array pretty-printed, replacing the previous output atomically
//!
//! Failures are reported per file and never abort the run.
//!
//! # Example
//!
//! ```no_run
//! use compdb_merge::{MergeConfig, merge};
//!
//! let report = merge(&MergeConfig::for_root("/path/to/workspace"));
//! println!("Merged {} entries", report.total_entries);
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod merger;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::MergeConfig;
pub use discovery::find_compile_commands;
pub use merger::merge;
pub use models::{CommandEntry, FileOutcome, MergeReport};
pub use output::write_compile_commands;
pub use parsers::parse_compile_commands_file;
