//! Parser for compilation database files
//!
//! A file either yields its top-level array, is recognized as valid JSON that
//! is not an array, or fails with an `anyhow` error carrying the file path.
//! Deciding what to do with each case is left to the merger.

pub mod compile_db;

pub use compile_db::{ParsedFile, parse_compile_commands, parse_compile_commands_file};
