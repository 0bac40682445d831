//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for source trees containing compile_commands.json files
pub struct SourceTreeBuilder {
    temp_dir: TempDir,
}

impl SourceTreeBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the root directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content to `<dir>/compile_commands.json`
    pub fn with_raw(self, dir: &str, content: &str) -> Self {
        self.with_file(&format!("{}/compile_commands.json", dir), content)
    }

    /// Write a compilation database built from the given entries
    pub fn with_database(self, dir: &str, entries: &[CommandBuilder]) -> Self {
        let array: Vec<Value> = entries.iter().map(|e| e.to_value()).collect();
        let content = serde_json::to_string(&array).expect("Failed to serialize database");
        self.with_raw(dir, &content)
    }

    /// Write an arbitrary file relative to the root
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SourceTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one compilation database entry
pub struct CommandBuilder {
    directory: String,
    file: String,
    arguments: Option<Vec<String>>,
}

impl CommandBuilder {
    /// Entry for `file` compiled with `cc -c <file>` in `/src`
    pub fn new(file: &str) -> Self {
        Self { directory: "/src".to_string(), file: file.to_string(), arguments: None }
    }

    /// Set the working directory
    pub fn directory(mut self, directory: &str) -> Self {
        self.directory = directory.to_string();
        self
    }

    /// Use an `arguments` array instead of a `command` string
    pub fn arguments(mut self, arguments: &[&str]) -> Self {
        self.arguments = Some(arguments.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn to_value(&self) -> Value {
        match &self.arguments {
            Some(arguments) => json!({
                "directory": self.directory,
                "arguments": arguments,
                "file": self.file,
            }),
            None => json!({
                "directory": self.directory,
                "command": format!("cc -c {}", self.file),
                "file": self.file,
            }),
        }
    }
}

/// Path of the merged output under `root`
pub fn output_path(root: &Path) -> PathBuf {
    root.join("build").join("compile_commands.json")
}

/// Read and parse the merged output under `root`
pub fn read_output(root: &Path) -> Value {
    let content = fs::read_to_string(output_path(root)).expect("Failed to read merged output");
    serde_json::from_str(&content).expect("Merged output is not valid JSON")
}

/// The `file` field of every merged entry, in order
pub fn merged_files(root: &Path) -> Vec<String> {
    read_output(root)
        .as_array()
        .expect("Merged output is not an array")
        .iter()
        .filter_map(|e| e.get("file").and_then(|f| f.as_str()).map(String::from))
        .collect()
}
