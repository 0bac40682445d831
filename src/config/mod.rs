//! Run configuration for a merge.

use std::path::{Path, PathBuf};

/// File name every input database and the output artifact share
pub const COMPILE_COMMANDS_FILENAME: &str = "compile_commands.json";

/// Directory, relative to the scan root, that receives the merged output
pub const OUTPUT_DIRNAME: &str = "build";

/// Where to scan and where to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Merged output file
    pub output: PathBuf,
    /// Leave the output file out of the walk so a re-run does not merge its
    /// own previous result
    pub exclude_output: bool,
}

impl MergeConfig {
    /// Default layout under `root`: output at `<root>/build/compile_commands.json`
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output = default_output_path(&root);
        Self { root, output, exclude_output: false }
    }

    /// Override the output file location
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Skip the output file during the walk
    pub fn with_exclude_output(mut self, exclude_output: bool) -> Self {
        self.exclude_output = exclude_output;
        self
    }

    /// Directory that must exist before the output can be written
    pub fn output_dir(&self) -> PathBuf {
        match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::for_root(".")
    }
}

/// `<root>/build/compile_commands.json`
pub fn default_output_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_DIRNAME).join(COMPILE_COMMANDS_FILENAME)
}
