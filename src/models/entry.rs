use std::path::{Path, PathBuf};

/// One compilation record, passed through verbatim
pub type CommandEntry = serde_json::Value;

/// What happened to a single discovered `compile_commands.json`
#[derive(Debug)]
pub enum FileOutcome {
    /// Top-level array; its elements were appended to the accumulator
    Merged { path: PathBuf, entries: usize },
    /// Valid JSON whose top-level value is not an array
    NotAnArray { path: PathBuf },
    /// Could not be read or parsed
    Failed { path: PathBuf, error: anyhow::Error },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Merged { path, .. }
            | FileOutcome::NotAnArray { path }
            | FileOutcome::Failed { path, .. } => path,
        }
    }
}
