use std::path::PathBuf;

use super::FileOutcome;

/// Summary of one merge run
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Per-file outcomes in discovery order
    pub files: Vec<FileOutcome>,
    /// Directory entries the walk could not read
    pub walk_errors: Vec<anyhow::Error>,
    /// Number of entries in the accumulator
    pub total_entries: usize,
    /// Set when the output file was written
    pub output_written: Option<PathBuf>,
    /// Set when creating the output directory or writing the file failed
    pub write_error: Option<anyhow::Error>,
}

impl MergeReport {
    pub fn merged_files(&self) -> usize {
        self.files.iter().filter(|f| matches!(f, FileOutcome::Merged { .. })).count()
    }

    pub fn skipped_files(&self) -> usize {
        self.files.iter().filter(|f| matches!(f, FileOutcome::NotAnArray { .. })).count()
    }

    pub fn failed_files(&self) -> usize {
        self.files.iter().filter(|f| matches!(f, FileOutcome::Failed { .. })).count()
    }

    /// True when nothing was merged and no output was produced
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}
