use std::path::{Path, PathBuf};

use anyhow::anyhow;
use walkdir::WalkDir;

use crate::utils::{is_compile_commands_file, same_file};

/// Files found by a walk, plus the entries the walk could not read
#[derive(Debug, Default)]
pub struct Discovery {
    /// Matching files in discovery order
    pub files: Vec<PathBuf>,
    /// Unreadable directories or entries; the walk continued past them
    pub errors: Vec<anyhow::Error>,
}

/// Recursively find every `compile_commands.json` under `root`
///
/// Entries are visited depth-first with siblings sorted by file name, so the
/// same tree always produces the same order. Symlinked files are returned
/// (they are read through the link); symlinked directories are not followed.
///
/// # Arguments
///
/// * `root` - Directory to scan
/// * `exclude` - A file to leave out of the results even if it matches,
///   normally the merge output so a re-run does not merge its own result
///
/// Walk errors (permission denied, entries vanishing mid-walk) never stop the
/// scan; they are collected in [`Discovery::errors`].
pub fn find_compile_commands(root: &Path, exclude: Option<&Path>) -> Discovery {
    let mut discovery = Discovery::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                discovery.errors.push(anyhow!(e));
                continue;
            }
        };

        if entry.file_type().is_dir() || !is_compile_commands_file(entry.path()) {
            continue;
        }

        // A symlink is only a candidate when it resolves to a regular file
        if entry.path_is_symlink() && !entry.path().is_file() {
            continue;
        }

        if let Some(excluded) = exclude
            && same_file(entry.path(), excluded)
        {
            continue;
        }

        discovery.files.push(entry.into_path());
    }

    discovery
}
