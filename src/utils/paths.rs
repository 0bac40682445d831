use std::path::Path;

use crate::config::COMPILE_COMMANDS_FILENAME;

/// True when the final path component is exactly `compile_commands.json`
///
/// The comparison is case-sensitive: `Compile_Commands.json` does not match.
pub fn is_compile_commands_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == COMPILE_COMMANDS_FILENAME)
}

/// Whether two paths name the same file on disk
///
/// Both paths are canonicalized so that `./build/x` and `/abs/root/build/x`
/// compare equal. If either cannot be canonicalized (usually because it does
/// not exist yet) the raw paths are compared instead.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
