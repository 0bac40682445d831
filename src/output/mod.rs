//! Writing the merged compilation database

pub mod writer;

pub use writer::{ensure_output_dir, render_compile_commands, write_compile_commands};
