pub mod paths;

pub use paths::{is_compile_commands_file, same_file};
