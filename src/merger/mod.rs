//! The merge operation: discover, parse, accumulate, write.

pub mod builder;

pub use builder::merge;
