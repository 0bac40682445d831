//! Discovery of `compile_commands.json` files under a scan root.
//!
//! The walk never fails as a whole. Unreadable entries are collected and
//! handed back to the caller to report, and the walk carries on.

pub mod walk;

pub use walk::{Discovery, find_compile_commands};
