//! CLI command handlers.

mod rename;

pub use rename::run_rename;
