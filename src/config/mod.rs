//! Settings loading and merging
//!
//! Handles loading from a settings file, map-based overrides from library
//! callers, and CLI arguments with precedence (CLI > File > Defaults).

pub mod loader;
pub mod merge;

pub use loader::load_settings;
pub use merge::{merge, merge_cli_with_config, CliOverrides};
