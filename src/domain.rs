//! Core settings type shared by every operation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_ENV_FILE_NAME: &str = ".env";
pub const DEFAULT_CONFIG_KEY_ENV: &str = "DOTENV_CONFIG";
pub const DEFAULT_CONFIG_KEY_ARG: &str = "config";
pub const DEFAULT_PASSTHROUGH_CHAR: char = '*';
pub const DEFAULT_MISSING_FILE_EXIT_CODE: i32 = 1;

/// Settings driving path resolution and casting.
///
/// Built once at startup (defaults, then a settings file, then CLI flags) and
/// handed by reference to the resolver and the caster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log every casting decision at debug level
    pub debug_casting: bool,
    /// File name used when nothing overrides it
    pub env_file_name: String,
    /// Environment variable that overrides the file path
    pub config_key_env: String,
    /// Command-line argument (`--<name>=<path>`) that overrides the file path
    pub config_key_arg: String,
    /// Trailing marker that keeps a value as a string
    pub passthrough_char: char,
    /// Honor the pass-through marker at all
    pub passthrough: bool,
    /// Fail resolution when the file does not exist
    pub require_file: bool,
    pub cast_numbers: bool,
    pub cast_booleans: bool,
    /// Try parsing remaining values as JSON; failures stay strings
    pub cast_json: bool,
    /// Exit status used by the CLI when a required file is missing
    pub missing_file_exit_code: i32,
    /// Keys merged in that have no dedicated field
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_casting: false,
            env_file_name: DEFAULT_ENV_FILE_NAME.to_string(),
            config_key_env: DEFAULT_CONFIG_KEY_ENV.to_string(),
            config_key_arg: DEFAULT_CONFIG_KEY_ARG.to_string(),
            passthrough_char: DEFAULT_PASSTHROUGH_CHAR,
            passthrough: true,
            require_file: true,
            cast_numbers: true,
            cast_booleans: true,
            cast_json: true,
            missing_file_exit_code: DEFAULT_MISSING_FILE_EXIT_CODE,
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Numeric and boolean casting only: no pass-through escape, no JSON.
    pub fn basic() -> Self {
        Self { passthrough: false, cast_json: false, ..Self::default() }
    }

    /// The `--<name>=` prefix scanned for in process arguments.
    pub fn arg_prefix(&self) -> String {
        format!("--{}=", self.config_key_arg)
    }
}
