//! Overlaying options onto settings
//!
//! Two entry points: [`merge`] takes a loose key/value map (library callers),
//! [`merge_cli_with_config`] takes typed command-line overrides.

use crate::domain::Settings;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Overlay `overrides` onto `settings`.
///
/// Every present key replaces the matching field. Keys without a field are
/// stored in [`Settings::extra`]. Nothing is ever removed, and a value that does
/// not fit its field (wrong type, or an empty file/key name) is skipped with a
/// warning rather than reported.
pub fn merge(settings: &mut Settings, overrides: Option<&Map<String, Value>>) {
    let Some(overrides) = overrides else {
        return;
    };

    for (key, value) in overrides {
        match key.as_str() {
            "debug_casting" | "debugCasting" => set(&mut settings.debug_casting, key, value),
            "env_file_name" | "envFileName" => set_name(&mut settings.env_file_name, key, value),
            "config_key_env" | "configKeyEnv" => set_name(&mut settings.config_key_env, key, value),
            "config_key_arg" | "configKeyArg" => set_name(&mut settings.config_key_arg, key, value),
            "passthrough_char" | "passthroughChar" => {
                set(&mut settings.passthrough_char, key, value)
            }
            "passthrough" => set(&mut settings.passthrough, key, value),
            "require_file" | "requireFile" => set(&mut settings.require_file, key, value),
            "cast_numbers" | "castNumbers" => set(&mut settings.cast_numbers, key, value),
            "cast_booleans" | "castBooleans" => set(&mut settings.cast_booleans, key, value),
            "cast_json" | "castJson" => set(&mut settings.cast_json, key, value),
            "missing_file_exit_code" | "missingFileExitCode" => {
                set(&mut settings.missing_file_exit_code, key, value)
            }
            _ => {
                settings.extra.insert(key.clone(), value.clone());
            }
        }
    }
}

fn set<T: DeserializeOwned>(slot: &mut T, key: &str, value: &Value) {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => *slot = parsed,
        Err(e) => tracing::warn!("Ignoring setting {}: {}", key, e),
    }
}

fn set_name(slot: &mut String, key: &str, value: &Value) {
    match value.as_str() {
        Some(name) if !name.is_empty() => *slot = name.to_string(),
        _ => tracing::warn!("Ignoring setting {}: expected a non-empty string", key),
    }
}

/// Settings that can be overridden from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub no_require: bool,
    pub basic: bool,
    pub debug_casting: bool,
    pub env_file_name: Option<String>,
    pub passthrough_char: Option<char>,
    pub missing_file_exit_code: Option<i32>,
}

/// Apply command-line overrides on top of file-loaded settings.
pub fn merge_cli_with_config(mut settings: Settings, cli: &CliOverrides) -> Settings {
    if cli.no_require {
        settings.require_file = false;
    }
    if cli.basic {
        settings.passthrough = false;
        settings.cast_json = false;
    }
    if cli.debug_casting {
        settings.debug_casting = true;
    }
    if let Some(name) = cli.env_file_name.as_ref().filter(|name| !name.is_empty()) {
        settings.env_file_name = name.clone();
    }
    if let Some(c) = cli.passthrough_char {
        settings.passthrough_char = c;
    }
    if let Some(code) = cli.missing_file_exit_code {
        settings.missing_file_exit_code = code;
    }
    settings
}
