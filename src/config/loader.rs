//! Settings file loading

use crate::domain::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "envcast";

/// Load settings from `settings_path`, or from a settings file discovered in
/// `base_dir`, falling back to defaults when there is none.
///
/// An explicitly provided file must parse. A discovered one that does not is
/// reported as a warning and ignored.
pub fn load_settings(base_dir: &Path, settings_path: Option<&Path>) -> Result<Settings> {
    let settings_path_provided = settings_path.is_some();

    let discovered = match settings_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(base_dir),
    };

    let Some(settings_file) = discovered else {
        return Ok(Settings::default());
    };

    let parsed = fs::read_to_string(&settings_file)
        .with_context(|| format!("Failed reading settings file: {}", settings_file.display()))
        .and_then(|content| parse_settings(&content, &settings_file));

    match parsed {
        Ok(settings) => {
            tracing::debug!("Loaded settings from {}", settings_file.display());
            Ok(settings)
        }
        Err(e) if !settings_path_provided => {
            tracing::warn!(
                "Failed to load auto-discovered settings {}: {:#}",
                settings_file.display(),
                e
            );
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}

fn parse_settings(content: &str, settings_file: &Path) -> Result<Settings> {
    let ext =
        settings_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let settings = match ext.as_str() {
        "toml" => parse_toml_settings(content, settings_file)?,
        "yaml" | "yml" => parse_yaml_settings(content, settings_file)?,
        other => anyhow::bail!(
            "Unsupported settings extension '.{}' for file {}",
            other,
            settings_file.display()
        ),
    };
    check_names(&settings, settings_file)?;
    Ok(settings)
}

/// File and key names must never be empty.
fn check_names(settings: &Settings, settings_file: &Path) -> Result<()> {
    let names = [
        ("env_file_name", &settings.env_file_name),
        ("config_key_env", &settings.config_key_env),
        ("config_key_arg", &settings.config_key_arg),
    ];
    for (field, value) in names {
        if value.is_empty() {
            anyhow::bail!("Setting {} cannot be empty in {}", field, settings_file.display());
        }
    }
    Ok(())
}

/// Parse TOML settings, accepting an `[envcast]` table as well as top-level keys.
fn parse_toml_settings(content: &str, settings_file: &Path) -> Result<Settings> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", settings_file.display()))?;

    let section = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    section
        .try_into()
        .with_context(|| format!("Invalid TOML settings: {}", settings_file.display()))
}

/// Parse YAML settings, accepting an `envcast:` mapping as well as top-level keys.
fn parse_yaml_settings(content: &str, settings_file: &Path) -> Result<Settings> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", settings_file.display()))?;

    let section = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty document parses as null
    if section.is_null() {
        return Ok(Settings::default());
    }

    serde_yaml::from_value(section)
        .with_context(|| format!("Invalid YAML settings: {}", settings_file.display()))
}

fn discover_settings(base_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "envcast.toml",
        ".envcast.toml",
        "envcast.yaml",
        ".envcast.yaml",
        "envcast.yml",
        ".envcast.yml",
    ];

    candidates.iter().map(|candidate| base_dir.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let settings = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_discovered_toml() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("envcast.toml"),
            "env_file_name = '.env.test'\ncast_json = false\npassthrough_char = '!'\n",
        )
        .expect("write");

        let settings = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(settings.env_file_name, ".env.test");
        assert!(!settings.cast_json);
        assert_eq!(settings.passthrough_char, '!');
        assert!(settings.require_file);
    }

    #[test]
    fn test_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tool.toml");
        fs::write(&path, "[envcast]\nconfig_key_env = 'APP_DOTENV'\nrequire_file = false\n")
            .expect("write");

        let settings = load_settings(tmp.path(), Some(&path)).expect("settings");
        assert_eq!(settings.config_key_env, "APP_DOTENV");
        assert!(!settings.require_file);
    }

    #[test]
    fn test_yaml_settings_with_unknown_keys() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(".envcast.yml"),
            "envcast:\n  missing_file_exit_code: 0\n  encoding: latin1\n",
        )
        .expect("write");

        let settings = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(settings.missing_file_exit_code, 0);
        assert_eq!(settings.extra.get("encoding"), Some(&serde_json::json!("latin1")));
    }

    #[test]
    fn test_empty_yaml_is_defaults() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("envcast.yaml");
        fs::write(&path, "").expect("write");
        let settings = load_settings(tmp.path(), Some(&path)).expect("settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "require_file = 'sometimes'\n").expect("write");

        let result = load_settings(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit settings with invalid type should return Err");
    }

    #[test]
    fn test_explicit_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.ini");
        fs::write(&path, "require_file=false\n").expect("write");

        let err = load_settings(tmp.path(), Some(&path)).expect_err("unsupported");
        assert!(err.to_string().contains("Unsupported settings extension"));
    }

    #[test]
    fn test_explicit_empty_names_return_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("envcast.toml");
        fs::write(&path, "env_file_name = ''\n").expect("write");
        let err = load_settings(tmp.path(), Some(&path)).expect_err("empty file name");
        assert!(err.to_string().contains("env_file_name cannot be empty"));

        let path = tmp.path().join("envcast.yaml");
        fs::write(&path, "config_key_arg: ''\n").expect("write");
        let err = load_settings(tmp.path(), Some(&path)).expect_err("empty arg name");
        assert!(err.to_string().contains("config_key_arg cannot be empty"));
    }

    #[test]
    fn test_auto_discovered_empty_names_return_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("envcast.toml"),
            "env_file_name = ''\nconfig_key_arg = ''\nconfig_key_env = ''\n",
        )
        .expect("write");

        let settings = load_settings(tmp.path(), None).expect("should not error on discovery");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.arg_prefix(), "--config=");

        // The base directory itself must not pass as the env file
        let resolved = crate::resolve::PathResolver::new(&settings, tmp.path()).resolve();
        assert!(resolved.is_err());
    }

    #[test]
    fn test_explicit_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nope.toml");
        assert!(load_settings(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("envcast.toml"), "require_file = [1, 2]\n").expect("write");

        let settings = load_settings(tmp.path(), None).expect("should not error on discovery");
        assert_eq!(settings, Settings::default());
    }
}
