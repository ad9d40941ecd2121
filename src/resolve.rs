//! Env-file path resolution
//!
//! Precedence: `--<arg>=<path>` argument > environment variable > default file
//! name. Relative results are joined onto an explicit base directory.

use crate::domain::Settings;
use crate::env::EnvSnapshot;
use crate::error::ResolveError;
use crate::utils::normalize_path;
use std::path::{Path, PathBuf};

/// Resolves where the env file lives for one invocation.
pub struct PathResolver<'a> {
    settings: &'a Settings,
    base_dir: PathBuf,
    args: Vec<String>,
    env: Option<&'a EnvSnapshot>,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver with no arguments and no environment overrides.
    pub fn new(settings: &'a Settings, base_dir: impl Into<PathBuf>) -> Self {
        Self { settings, base_dir: base_dir.into(), args: Vec::new(), env: None }
    }

    /// Set the command-line arguments scanned for `--<arg>=<path>`
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the environment consulted for the override variable
    pub fn env(mut self, env: &'a EnvSnapshot) -> Self {
        self.env = Some(env);
        self
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Compute the env-file path without touching the filesystem.
    pub fn locate(&self) -> PathBuf {
        let mut raw = self.settings.env_file_name.clone();

        if let Some(value) =
            self.env.and_then(|env| env.get_non_empty(&self.settings.config_key_env))
        {
            tracing::debug!("{} overrides env file path: {}", self.settings.config_key_env, value);
            raw = value.to_string();
        }

        if let Some(value) = self.arg_override() {
            tracing::debug!("{} overrides env file path: {}", self.settings.arg_prefix(), value);
            raw = value.to_string();
        }

        let path = PathBuf::from(raw);
        if path.is_absolute() {
            path
        } else {
            normalize_path(&self.base_dir.join(path))
        }
    }

    /// Compute the env-file path and, when `require_file` is set, check it exists.
    pub fn resolve(&self) -> Result<PathBuf, ResolveError> {
        let path = self.locate();
        if self.settings.require_file && !path.exists() {
            return Err(ResolveError::NotFound { path });
        }
        Ok(path)
    }

    /// Last non-empty `--<arg>=<value>` argument, if any.
    fn arg_override(&self) -> Option<&str> {
        let prefix = self.settings.arg_prefix();
        self.args
            .iter()
            .filter_map(|arg| arg.strip_prefix(prefix.as_str()))
            .filter(|value| !value.is_empty())
            .last()
    }
}
