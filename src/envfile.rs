//! Env-file loader options and the loader itself
//!
//! [`dotenv_options`] produces the options a loader needs, with the resolved
//! path filled in. [`load_dotenv`] reads the file with the `dotenv` crate into an
//! [`EnvSnapshot`]; the `.env` grammar is entirely that crate's business.

use crate::env::EnvSnapshot;
use crate::error::ResolveError;
use crate::resolve::PathResolver;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Options handed to the env-file loader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DotenvOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Let file entries replace variables that are already set
    #[serde(default)]
    pub override_existing: bool,
    /// Loader options envcast does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of loading an env file into a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub path: PathBuf,
    /// Entries written into the snapshot
    pub loaded: usize,
    /// Entries left alone because the variable was already set
    pub skipped: usize,
    /// Whether the file was present at all
    pub found: bool,
}

/// Resolve the env-file path and set it on `base` (or on default options).
pub fn dotenv_options(
    resolver: &PathResolver<'_>,
    base: Option<DotenvOptions>,
) -> Result<DotenvOptions, ResolveError> {
    let mut options = base.unwrap_or_default();
    options.path = Some(resolver.resolve()?);
    Ok(options)
}

/// Read the env file named by `options.path` into `env`.
///
/// A missing file yields an empty report; whether that is acceptable was
/// already decided by path resolution.
pub fn load_dotenv(options: &DotenvOptions, env: &mut EnvSnapshot) -> Result<LoadReport> {
    let path = options.path.clone().context("No env file path set in loader options")?;
    let mut report = LoadReport { path, ..LoadReport::default() };

    if !report.path.is_file() {
        if report.path.exists() {
            tracing::warn!(
                "Env file path {} is not a file, nothing loaded",
                report.path.display()
            );
        } else {
            tracing::debug!("No env file at {}, nothing loaded", report.path.display());
        }
        return Ok(report);
    }
    report.found = true;

    // The only dotenv 0.15 reader that leaves the process env untouched
    #[allow(deprecated)]
    let entries = dotenv::from_path_iter(&report.path)
        .with_context(|| format!("Failed opening env file: {}", report.path.display()))?;

    for entry in entries {
        let (key, value) = entry
            .with_context(|| format!("Failed parsing env file: {}", report.path.display()))?;
        if env.contains(&key) && !options.override_existing {
            tracing::trace!("{} already set, keeping existing value", key);
            report.skipped += 1;
            continue;
        }
        env.set(key, value);
        report.loaded += 1;
    }

    tracing::debug!(
        "Loaded {} entries from {} ({} already set)",
        report.loaded,
        report.path.display(),
        report.skipped
    );
    Ok(report)
}
