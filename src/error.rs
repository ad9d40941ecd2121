//! Error types for env-file path resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::resolve::PathResolver::resolve`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolved env file does not exist and a file is required
    #[error("Could not open dotenv file at: {}", .path.display())]
    NotFound { path: PathBuf },
}

impl ResolveError {
    /// Path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            ResolveError::NotFound { path } => path,
        }
    }
}
