//! Shared CLI utilities.

use envcast::{EnvSnapshot, PathResolver, ResolveError, Settings};
use std::path::PathBuf;

/// Everything a subcommand needs to resolve and cast.
pub struct Invocation {
    pub settings: Settings,
    pub base_dir: PathBuf,
    /// Arguments scanned for the `--<name>=<path>` override
    pub args: Vec<String>,
    pub env: EnvSnapshot,
}

impl Invocation {
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.settings, &self.base_dir)
            .args(self.args.iter().cloned())
            .env(&self.env)
    }
}

/// Unwrap a resolution result, ending the process when the env file is missing.
///
/// Prints the error to stderr and exits with the configured status.
pub fn exit_on_missing<T>(result: Result<T, ResolveError>, settings: &Settings) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(settings.missing_file_exit_code);
        }
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        assert_eq!(parse_csv(&None), None);
        assert_eq!(
            parse_csv(&Some(" PORT, ,DEBUG ".to_string())),
            Some(vec!["PORT".to_string(), "DEBUG".to_string()])
        );
    }

    #[test]
    fn test_invocation_resolver_uses_args_and_env() {
        let invocation = Invocation {
            settings: Settings { require_file: false, ..Settings::default() },
            base_dir: PathBuf::from("/app"),
            args: vec!["--config=b.env".to_string()],
            env: [("DOTENV_CONFIG", "/tmp/a.env")].into_iter().collect(),
        };
        assert_eq!(invocation.resolver().locate(), PathBuf::from("/app/b.env"));
    }
}
