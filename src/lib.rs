//! envcast: resolve, load and type-cast dotenv environment configuration
//!
//! The env-file path comes from an explicit `--config=<path>` argument, a
//! `DOTENV_CONFIG` environment variable, or a default `.env` next to an
//! explicit base directory. Values of the resulting environment can then be
//! cast into numbers, booleans and JSON values.
//!
//! ```no_run
//! use envcast::{cast_vars, dotenv_options, load_dotenv, EnvSnapshot, PathResolver, Settings};
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let mut env = EnvSnapshot::from_process();
//! let resolver = PathResolver::new(&settings, "/srv/app").args(std::env::args()).env(&env);
//! let options = dotenv_options(&resolver, None)?;
//! load_dotenv(&options, &mut env)?;
//! let typed = cast_vars(&settings, &env);
//! println!("{}", serde_json::Value::Object(typed));
//! # Ok(())
//! # }
//! ```

pub mod cast;
pub mod config;
pub mod domain;
pub mod env;
pub mod envfile;
pub mod error;
pub mod resolve;
pub mod utils;

pub use cast::{cast_value, cast_vars, CastEnv, CastOutcome};
pub use config::{load_settings, merge};
pub use domain::Settings;
pub use env::EnvSnapshot;
pub use envfile::{dotenv_options, load_dotenv, DotenvOptions, LoadReport};
pub use error::ResolveError;
pub use resolve::PathResolver;
