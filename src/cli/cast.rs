//! Cast command implementation

use anyhow::Result;
use clap::Args;
use envcast::{cast_vars, dotenv_options, load_dotenv, DotenvOptions};
use serde_json::Value;

use super::utils::{exit_on_missing, parse_csv, Invocation};
use super::ExtraArgs;

#[derive(Args)]
pub struct CastArgs {
    /// Cast the current environment only, without reading the env file
    #[arg(long)]
    pub no_load: bool,

    /// Let env file entries replace variables that are already set
    #[arg(long)]
    pub override_existing: bool,

    /// Only print these variables (comma-separated)
    #[arg(long, value_name = "KEYS")]
    pub only: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub extra: ExtraArgs,
}

pub fn run(invocation: &Invocation, args: &CastArgs) -> Result<()> {
    let mut env = invocation.env.clone();

    if !args.no_load {
        let base =
            DotenvOptions { override_existing: args.override_existing, ..DotenvOptions::default() };
        let options = exit_on_missing(
            dotenv_options(&invocation.resolver(), Some(base)),
            &invocation.settings,
        );
        let report = load_dotenv(&options, &mut env)?;
        tracing::info!(
            "Loaded {} variables from {} ({} already set)",
            report.loaded,
            report.path.display(),
            report.skipped
        );
    }

    if let Some(keys) = parse_csv(&args.only) {
        env.retain_keys(&keys);
    }

    let cast = Value::Object(cast_vars(&invocation.settings, &env));
    let rendered = if args.compact {
        serde_json::to_string(&cast)?
    } else {
        serde_json::to_string_pretty(&cast)?
    };
    println!("{}", rendered);
    Ok(())
}
