//! Options command implementation

use anyhow::Result;
use clap::Args;
use envcast::{dotenv_options, DotenvOptions};

use super::utils::{exit_on_missing, Invocation};
use super::ExtraArgs;

#[derive(Args)]
pub struct OptionsArgs {
    /// Let env file entries replace variables that are already set
    #[arg(long)]
    pub override_existing: bool,

    #[command(flatten)]
    pub extra: ExtraArgs,
}

pub fn run(invocation: &Invocation, args: &OptionsArgs) -> Result<()> {
    let base =
        DotenvOptions { override_existing: args.override_existing, ..DotenvOptions::default() };
    let options =
        exit_on_missing(dotenv_options(&invocation.resolver(), Some(base)), &invocation.settings);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
