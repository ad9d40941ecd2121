//! Path command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{exit_on_missing, Invocation};
use super::ExtraArgs;

#[derive(Args)]
pub struct PathArgs {
    #[command(flatten)]
    pub extra: ExtraArgs,
}

pub fn run(invocation: &Invocation, _args: &PathArgs) -> Result<()> {
    let path = exit_on_missing(invocation.resolver().resolve(), &invocation.settings);
    println!("{}", path.display());
    Ok(())
}
