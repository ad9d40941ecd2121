//! envcast: print the resolved env-file path or the typed environment

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
