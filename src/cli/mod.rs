//! Command-line interface for envcast
//!
//! Provides `path`, `cast`, `options` and `completions` subcommands. This is
//! the only place where a missing env file ends the process.

use anyhow::Result;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envcast::config::{load_settings, merge_cli_with_config, CliOverrides};
use envcast::domain::DEFAULT_CONFIG_KEY_ARG;
use envcast::EnvSnapshot;

mod cast;
mod options;
mod path;
mod utils;

use utils::Invocation;

/// Resolve, load and type-cast dotenv environment configuration
#[derive(Parser)]
#[command(name = "envcast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Env file path, overriding DOTENV_CONFIG and the default name
    #[arg(
        long = "config",
        value_name = "PATH",
        global = true,
        require_equals = true,
        action = ArgAction::Append
    )]
    config: Vec<String>,

    /// Directory relative env file paths are resolved against [default: current directory]
    #[arg(long, value_name = "DIR", global = true)]
    base_dir: Option<PathBuf>,

    /// Settings file (TOML or YAML) [default: envcast.toml etc. in the base directory]
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    /// Default env file name
    #[arg(long, value_name = "NAME", global = true)]
    file_name: Option<String>,

    /// Do not fail when the env file does not exist
    #[arg(long, global = true)]
    no_require: bool,

    /// Only cast numbers and booleans (no pass-through marker, no JSON)
    #[arg(long, global = true)]
    basic: bool,

    /// Trailing marker that keeps a value as a string
    #[arg(long, value_name = "CHAR", global = true)]
    passthrough_char: Option<char>,

    /// Log every casting decision
    #[arg(long, global = true)]
    debug_casting: bool,

    /// Exit status when the env file is missing
    #[arg(long, value_name = "CODE", global = true, allow_negative_numbers = true)]
    missing_exit_code: Option<i32>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved env file path
    Path(path::PathArgs),

    /// Load the env file and print the typed environment as JSON
    Cast(cast::CastArgs),

    /// Print the options handed to the env file loader
    Options(options::OptionsArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    fn extra_args(&self) -> &[String] {
        match self {
            Commands::Path(args) => &args.extra.rest,
            Commands::Cast(args) => &args.extra.rest,
            Commands::Options(args) => &args.extra.rest,
            Commands::Completions { .. } => &[],
        }
    }
}

/// Arguments after `--`, scanned for a custom `--<name>=<path>` override
#[derive(Args, Default)]
pub struct ExtraArgs {
    #[arg(last = true, value_name = "ARGS")]
    pub rest: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    // Casting traces are gated by the debug_casting setting, so their target stays open.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let filter = filter.add_directive("envcast::cast=debug".parse()?);
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "envcast", &mut std::io::stdout());
        return Ok(());
    }

    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let settings = load_settings(&base_dir, cli.settings.as_deref())?;
    let overrides = CliOverrides {
        no_require: cli.no_require,
        basic: cli.basic,
        debug_casting: cli.debug_casting,
        env_file_name: cli.file_name.clone(),
        passthrough_char: cli.passthrough_char,
        missing_file_exit_code: cli.missing_exit_code,
    };
    let settings = merge_cli_with_config(settings, &overrides);

    if !cli.config.is_empty() && settings.config_key_arg != DEFAULT_CONFIG_KEY_ARG {
        tracing::warn!(
            "Ignoring --config: the override argument is {}<PATH>, pass it after --",
            settings.arg_prefix()
        );
    }

    let args = cli
        .config
        .iter()
        .map(|path| format!("--config={}", path))
        .chain(cli.command.extra_args().iter().cloned())
        .collect();
    let invocation = Invocation { settings, base_dir, args, env: EnvSnapshot::from_process() };

    match &cli.command {
        Commands::Path(args) => path::run(&invocation, args),
        Commands::Cast(args) => cast::run(&invocation, args),
        Commands::Options(args) => options::run(&invocation, args),
        Commands::Completions { .. } => Ok(()),
    }
}
