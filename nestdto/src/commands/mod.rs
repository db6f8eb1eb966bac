mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use nestdto_config::{CONFIG_FILE, ConfigFile, RawOptions};
use tracing::debug;

/// Print a config error with its diagnostic and exit.
pub(crate) fn exit_with_diagnostic(e: nestdto_config::Error) -> ! {
    eprintln!("{:?}", miette::Report::new(e));
    std::process::exit(1);
}

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for nestdto_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with_diagnostic(*e),
        }
    }
}

/// Config file arguments shared by commands that read generator options.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to nestdto.toml
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Override a generator option (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl ConfigArgs {
    /// Open the config file and apply `--set` overrides to its options.
    pub fn load(&self) -> nestdto_config::Result<(ConfigFile, RawOptions)> {
        let file = ConfigFile::open(&self.config)?;
        let mut raw = file.raw_options().clone();
        for pair in &self.overrides {
            raw.apply_override(pair)?;
        }
        debug!(
            config = %file.path().display(),
            options = raw.len(),
            overrides = self.overrides.len(),
            "loaded generator options"
        );
        Ok((file, raw))
    }
}

#[derive(Parser)]
#[command(name = "nestdto")]
#[command(version)]
#[command(about = "Generate NestJS DTO and entity classes from a data-model schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate DTO and entity files from the schema
    Generate(GenerateCommand),

    /// Validate nestdto.toml and the schema without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
