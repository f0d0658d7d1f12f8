mod commands;
mod config;
mod logging;
mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "divvy")]
#[command(author, version, about = "Shared-expense ledger", long_about = None)]
struct Cli {
    /// custom config file (default: ~/.divvy/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// decimals shown for balances and amounts
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a file of ledger commands, one per line
    Run {
        file: PathBuf,

        /// stop at the first failing line
        #[arg(long)]
        strict: bool,
    },

    /// Read ledger commands from stdin interactively
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    logging::init(&config.log_level);

    match cli.command {
        Commands::Run { file, strict } => {
            config.strict |= strict;
            commands::run::run(file, config)?;
        }
        Commands::Repl => {
            commands::repl::run(config)?;
        }
    }
    Ok(())
}
