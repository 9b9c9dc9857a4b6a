//! CLI Adapter.

mod config;
mod init;
mod logging;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fossa")]
#[command(version)]
#[command(about = "Resolve and persist FOSSA CLI configuration", long_about = None)]
struct Cli {
    /// Path to the config file (defaults to .fossa.yml, then .fossa.yaml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging (overridden by FOSSA_LOG)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the resolved configuration to the config file
    #[clap(visible_alias = "i")]
    Init {
        /// FOSSA server URL to record
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
        /// Project name to record
        #[arg(short = 'p', long)]
        project: Option<String>,
        /// Replace an existing config file
        #[arg(short = 'O', long)]
        overwrite: bool,
    },
    /// Print the resolved configuration
    Config {
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { endpoint, project, overwrite } => {
            init::run_init(cli.config, endpoint, project, overwrite)
        }
        Commands::Config { json } => config::run_config(cli.config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
