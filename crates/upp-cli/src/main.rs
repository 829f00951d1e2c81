//! uni-project-private CLI
//!
//! Runs the block-extraction build over a project tree outside of a bundler.

mod cli;
mod commands;
mod error;

use std::io;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Warnings always reach stderr: a missing config document is only logged
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} uni-project-private", "upp".green().bold());
            println!();
            println!("Run {} for available commands.", "upp --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Build { project, out, json } => {
            commands::run_build(&cwd, &project, out.as_deref(), json)
        }
        Commands::Inspect { file, project } => commands::run_inspect(&cwd, &file, &project),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "upp", &mut io::stdout());
            Ok(())
        }
    }
}
