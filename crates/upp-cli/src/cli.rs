//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use upp_blocks::BlockLang;

/// uni-project-private - Merge <project-private> blocks into project.private.config.json
#[derive(Parser, Debug)]
#[command(name = "upp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by commands that read blocks
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectArgs {
    /// Project root (defaults to $VITE_ROOT_DIR, then the current directory)
    #[arg(long, env = "VITE_ROOT_DIR")]
    pub root: Option<PathBuf>,

    /// Directory under the root holding project.private.config.json
    #[arg(long)]
    pub dir: Option<String>,

    /// Format for blocks without a lang attribute
    #[arg(long, value_parser = parse_lang)]
    pub lang: Option<BlockLang>,

    /// Options file (TOML, JSON or YAML); defaults to <root>/upp.toml if present
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run one build: strip blocks from every component under src/ and
    /// rewrite the entry list
    ///
    /// Examples:
    ///   upp build                  # Update src/project.private.config.json
    ///   upp build --out dist/src   # Also write stripped sources to dist/src
    ///   upp build --lang yaml      # Blocks without lang= are YAML
    Build {
        #[command(flatten)]
        project: ProjectArgs,

        /// Write stripped components to this directory, mirroring src/
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output the build summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the entries one component would contribute, without writing
    Inspect {
        /// Component file to read
        file: PathBuf,

        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_lang(value: &str) -> Result<BlockLang, String> {
    value.parse::<BlockLang>().map_err(|e| e.to_string())
}
