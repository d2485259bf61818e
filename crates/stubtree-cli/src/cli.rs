//! CLI definitions for stubtree.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build and query Structured Text stub trees.
#[derive(Debug, Parser)]
#[command(
    name = "stubtree",
    version,
    after_help = "Examples:\n  stubtree build motor.stree\n  stubtree build motor.stree --json --config stubtree.toml\n  stubtree lookup motor.stree Start"
)]
pub struct Cli {
    /// Show debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the stub tree of a fixture file and print it.
    Build {
        /// Syntax tree in fixture notation.
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,
        /// Builder configuration (defaults to stubtree.toml next to the fixture).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Walk raw syntax elements instead of the typed view.
        #[arg(long)]
        raw: bool,
        /// Print the stub tree as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Find stubs declaring a name.
    Lookup {
        /// Syntax tree in fixture notation.
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,
        /// Name to look up (case-insensitive).
        name: String,
        /// Builder configuration (defaults to stubtree.toml next to the fixture).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
