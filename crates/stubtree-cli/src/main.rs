//! CLI entrypoint for stubtree.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stubtree_cli::cli::Cli;
use stubtree_cli::commands;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(&cli.command) {
        Ok(outcome) => {
            print!("{}", outcome.stdout);
            for line in &outcome.stderr {
                eprintln!("{line}");
            }
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
